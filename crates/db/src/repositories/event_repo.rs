//! Repository for the `events` table.

use bmx_core::relevance::EventStatus;
use bmx_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::event::EventWithTrack;

/// Event columns qualified with the `e` alias, plus the owning track as JSON.
const COLUMNS: &str = "e.id, e.track_id, e.title, e.description, e.start_at, e.end_at, \
     e.status, e.url, e.fee, e.class, e.created_at, e.updated_at, \
     to_jsonb(t) AS track";

/// Read access to events.
pub struct EventRepo;

impl EventRepo {
    /// List events starting within `[start, end]` (both inclusive) whose
    /// status is one of `statuses`, optionally restricted to one track.
    ///
    /// Ordered by start time, then id.
    pub async fn list_in_window(
        pool: &PgPool,
        start: Timestamp,
        end: Timestamp,
        statuses: &[EventStatus],
        track_id: Option<DbId>,
    ) -> Result<Vec<EventWithTrack>, sqlx::Error> {
        let statuses: Vec<&str> = statuses.iter().map(|s| s.as_str()).collect();
        let query = format!(
            "SELECT {COLUMNS} \
             FROM events e \
             JOIN tracks t ON t.id = e.track_id \
             WHERE e.start_at >= $1 \
               AND e.start_at <= $2 \
               AND e.status = ANY($3) \
               AND ($4::BIGINT IS NULL OR e.track_id = $4) \
             ORDER BY e.start_at, e.id"
        );
        sqlx::query_as::<_, EventWithTrack>(&query)
            .bind(start)
            .bind(end)
            .bind(&statuses)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }
}
