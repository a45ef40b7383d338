//! Repository for the `alerts` table.

use bmx_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::alert::AlertWithTrack;

const COLUMNS: &str = "a.id, a.track_id, a.posted_at, a.body, a.url, a.created_at, \
     to_jsonb(t) AS track";

/// Read access to alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// List alerts posted within `[since, until]`, newest first.
    pub async fn list_posted_between(
        pool: &PgPool,
        since: Timestamp,
        until: Timestamp,
    ) -> Result<Vec<AlertWithTrack>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} \
             FROM alerts a \
             JOIN tracks t ON t.id = a.track_id \
             WHERE a.posted_at >= $1 AND a.posted_at <= $2 \
             ORDER BY a.posted_at DESC, a.id DESC"
        );
        sqlx::query_as::<_, AlertWithTrack>(&query)
            .bind(since)
            .bind(until)
            .fetch_all(pool)
            .await
    }

    /// Posted-at of the newest alert of any content, if there is one.
    pub async fn latest_posted_at(pool: &PgPool) -> Result<Option<Timestamp>, sqlx::Error> {
        sqlx::query_scalar("SELECT MAX(posted_at) FROM alerts")
            .fetch_one(pool)
            .await
    }
}
