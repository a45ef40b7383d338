use async_trait::async_trait;
use bmx_core::relevance::EventStatus;
use bmx_core::types::{DbId, Timestamp};
use bmx_core::window::Window;
use bmx_db::models::alert::AlertWithTrack;
use bmx_db::models::event::EventWithTrack;
use bmx_db::models::track::Track;
use bmx_db::repositories::{AlertRepo, EventRepo, SourceRepo, TrackRepo};
use bmx_db::DbPool;

/// Read primitives the calendar service needs from the data store.
///
/// Implementations must not apply keyword or priority rules; those belong
/// to the service.
#[async_trait]
pub trait CalendarStore: Send + Sync {
    async fn find_track(&self, slug: &str) -> Result<Option<Track>, sqlx::Error>;

    async fn list_tracks(&self) -> Result<Vec<Track>, sqlx::Error>;

    /// Events starting within `window` (inclusive) with one of `statuses`,
    /// ordered by start time then id.
    async fn list_events(
        &self,
        window: Window,
        statuses: &[EventStatus],
        track_id: Option<DbId>,
    ) -> Result<Vec<EventWithTrack>, sqlx::Error>;

    /// Alerts posted within `window` (inclusive), newest first.
    async fn list_alerts(&self, window: Window) -> Result<Vec<AlertWithTrack>, sqlx::Error>;

    async fn latest_alert_at(&self) -> Result<Option<Timestamp>, sqlx::Error>;

    async fn latest_scrape_at(&self) -> Result<Option<Timestamp>, sqlx::Error>;
}

/// PostgreSQL-backed store delegating to the repositories.
#[derive(Clone)]
pub struct PgCalendarStore {
    pool: DbPool,
}

impl PgCalendarStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalendarStore for PgCalendarStore {
    async fn find_track(&self, slug: &str) -> Result<Option<Track>, sqlx::Error> {
        TrackRepo::find_by_slug(&self.pool, slug).await
    }

    async fn list_tracks(&self) -> Result<Vec<Track>, sqlx::Error> {
        TrackRepo::list(&self.pool).await
    }

    async fn list_events(
        &self,
        window: Window,
        statuses: &[EventStatus],
        track_id: Option<DbId>,
    ) -> Result<Vec<EventWithTrack>, sqlx::Error> {
        EventRepo::list_in_window(&self.pool, window.start, window.end, statuses, track_id).await
    }

    async fn list_alerts(&self, window: Window) -> Result<Vec<AlertWithTrack>, sqlx::Error> {
        AlertRepo::list_posted_between(&self.pool, window.start, window.end).await
    }

    async fn latest_alert_at(&self) -> Result<Option<Timestamp>, sqlx::Error> {
        AlertRepo::latest_posted_at(&self.pool).await
    }

    async fn latest_scrape_at(&self) -> Result<Option<Timestamp>, sqlx::Error> {
        SourceRepo::latest_checked_at(&self.pool).await
    }
}
