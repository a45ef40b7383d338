//! Repository for the `sources` table.

use bmx_core::types::Timestamp;
use sqlx::PgPool;

/// Read access to ingestion bookkeeping.
pub struct SourceRepo;

impl SourceRepo {
    /// Newest `last_checked_at` across all sources.
    pub async fn latest_checked_at(pool: &PgPool) -> Result<Option<Timestamp>, sqlx::Error> {
        sqlx::query_scalar("SELECT MAX(last_checked_at) FROM sources")
            .fetch_one(pool)
            .await
    }
}
