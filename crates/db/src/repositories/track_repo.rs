//! Repository for the `tracks` table.

use sqlx::PgPool;

use crate::models::track::Track;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, name, city, timezone, website_url, facebook_url, \
     instagram_url, usabmx_url, latitude, longitude, created_at";

/// Read access to tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Find a track by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE slug = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List every track ordered by name. The listing priority tie-break is
    /// applied by the caller.
    pub async fn list(pool: &PgPool) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY name, id");
        sqlx::query_as::<_, Track>(&query).fetch_all(pool).await
    }
}
