//! Track entity model.

use bmx_core::relevance::TrackEntry;
use bmx_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tracks` table.
///
/// `Deserialize` is needed because events and alerts embed their track as a
/// JSON column built with `to_jsonb(t)`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Track {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub city: String,
    pub timezone: String,
    pub website_url: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub usabmx_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Timestamp,
}

impl TrackEntry for Track {
    fn name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}
