//! Alert entity model.

use bmx_core::relevance::AlertPost;
use bmx_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::track::Track;

/// A row from the `alerts` table: one post scraped from a track's feed.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Alert {
    pub id: DbId,
    pub track_id: DbId,
    pub posted_at: Timestamp,
    pub body: String,
    pub url: Option<String>,
    pub created_at: Timestamp,
}

/// An alert joined with its owning track.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct AlertWithTrack {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub alert: Alert,
    #[sqlx(json)]
    pub track: Track,
}

impl AlertPost for AlertWithTrack {
    fn body(&self) -> &str {
        &self.alert.body
    }

    fn posted_at(&self) -> Timestamp {
        self.alert.posted_at
    }
}
