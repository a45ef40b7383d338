use std::sync::Arc;

use bmx_core::clock::Clock;
use bmx_core::config::RelevanceConfig;
use bmx_core::error::CoreError;
use bmx_core::freshness::Freshness;
use bmx_core::relevance::{order_tracks, select_active_events, select_recent_alerts, EventStatus};
use bmx_core::types::DbId;
use bmx_core::window::{alert_window, clamp_window_days, event_window};
use bmx_db::models::alert::AlertWithTrack;
use bmx_db::models::event::EventWithTrack;
use bmx_db::models::track::Track;
use serde::Serialize;

use super::store::CalendarStore;
use crate::error::AppResult;

/// Alerts for the banner, newest first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentAlerts {
    pub alerts: Vec<AlertWithTrack>,
    pub has_alerts: bool,
}

/// A track together with its upcoming active events.
#[derive(Debug, Serialize)]
pub struct TrackPage {
    pub track: Track,
    pub events: Vec<EventWithTrack>,
}

/// Recomputes "now" and reissues every read on each call; holds no
/// per-request state.
#[derive(Clone)]
pub struct CalendarService {
    store: Arc<dyn CalendarStore>,
    clock: Arc<dyn Clock>,
    config: Arc<RelevanceConfig>,
}

impl CalendarService {
    pub fn new(
        store: Arc<dyn CalendarStore>,
        clock: Arc<dyn Clock>,
        config: Arc<RelevanceConfig>,
    ) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Active events from today's civil midnight through `days` days ahead.
    ///
    /// A `track_filter` slug that matches no track is ignored and the
    /// unfiltered list is returned.
    pub async fn active_events(
        &self,
        days: Option<i64>,
        track_filter: Option<&str>,
    ) -> AppResult<Vec<EventWithTrack>> {
        let track_id = match track_filter {
            Some(slug) => self.resolve_track_filter(slug).await?,
            None => None,
        };
        self.events_for(days, track_id).await
    }

    /// Relevant alerts posted since yesterday's civil midnight, capped.
    pub async fn recent_alerts(&self) -> AppResult<RecentAlerts> {
        let window = alert_window(self.clock.now(), self.config.timezone)?;
        let candidates = self.store.list_alerts(window).await?;
        let fetched = candidates.len();

        let alerts = select_recent_alerts(
            candidates,
            &self.config.alert_keywords,
            self.config.alert_limit,
        );
        tracing::debug!(fetched, shown = alerts.len(), "Selected recent alerts");

        Ok(RecentAlerts {
            has_alerts: !alerts.is_empty(),
            alerts,
        })
    }

    pub async fn refresh_status(&self) -> AppResult<Freshness> {
        let last_alert = self.store.latest_alert_at().await?;
        let last_scrape = self.store.latest_scrape_at().await?;
        Ok(self
            .config
            .freshness
            .evaluate(last_alert, last_scrape, self.clock.now()))
    }

    /// All tracks by name, listing priority as the tie-break.
    pub async fn tracks(&self) -> AppResult<Vec<Track>> {
        let mut tracks = self.store.list_tracks().await?;
        order_tracks(&mut tracks, &self.config.listing_ranks);
        Ok(tracks)
    }

    /// A single track page. Unlike the events filter, an unknown slug here
    /// is a not-found.
    pub async fn track_page(&self, slug: &str) -> AppResult<TrackPage> {
        let track = self
            .store
            .find_track(slug)
            .await?
            .ok_or_else(|| CoreError::NotFound {
                entity: "Track",
                key: slug.to_string(),
            })?;

        let events = self.events_for(None, Some(track.id)).await?;
        Ok(TrackPage { track, events })
    }

    async fn resolve_track_filter(&self, slug: &str) -> AppResult<Option<DbId>> {
        let track = self.store.find_track(slug).await?;
        if track.is_none() {
            tracing::debug!(slug, "Unknown track filter ignored");
        }
        Ok(track.map(|t| t.id))
    }

    async fn events_for(
        &self,
        days: Option<i64>,
        track_id: Option<DbId>,
    ) -> AppResult<Vec<EventWithTrack>> {
        let days = clamp_window_days(days, self.config.default_window_days);
        let window = event_window(self.clock.now(), self.config.timezone, days)?;

        let candidates = self
            .store
            .list_events(window, &EventStatus::ACTIVE, track_id)
            .await?;
        let fetched = candidates.len();

        let events = select_active_events(
            candidates,
            &self.config.cancellation_keywords,
            &self.config.event_ranks,
        );
        tracing::debug!(days, track_id, fetched, shown = events.len(), "Selected active events");

        Ok(events)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
