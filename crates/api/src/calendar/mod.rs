//! Event and alert query service.
//!
//! [`CalendarService`] composes the civil-day window, the store reads and
//! the selection rules from `bmx_core`. [`CalendarStore`] is the seam
//! between the service and PostgreSQL.

pub mod service;
pub mod store;

pub use service::{CalendarService, RecentAlerts, TrackPage};
pub use store::{CalendarStore, PgCalendarStore};
