//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument. Nothing here writes.

pub mod alert_repo;
pub mod event_repo;
pub mod source_repo;
pub mod track_repo;

pub use alert_repo::AlertRepo;
pub use event_repo::EventRepo;
pub use source_repo::SourceRepo;
pub use track_repo::TrackRepo;
