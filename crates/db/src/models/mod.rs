//! Row models for the tables the ingestion process writes.
//!
//! Each submodule contains a `FromRow` + `Serialize` struct matching the
//! table, plus a track-embedding variant where the API returns one.

pub mod alert;
pub mod event;
pub mod track;
