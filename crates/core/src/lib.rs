//! Domain logic for the Denver BMX calendar.
//!
//! Pure logic only: no database or HTTP access. The API crate fetches rows
//! and passes them through the selection functions defined here.

pub mod clock;
pub mod config;
pub mod error;
pub mod freshness;
pub mod keywords;
pub mod priority;
pub mod relevance;
pub mod types;
pub mod window;
