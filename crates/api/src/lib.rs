//! Denver BMX calendar API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes, the
//! calendar query service) so integration tests and the binary entrypoint
//! can both access them.

pub mod calendar;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
