pub mod alerts;
pub mod events;
pub mod refresh_status;
pub mod tracks;
