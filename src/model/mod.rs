//! Wire-format DTOs shared by the server and the gateway.
//!
//! All bodies use camelCase keys. Timestamps are ISO-8601 local date-times
//! (`2030-01-01T10:00:00`) interpreted as UTC.

pub mod api;
pub mod booking;
pub mod item;
pub mod request;
pub mod user;
