//! ShareIt: a peer-to-peer item sharing service.
//!
//! The crate builds two binaries. `shareit-server` owns the database and the
//! business rules; `shareit-gateway` validates requests and forwards them to the
//! server. Both share the wire DTOs in [`model`] and the header extractor in
//! [`extract`].

pub mod config_error;
pub mod extract;
pub mod model;

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "gateway")]
pub mod gateway;
