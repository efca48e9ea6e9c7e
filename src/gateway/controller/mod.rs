//! Gateway handlers.
//!
//! Each handler mirrors one server route: it extracts and validates the request,
//! then forwards it with [`ServerClient`](crate::gateway::client::ServerClient).

pub mod booking;
pub mod item;
pub mod request;
pub mod user;
