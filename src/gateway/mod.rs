//! ShareIt validation gateway.
//!
//! The gateway is the public entry point. It checks request shape (headers, paging,
//! booking state names, body fields, booking windows) and forwards valid requests
//! unchanged to the server, relaying the server's status and JSON body. Anything
//! that depends on stored data is left to the server.
//!
//! # Layout
//!
//! - **Controller** (`controller/`) - One handler per server route
//! - **Validation** (`validate`) - `garde` request bodies and query checks
//! - **Client** (`client`) - `reqwest` forwarding to the server
//! - **Error** (`error`) - `GatewayError` and its HTTP mapping
//! - **Configuration** (`config`), **State** (`state`), **Router** (`router`)
//!
//! # Feature Gates
//!
//! This module is only available with the `gateway` feature flag enabled.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod router;
pub mod state;
pub mod validate;
