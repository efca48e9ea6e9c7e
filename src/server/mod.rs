//! ShareIt business-logic server.
//!
//! The server owns the database and enforces every rule about users, items,
//! bookings, item requests and comments. It trusts the gateway for input
//! shape validation but re-checks everything that depends on stored state.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, header extraction and DTO conversion
//! - **Service Layer** (`service/`) - Existence, ownership and booking rules
//! - **Data Layer** (`data/`) - SeaORM queries and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation parameters
//! - **Error Layer** (`error/`) - `AppError` and its HTTP mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared database pool
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
