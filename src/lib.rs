//! Ludora Core - client-side engine for the Ludora education platform.
//!
//! Provides the subscription plan reconciliation logic, the REST API client
//! used to talk to the platform backend, and the game-type plugin registry.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
