//! Adapters - implementations of ports against real infrastructure.

pub mod http;
