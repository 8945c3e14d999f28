//! Command handlers.

pub mod subscription;
