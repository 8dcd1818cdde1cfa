//! # Configuration
//!
//! Settings the console needs to reach its backend and persist its session.

pub mod client;

pub use client::{ClientConfig, ConfigError, TOKEN_STORAGE_KEY};
