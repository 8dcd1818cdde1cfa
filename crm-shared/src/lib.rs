//! Shared building blocks for the CRM console.
//!
//! Everything here is target independent so the access rules, wire models,
//! and API client can be exercised by native tests and compiled into the
//! browser bundle unchanged.

pub mod access;
pub mod client;
pub mod config;
pub mod fetch;
pub mod models;
pub mod session;
pub mod validation;

pub use client::{ApiError, CrmClient};
pub use session::{MemoryTokenStorage, Session, SessionStore, TokenStorage};
