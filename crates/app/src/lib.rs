//! Shared domain, persistence, and client modules for the promotion tracker.

pub mod client;
pub mod context;
pub mod database;
pub mod domain;
