//! HTTP request handlers organized by domain

pub mod advisor;
pub mod ledger;

// Re-export all handlers for use in router
pub use advisor::*;
pub use ledger::*;
