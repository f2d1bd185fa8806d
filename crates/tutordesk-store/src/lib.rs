//! TutorDesk Store - SQLite persistence layer
//!
//! Provides:
//! - Connection management and the `Database` handle
//! - Embedded SQL migrations with checksums
//! - Repository functions per table family (people, groups, links, events)

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use db::Database;
pub use errors::Result;
