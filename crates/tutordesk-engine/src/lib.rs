//! TutorDesk Engine - commands and queries over the store
//!
//! Commands validate input, open a transaction where more than one
//! statement is written, and log each operation with the canonical
//! `log_op_*` events. Queries are read-only and take a shared connection.

pub mod commands;
