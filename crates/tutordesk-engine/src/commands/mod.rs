//! Engine commands and queries

pub mod association;
pub mod auth;
pub mod engine_query;
pub mod events;
pub mod read_tools;
pub mod registration;

use std::time::Instant;
use tutordesk_core::{log_op_end, log_op_error};
use tutordesk_store::Result;

/// Log the end (or end_error) event for an operation started at `start`
pub(crate) fn finish_op<T>(op: &'static str, start: Instant, result: &Result<T>) {
    let elapsed = start.elapsed().as_millis() as u64;
    match result {
        Ok(_) => {
            log_op_end!(op, duration_ms = elapsed);
        }
        Err(e) => {
            log_op_error!(op, e.clone(), duration_ms = elapsed);
        }
    }
}
