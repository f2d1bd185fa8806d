//! Core types shared across TutorDesk crates
//!
//! - **Correlation**: `RequestId` for tagging one HTTP request or CLI run
//! - **Sensitive data**: `Sensitive<T>` marker for automatic redaction
//! - **Schema constants**: canonical log field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RequestId;
pub use sensitive::Sensitive;
