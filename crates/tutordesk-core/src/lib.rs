//! TutorDesk Core - domain model, validation and cross-cutting facilities
//!
//! This crate provides:
//! - Person, group and event models shared by the store, engine and server
//! - Input validation rules applied before anything touches the database
//! - The structured error facility (`ExError`, `ExErrorKind`, `TutorError`)
//! - The structured logging facility (`logging_facility`, `log_op_*!` macros)

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Used by the exported logging macros
#[doc(hidden)]
pub use tutordesk_core_types as core_types;

pub use errors::{ExError, ExErrorKind, Result, TutorError};
pub use model::{Event, Group, NewEvent, NewPerson, Person, PersonKind};
