//! Input validation rules
//!
//! Everything here is pure: no I/O, no database.

pub mod validation;
