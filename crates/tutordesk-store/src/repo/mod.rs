//! Repository layer: one module per table family
//!
//! Every function takes a plain `&Connection` so callers can pass either a
//! connection or a `Transaction` (which derefs to one).

pub mod events;
pub mod groups;
pub mod links;
pub mod people;

use crate::errors::Result;
use tutordesk_core::errors::TutorError;

/// Convert `skip`/`limit` to SQLite integers without wrapping
pub(crate) fn page_bounds(skip: usize, limit: usize) -> Result<(i64, i64)> {
    let to_sql = |name: &str, value: usize| {
        i64::try_from(value).map_err(|_| TutorError::InvalidPagination {
            reason: format!("{} {} is out of range", name, value),
        })
    };
    Ok((to_sql("skip", skip)?, to_sql("limit", limit)?))
}
