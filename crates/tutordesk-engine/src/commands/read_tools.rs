//! Input and result types for the command and query surface.
//!
//! Plain data containers with no I/O. Inputs derive `Deserialize` and
//! results derive `Serialize` so the HTTP layer can use them directly.

use serde::{Deserialize, Serialize};
use tutordesk_core::model::{NewPerson, Person, PersonKind};
use tutordesk_core::rules::validation::validate_paging;
use tutordesk_store::Result;

/// Default page size when `limit` is omitted.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Upper bound on `limit` unless configured otherwise.
pub const DEFAULT_MAX_LIST_LIMIT: usize = 100;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Offset pagination for list queries
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListOptions {
    /// Rows to skip (defaults to 0)
    pub skip: Option<usize>,
    /// Maximum rows to return (defaults to `DEFAULT_LIST_LIMIT`)
    pub limit: Option<usize>,
}

impl ListOptions {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }

    /// Effective `(skip, limit)` after defaults and bounds checking.
    pub fn resolve(&self, max_limit: usize) -> Result<(usize, usize)> {
        let limit = self.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        validate_paging(limit, max_limit)?;
        Ok((self.skip.unwrap_or(0), limit))
    }
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Student registration: the person plus optional group and parent
#[derive(Debug, Clone, Deserialize)]
pub struct StudentRegistration {
    #[serde(flatten)]
    pub person: NewPerson,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub parent_login: Option<String>,
}

/// Teacher registration: the person plus the names of groups taught
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherRegistration {
    #[serde(flatten)]
    pub person: NewPerson,
    #[serde(default)]
    pub groups: Vec<String>,
}

/// Result of `register_student`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredStudent {
    #[serde(flatten)]
    pub student: Person,
    pub group_id: Option<i64>,
    pub parent_id: Option<i64>,
}

/// Result of `register_teacher`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredTeacher {
    #[serde(flatten)]
    pub teacher: Person,
    /// Resolved ids in request order
    pub group_ids: Vec<i64>,
}

// ---------------------------------------------------------------------------
// Lookups and auth
// ---------------------------------------------------------------------------

/// Result of a name-to-id lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdLookup {
    pub id: i64,
}

/// Result of a successful credential check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResult {
    pub id: i64,
    pub user_type: PersonKind,
    pub name: String,
}
