use crate::model::PersonKind;
use thiserror::Error;

/// Result type alias using TutorError
pub type Result<T> = std::result::Result<T, TutorError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in logs, HTTP error bodies
/// and tests. The HTTP layer picks a status code from the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,

    // Lookup / uniqueness
    NotFound,
    AlreadyExists,
    ConstraintViolation,

    // Auth
    Unauthorised,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Unauthorised => "ERR_UNAUTHORISED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the failure was caused by the caller rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput
                | ExErrorKind::NotFound
                | ExErrorKind::AlreadyExists
                | ExErrorKind::Unauthorised
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus the
/// operation and entity it happened on.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for TutorDesk operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TutorError {
    // ===== Validation Errors =====
    /// A required text field is blank or malformed
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// `user_type` is not one of the accepted person kinds
    #[error("Invalid user type: {user_type}")]
    InvalidUserType { user_type: String },

    /// Pagination parameters out of range
    #[error("Invalid pagination: {reason}")]
    InvalidPagination { reason: String },

    /// Event has no subject and the teacher has none to inherit
    #[error("Event subject is required: teacher {teacher_id} has no subject")]
    MissingSubject { teacher_id: i64 },

    // ===== Uniqueness Errors =====
    /// Login already registered for some person kind
    #[error("Login already taken: {login}")]
    LoginTaken { login: String },

    /// Group name already exists
    #[error("Group already exists: {group_name}")]
    GroupNameTaken { group_name: String },

    /// Association row already present
    #[error("{relation} link already exists: ({left_id}, {right_id})")]
    AlreadyLinked {
        relation: &'static str,
        left_id: i64,
        right_id: i64,
    },

    // ===== Lookup Errors =====
    /// No person of this kind with the given id
    #[error("{kind} not found: {id}")]
    PersonNotFound { kind: PersonKind, id: i64 },

    /// No person of this kind with the given login
    #[error("{kind} not found for login: {login}")]
    LoginNotFound { kind: PersonKind, login: String },

    /// No group with the given name
    #[error("Group not found: {group_name}")]
    GroupNotFound { group_name: String },

    /// No group with the given id
    #[error("Group not found: {group_id}")]
    GroupIdNotFound { group_id: i64 },

    /// No event with the given id
    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    // ===== Auth Errors =====
    /// Login/password pair matched no person
    #[error("Invalid login or password")]
    InvalidCredentials,
}

impl From<TutorError> for ExError {
    fn from(err: TutorError) -> Self {
        let message = err.to_string();
        match err {
            TutorError::InvalidField { .. }
            | TutorError::InvalidUserType { .. }
            | TutorError::InvalidPagination { .. }
            | TutorError::MissingSubject { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            TutorError::LoginTaken { login } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(login)
                .with_message(message),

            TutorError::GroupNameTaken { group_name } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(group_name)
                .with_message(message),

            TutorError::AlreadyLinked { .. } => {
                ExError::new(ExErrorKind::AlreadyExists).with_message(message)
            }

            TutorError::PersonNotFound { id, .. } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(id.to_string())
                .with_message(message),

            TutorError::LoginNotFound { login, .. } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(login)
                .with_message(message),

            TutorError::GroupNotFound { group_name } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(group_name)
                .with_message(message),

            TutorError::GroupIdNotFound { group_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(group_id.to_string())
                .with_message(message),

            TutorError::EventNotFound { event_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(event_id.to_string())
                .with_message(message),

            TutorError::InvalidCredentials => {
                ExError::new(ExErrorKind::Unauthorised).with_message(message)
            }
        }
    }
}
