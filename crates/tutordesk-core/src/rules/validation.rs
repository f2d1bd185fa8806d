use crate::errors::{Result, TutorError};
use crate::model::{NewEvent, NewPerson, PersonKind};

/// Reject empty or whitespace-only text
pub fn validate_required(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TutorError::InvalidField {
            field,
            reason: "cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Logins are non-blank and contain no whitespace at all
pub fn validate_login(login: &str) -> Result<()> {
    validate_required("login", login)?;
    if login.chars().any(char::is_whitespace) {
        return Err(TutorError::InvalidField {
            field: "login",
            reason: "cannot contain whitespace".to_string(),
        });
    }
    Ok(())
}

/// Validate a registration request for the given person kind
pub fn validate_new_person(kind: PersonKind, person: &NewPerson) -> Result<()> {
    validate_required("name", &person.name)?;
    validate_login(&person.login)?;
    validate_required("password", person.password.expose())?;

    match (&person.subject, kind) {
        (Some(subject), PersonKind::Teacher) => validate_required("subject", subject),
        (Some(_), _) => Err(TutorError::InvalidField {
            field: "subject",
            reason: format!("a {} cannot have a subject", kind),
        }),
        (None, _) => Ok(()),
    }
}

pub fn validate_group_name(group_name: &str) -> Result<()> {
    validate_required("group_name", group_name)
}

/// Validate an event creation request
///
/// Existence of the referenced teacher and user is checked by the engine.
pub fn validate_new_event(event: &NewEvent) -> Result<()> {
    if !event.user_type.can_attend_events() {
        return Err(TutorError::InvalidUserType {
            user_type: event.user_type.to_string(),
        });
    }
    validate_id("id_user", event.id_user)?;
    validate_id("id_teacher", event.id_teacher)?;
    if let Some(subject) = &event.subject {
        validate_required("subject", subject)?;
    }
    Ok(())
}

/// Row ids are always positive
pub fn validate_id(field: &'static str, id: i64) -> Result<()> {
    if id <= 0 {
        return Err(TutorError::InvalidField {
            field,
            reason: format!("must be a positive id, got {}", id),
        });
    }
    Ok(())
}

/// Check skip/limit against the configured maximum page size
pub fn validate_paging(limit: usize, max_limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(TutorError::InvalidPagination {
            reason: "limit must be at least 1".to_string(),
        });
    }
    if limit > max_limit {
        return Err(TutorError::InvalidPagination {
            reason: format!("limit {} exceeds maximum {}", limit, max_limit),
        });
    }
    Ok(())
}
