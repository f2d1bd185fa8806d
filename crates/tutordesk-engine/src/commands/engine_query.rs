//! Engine-level read-only query surface.
//!
//! Every function takes a shared connection and never writes. List queries
//! take `ListOptions` and the caller's maximum page size.

#![allow(clippy::result_large_err)]

use rusqlite::Connection;
use tutordesk_core::errors::TutorError;
use tutordesk_core::log_op_start;
use tutordesk_core::model::{Event, Group, Person, PersonKind};
use tutordesk_core::rules::validation::{validate_id, validate_login};
use tutordesk_store::errors::Result;
use tutordesk_store::repo::{events, groups, links, people};

use crate::commands::finish_op;
use crate::commands::read_tools::{IdLookup, ListOptions};

// ---------------------------------------------------------------------------
// People and groups
// ---------------------------------------------------------------------------

/// One page of people of the given kind, ordered by id
pub fn list_people(
    conn: &Connection,
    kind: PersonKind,
    opts: ListOptions,
    max_limit: usize,
) -> Result<Vec<Person>> {
    log_op_start!("list_people", person_kind = kind.as_str());
    let start = std::time::Instant::now();

    let result = opts
        .resolve(max_limit)
        .and_then(|(skip, limit)| people::list_people(conn, kind, skip, limit));

    finish_op("list_people", start, &result);
    result
}

/// # Errors
///
/// `NotFound` when no person of this kind has the id.
pub fn get_person(conn: &Connection, kind: PersonKind, id: i64) -> Result<Person> {
    people::get_person(conn, kind, id)?.ok_or_else(|| TutorError::PersonNotFound { kind, id }.into())
}

/// One page of groups, ordered by id
pub fn list_groups(conn: &Connection, opts: ListOptions, max_limit: usize) -> Result<Vec<Group>> {
    log_op_start!("list_groups");
    let start = std::time::Instant::now();

    let result = opts
        .resolve(max_limit)
        .and_then(|(skip, limit)| groups::list_groups(conn, skip, limit));

    finish_op("list_groups", start, &result);
    result
}

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

/// Teachers of the groups that contain any child of the parent
///
/// One entry per join path, so a teacher can appear more than once. A
/// parent without children yields an empty list.
///
/// # Errors
///
/// `NotFound` when the parent does not exist.
pub fn teachers_by_parent(conn: &Connection, parent_id: i64) -> Result<Vec<Person>> {
    log_op_start!("teachers_by_parent", parent_id = parent_id);
    let start = std::time::Instant::now();

    let result = (|| -> Result<Vec<Person>> {
        if !people::person_exists(conn, PersonKind::Parent, parent_id)? {
            return Err(TutorError::PersonNotFound {
                kind: PersonKind::Parent,
                id: parent_id,
            }
            .into());
        }
        links::teachers_by_parent(conn, parent_id)
    })();

    finish_op("teachers_by_parent", start, &result);
    result
}

/// Teachers of every group the student belongs to
///
/// Resolved in two steps (student to groups, then each group to teachers)
/// without deduplication.
///
/// # Errors
///
/// `NotFound` when the student does not exist.
pub fn teachers_by_student(conn: &Connection, student_id: i64) -> Result<Vec<Person>> {
    log_op_start!("teachers_by_student", student_id = student_id);
    let start = std::time::Instant::now();

    let result = (|| -> Result<Vec<Person>> {
        if !people::person_exists(conn, PersonKind::Student, student_id)? {
            return Err(TutorError::PersonNotFound {
                kind: PersonKind::Student,
                id: student_id,
            }
            .into());
        }
        let mut teachers = Vec::new();
        for group_id in links::group_ids_for_student(conn, student_id)? {
            teachers.extend(links::teachers_in_group(conn, group_id)?);
        }
        Ok(teachers)
    })();

    finish_op("teachers_by_student", start, &result);
    result
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Events booked with a teacher
///
/// # Errors
///
/// `NotFound` for an unknown teacher.
pub fn events_by_teacher(conn: &Connection, teacher_id: i64) -> Result<Vec<Event>> {
    log_op_start!("events_by_teacher", teacher_id = teacher_id);
    let start = std::time::Instant::now();

    let result = (|| -> Result<Vec<Event>> {
        validate_id("teacher_id", teacher_id)?;
        require_person(conn, PersonKind::Teacher, teacher_id)?;
        events::events_by_teacher(conn, teacher_id)
    })();

    finish_op("events_by_teacher", start, &result);
    result
}

/// Events booked for a student or parent
///
/// # Errors
///
/// `InvalidInput` when `user_type` is `teacher`, `NotFound` for an unknown
/// user of that type.
pub fn events_by_user(conn: &Connection, user_type: PersonKind, user_id: i64) -> Result<Vec<Event>> {
    log_op_start!(
        "events_by_user",
        user_type = user_type.as_str(),
        user_id = user_id
    );
    let start = std::time::Instant::now();

    let result = (|| -> Result<Vec<Event>> {
        if !user_type.can_attend_events() {
            return Err(TutorError::InvalidUserType {
                user_type: user_type.to_string(),
            }
            .into());
        }
        validate_id("user_id", user_id)?;
        require_person(conn, user_type, user_id)?;
        events::events_by_user(conn, user_type, user_id)
    })();

    finish_op("events_by_user", start, &result);
    result
}

fn require_person(conn: &Connection, kind: PersonKind, id: i64) -> Result<()> {
    if people::person_exists(conn, kind, id)? {
        Ok(())
    } else {
        Err(TutorError::PersonNotFound { kind, id }.into())
    }
}

pub fn get_event(conn: &Connection, event_id: i64) -> Result<Event> {
    events::get_event(conn, event_id)?.ok_or_else(|| TutorError::EventNotFound { event_id }.into())
}

// ---------------------------------------------------------------------------
// Name lookups
// ---------------------------------------------------------------------------

/// # Errors
///
/// `NotFound` when no group has this name.
pub fn group_id_by_name(conn: &Connection, group_name: &str) -> Result<IdLookup> {
    groups::find_group_by_name(conn, group_name)?
        .map(|group| IdLookup { id: group.id })
        .ok_or_else(|| {
            TutorError::GroupNotFound {
                group_name: group_name.to_string(),
            }
            .into()
        })
}

/// # Errors
///
/// `NotFound` when no person of this kind has the login.
pub fn person_id_by_login(conn: &Connection, kind: PersonKind, login: &str) -> Result<IdLookup> {
    validate_login(login)?;
    people::find_person_by_login(conn, kind, login)?
        .map(|person| IdLookup { id: person.id })
        .ok_or_else(|| {
            TutorError::LoginNotFound {
                kind,
                login: login.to_string(),
            }
            .into()
        })
}

/// Kind and id of whoever owns the login, across all tables
pub fn login_owner(conn: &Connection, login: &str) -> Result<Option<(PersonKind, i64)>> {
    people::login_owner(conn, login)
}
