//! Association maintenance between people and groups.

#![allow(clippy::result_large_err)]

use rusqlite::Connection;
use tutordesk_core::errors::TutorError;
use tutordesk_core::log_op_start;
use tutordesk_core::model::PersonKind;
use tutordesk_core::rules::validation::validate_id;
use tutordesk_store::errors::Result;
use tutordesk_store::repo::{groups, links, people};

use crate::commands::finish_op;

fn require_person(conn: &Connection, kind: PersonKind, id: i64) -> Result<()> {
    if people::person_exists(conn, kind, id)? {
        Ok(())
    } else {
        Err(TutorError::PersonNotFound { kind, id }.into())
    }
}

fn require_group(conn: &Connection, group_id: i64) -> Result<()> {
    match groups::get_group(conn, group_id)? {
        Some(_) => Ok(()),
        None => Err(TutorError::GroupIdNotFound { group_id }.into()),
    }
}

/// Link a parent to a student
///
/// # Errors
///
/// `NotFound` when either side is missing, `AlreadyExists` when the pair is
/// already linked.
pub fn link_parent_student(conn: &Connection, parent_id: i64, student_id: i64) -> Result<()> {
    log_op_start!("link_parent_student", parent_id = parent_id, student_id = student_id);
    let start = std::time::Instant::now();

    let result = (|| -> Result<()> {
        validate_id("parent_id", parent_id)?;
        validate_id("student_id", student_id)?;
        require_person(conn, PersonKind::Parent, parent_id)?;
        require_person(conn, PersonKind::Student, student_id)?;
        links::insert_parent_student(conn, parent_id, student_id)
    })();

    finish_op("link_parent_student", start, &result);
    result
}

/// Place a student in a group
///
/// # Errors
///
/// `NotFound` when either side is missing, `AlreadyExists` when the pair is
/// already linked.
pub fn link_group_student(conn: &Connection, group_id: i64, student_id: i64) -> Result<()> {
    log_op_start!("link_group_student", group_id = group_id, student_id = student_id);
    let start = std::time::Instant::now();

    let result = (|| -> Result<()> {
        validate_id("group_id", group_id)?;
        validate_id("student_id", student_id)?;
        require_group(conn, group_id)?;
        require_person(conn, PersonKind::Student, student_id)?;
        links::insert_group_student(conn, group_id, student_id)
    })();

    finish_op("link_group_student", start, &result);
    result
}

/// Assign a teacher to a group
///
/// # Errors
///
/// `NotFound` when either side is missing, `AlreadyExists` when the pair is
/// already linked.
pub fn link_teacher_group(conn: &Connection, teacher_id: i64, group_id: i64) -> Result<()> {
    log_op_start!("link_teacher_group", teacher_id = teacher_id, group_id = group_id);
    let start = std::time::Instant::now();

    let result = (|| -> Result<()> {
        validate_id("teacher_id", teacher_id)?;
        validate_id("group_id", group_id)?;
        require_person(conn, PersonKind::Teacher, teacher_id)?;
        require_group(conn, group_id)?;
        links::insert_teacher_group(conn, teacher_id, group_id)
    })();

    finish_op("link_teacher_group", start, &result);
    result
}
