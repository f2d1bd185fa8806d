//! Registration of students, parents, teachers and groups.
//!
//! Each registration runs in one transaction: the person row, its `logins`
//! entry and any association rows are committed together or not at all.
//! Name references (group name, parent login) are resolved inside the same
//! transaction, so an unresolved name rolls the person back.
//!
//! Observability follows the engine convention: `log_op_start!` at entry,
//! then exactly one of `log_op_end!` or `log_op_error!`.

#![allow(clippy::result_large_err)]

use rusqlite::{Connection, Transaction};
use tutordesk_core::errors::TutorError;
use tutordesk_core::log_op_start;
use tutordesk_core::model::{Group, NewPerson, Person, PersonKind};
use tutordesk_core::rules::validation::{validate_group_name, validate_new_person};
use tutordesk_store::errors::{from_rusqlite, Result};
use tutordesk_store::repo::{groups, links, people};

use crate::commands::finish_op;
use crate::commands::read_tools::{
    RegisteredStudent, RegisteredTeacher, StudentRegistration, TeacherRegistration,
};

/// Register a student, optionally placing them in a group and under a parent
///
/// # Errors
///
/// `InvalidInput` for blank fields, `AlreadyExists` when the login is taken by
/// any person, `NotFound` when `group_name` or `parent_login` does not
/// resolve. Nothing is written on failure.
pub fn register_student(
    conn: &mut Connection,
    reg: StudentRegistration,
) -> Result<RegisteredStudent> {
    log_op_start!("register_student", login = reg.person.login.as_str());
    let start = std::time::Instant::now();

    let result = register_student_tx(conn, reg);

    finish_op("register_student", start, &result);
    result
}

fn register_student_tx(
    conn: &mut Connection,
    reg: StudentRegistration,
) -> Result<RegisteredStudent> {
    validate_new_person(PersonKind::Student, &reg.person)?;
    if let Some(group_name) = &reg.group_name {
        validate_group_name(group_name)?;
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;
    let student = insert_person(&tx, PersonKind::Student, &reg.person)?;

    let group_id = match &reg.group_name {
        Some(group_name) => {
            let group_id = resolve_group(&tx, group_name)?;
            links::insert_group_student(&tx, group_id, student.id)?;
            Some(group_id)
        }
        None => None,
    };

    let parent_id = match &reg.parent_login {
        Some(parent_login) => {
            let parent = people::find_person_by_login(&tx, PersonKind::Parent, parent_login)?
                .ok_or_else(|| TutorError::LoginNotFound {
                    kind: PersonKind::Parent,
                    login: parent_login.clone(),
                })?;
            links::insert_parent_student(&tx, parent.id, student.id)?;
            Some(parent.id)
        }
        None => None,
    };

    tx.commit().map_err(from_rusqlite)?;

    Ok(RegisteredStudent {
        student,
        group_id,
        parent_id,
    })
}

/// Register a parent
///
/// # Errors
///
/// `InvalidInput` for blank fields, `AlreadyExists` when the login is taken.
pub fn register_parent(conn: &mut Connection, person: NewPerson) -> Result<Person> {
    log_op_start!("register_parent", login = person.login.as_str());
    let start = std::time::Instant::now();

    let result = (|| -> Result<Person> {
        validate_new_person(PersonKind::Parent, &person)?;
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let parent = insert_person(&tx, PersonKind::Parent, &person)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(parent)
    })();

    finish_op("register_parent", start, &result);
    result
}

/// Register a teacher and assign them to the named groups
///
/// Repeated group names are assigned once. `group_ids` in the result follow
/// the order of first appearance in the request.
///
/// # Errors
///
/// `InvalidInput` for blank fields, `AlreadyExists` when the login is taken,
/// `NotFound` when any group name does not resolve.
pub fn register_teacher(
    conn: &mut Connection,
    reg: TeacherRegistration,
) -> Result<RegisteredTeacher> {
    log_op_start!(
        "register_teacher",
        login = reg.person.login.as_str(),
        group_count = reg.groups.len()
    );
    let start = std::time::Instant::now();

    let result = (|| -> Result<RegisteredTeacher> {
        validate_new_person(PersonKind::Teacher, &reg.person)?;
        for group_name in &reg.groups {
            validate_group_name(group_name)?;
        }

        let tx = conn.transaction().map_err(from_rusqlite)?;
        let teacher = insert_person(&tx, PersonKind::Teacher, &reg.person)?;

        let mut group_ids: Vec<i64> = Vec::with_capacity(reg.groups.len());
        for group_name in &reg.groups {
            let group_id = resolve_group(&tx, group_name)?;
            if group_ids.contains(&group_id) {
                continue;
            }
            links::insert_teacher_group(&tx, teacher.id, group_id)?;
            group_ids.push(group_id);
        }

        tx.commit().map_err(from_rusqlite)?;
        Ok(RegisteredTeacher { teacher, group_ids })
    })();

    finish_op("register_teacher", start, &result);
    result
}

/// Create a study group
///
/// # Errors
///
/// `InvalidInput` for a blank name, `AlreadyExists` when the name is taken.
pub fn create_group(conn: &Connection, group_name: &str) -> Result<Group> {
    log_op_start!("create_group", group_name = group_name);
    let start = std::time::Instant::now();

    let result = (|| -> Result<Group> {
        validate_group_name(group_name)?;
        let id = groups::insert_group(conn, group_name)?;
        Ok(Group {
            id,
            group_name: group_name.to_string(),
        })
    })();

    finish_op("create_group", start, &result);
    result
}

fn insert_person(tx: &Transaction<'_>, kind: PersonKind, person: &NewPerson) -> Result<Person> {
    let id = people::insert_person(
        tx,
        kind,
        &person.name,
        &person.login,
        &person.password,
        person.subject.as_deref(),
    )?;
    Ok(Person {
        id,
        kind,
        name: person.name.clone(),
        login: person.login.clone(),
        subject: person.subject.clone(),
    })
}

fn resolve_group(tx: &Transaction<'_>, group_name: &str) -> Result<i64> {
    groups::find_group_by_name(tx, group_name)?
        .map(|group| group.id)
        .ok_or_else(|| {
            TutorError::GroupNotFound {
                group_name: group_name.to_string(),
            }
            .into()
        })
}
