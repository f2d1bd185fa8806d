//! Association tables and the relationship joins over them

use crate::errors::{from_rusqlite, is_unique_violation, Result};
use crate::repo::people::row_to_person;
use rusqlite::Connection;
use tutordesk_core::errors::{ExError, TutorError};
use tutordesk_core::model::{Person, PersonKind};

fn already_linked(
    relation: &'static str,
    left_id: i64,
    right_id: i64,
) -> impl Fn(rusqlite::Error) -> ExError {
    move |e| {
        if is_unique_violation(&e) {
            TutorError::AlreadyLinked {
                relation,
                left_id,
                right_id,
            }
            .into()
        } else {
            from_rusqlite(e)
        }
    }
}

pub fn insert_parent_student(conn: &Connection, parent_id: i64, student_id: i64) -> Result<()> {
    conn.execute(
        "INSERT INTO parent_students (id_parent, id_student) VALUES (?1, ?2)",
        [parent_id, student_id],
    )
    .map_err(already_linked("parent_student", parent_id, student_id))?;
    Ok(())
}

pub fn insert_group_student(conn: &Connection, group_id: i64, student_id: i64) -> Result<()> {
    conn.execute(
        "INSERT INTO group_students (student_id, group_id) VALUES (?1, ?2)",
        [student_id, group_id],
    )
    .map_err(already_linked("group_student", group_id, student_id))?;
    Ok(())
}

pub fn insert_teacher_group(conn: &Connection, teacher_id: i64, group_id: i64) -> Result<()> {
    conn.execute(
        "INSERT INTO teacher_groups (teacher_id, group_id) VALUES (?1, ?2)",
        [teacher_id, group_id],
    )
    .map_err(already_linked("teacher_group", teacher_id, group_id))?;
    Ok(())
}

fn collect_teachers(conn: &Connection, sql: &str, param: i64) -> Result<Vec<Person>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([param], |row| row_to_person(PersonKind::Teacher, row))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

/// Teachers of every group that contains a child of the parent
///
/// One entry per join path: a teacher reachable through two children or
/// two groups appears twice. Order is unspecified.
pub fn teachers_by_parent(conn: &Connection, parent_id: i64) -> Result<Vec<Person>> {
    collect_teachers(
        conn,
        "SELECT t.id, t.name, t.login, t.subject
         FROM teachers t
         JOIN teacher_groups tg ON tg.teacher_id = t.id
         JOIN study_groups g ON g.id = tg.group_id
         JOIN group_students gs ON gs.group_id = g.id
         JOIN students s ON s.id = gs.student_id
         JOIN parent_students ps ON ps.id_student = s.id
         WHERE ps.id_parent = ?1",
        parent_id,
    )
}

/// Groups the student belongs to, ascending
pub fn group_ids_for_student(conn: &Connection, student_id: i64) -> Result<Vec<i64>> {
    let mut stmt = conn
        .prepare("SELECT group_id FROM group_students WHERE student_id = ?1 ORDER BY group_id")
        .map_err(from_rusqlite)?;
    let ids = stmt
        .query_map([student_id], |row| row.get(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<i64>, _>>()
        .map_err(from_rusqlite)?;
    Ok(ids)
}

/// Teachers assigned to one group
pub fn teachers_in_group(conn: &Connection, group_id: i64) -> Result<Vec<Person>> {
    collect_teachers(
        conn,
        "SELECT t.id, t.name, t.login, t.subject
         FROM teachers t
         JOIN teacher_groups tg ON tg.teacher_id = t.id
         WHERE tg.group_id = ?1",
        group_id,
    )
}
