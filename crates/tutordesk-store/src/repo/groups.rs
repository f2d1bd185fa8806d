//! Study group rows

use crate::errors::{from_rusqlite, is_unique_violation, Result};
use crate::repo::page_bounds;
use rusqlite::{Connection, OptionalExtension, Row};
use tutordesk_core::errors::TutorError;
use tutordesk_core::model::Group;

fn row_to_group(row: &Row<'_>) -> rusqlite::Result<Group> {
    Ok(Group {
        id: row.get(0)?,
        group_name: row.get(1)?,
    })
}

/// Insert a group; names are unique
pub fn insert_group(conn: &Connection, group_name: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO study_groups (group_name) VALUES (?1)",
        [group_name],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            TutorError::GroupNameTaken {
                group_name: group_name.to_string(),
            }
            .into()
        } else {
            from_rusqlite(e)
        }
    })?;
    Ok(conn.last_insert_rowid())
}

pub fn get_group(conn: &Connection, group_id: i64) -> Result<Option<Group>> {
    conn.query_row(
        "SELECT id, group_name FROM study_groups WHERE id = ?1",
        [group_id],
        row_to_group,
    )
    .optional()
    .map_err(from_rusqlite)
}

pub fn find_group_by_name(conn: &Connection, group_name: &str) -> Result<Option<Group>> {
    conn.query_row(
        "SELECT id, group_name FROM study_groups WHERE group_name = ?1",
        [group_name],
        row_to_group,
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Page through groups ordered by id
pub fn list_groups(conn: &Connection, skip: usize, limit: usize) -> Result<Vec<Group>> {
    let (skip, limit) = page_bounds(skip, limit)?;
    let mut stmt = conn
        .prepare("SELECT id, group_name FROM study_groups ORDER BY id LIMIT ?1 OFFSET ?2")
        .map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(rusqlite::params![limit, skip], row_to_group)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}
