//! Student, parent and teacher rows plus the `logins` identity index

use crate::errors::{from_rusqlite, is_unique_violation, Result};
use crate::repo::page_bounds;
use rusqlite::{Connection, OptionalExtension, Row};
use tutordesk_core::errors::TutorError;
use tutordesk_core::model::{Person, PersonKind};
use tutordesk_core_types::Sensitive;

/// Table holding rows of the given kind
pub(crate) fn table(kind: PersonKind) -> &'static str {
    match kind {
        PersonKind::Student => "students",
        PersonKind::Parent => "parents",
        PersonKind::Teacher => "teachers",
    }
}

/// Column list for `row_to_person`; only teachers have a subject column
fn person_columns(kind: PersonKind) -> &'static str {
    match kind {
        PersonKind::Teacher => "id, name, login, subject",
        PersonKind::Student | PersonKind::Parent => "id, name, login, NULL",
    }
}

pub(crate) fn row_to_person(kind: PersonKind, row: &Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person {
        id: row.get(0)?,
        kind,
        name: row.get(1)?,
        login: row.get(2)?,
        subject: row.get(3)?,
    })
}

/// Insert a person row and its `logins` entry
///
/// Must run inside the caller's transaction: a `LoginTaken` failure on the
/// second statement leaves the first one to be rolled back.
pub fn insert_person(
    conn: &Connection,
    kind: PersonKind,
    name: &str,
    login: &str,
    password: &Sensitive<String>,
    subject: Option<&str>,
) -> Result<i64> {
    let login_taken = || TutorError::LoginTaken {
        login: login.to_string(),
    };

    let inserted = match kind {
        PersonKind::Teacher => conn.execute(
            "INSERT INTO teachers (name, login, password, subject) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![name, login, password.expose(), subject],
        ),
        PersonKind::Student | PersonKind::Parent => conn.execute(
            &format!(
                "INSERT INTO {} (name, login, password) VALUES (?1, ?2, ?3)",
                table(kind)
            ),
            rusqlite::params![name, login, password.expose()],
        ),
    };
    inserted.map_err(|e| {
        if is_unique_violation(&e) {
            login_taken().into()
        } else {
            from_rusqlite(e)
        }
    })?;

    let id = conn.last_insert_rowid();

    conn.execute(
        "INSERT INTO logins (login, person_kind, person_id) VALUES (?1, ?2, ?3)",
        rusqlite::params![login, kind.as_str(), id],
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            login_taken().into()
        } else {
            from_rusqlite(e)
        }
    })?;

    Ok(id)
}

/// Get a person by id
pub fn get_person(conn: &Connection, kind: PersonKind, id: i64) -> Result<Option<Person>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE id = ?1",
        person_columns(kind),
        table(kind)
    );
    conn.query_row(&sql, [id], |row| row_to_person(kind, row))
        .optional()
        .map_err(from_rusqlite)
}

/// Get a person by login within one table
pub fn find_person_by_login(
    conn: &Connection,
    kind: PersonKind,
    login: &str,
) -> Result<Option<Person>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE login = ?1",
        person_columns(kind),
        table(kind)
    );
    conn.query_row(&sql, [login], |row| row_to_person(kind, row))
        .optional()
        .map_err(from_rusqlite)
}

/// Whether a row with this id exists in the kind's table
pub fn person_exists(conn: &Connection, kind: PersonKind, id: i64) -> Result<bool> {
    let sql = format!("SELECT 1 FROM {} WHERE id = ?1", table(kind));
    conn.query_row(&sql, [id], |_| Ok(()))
        .optional()
        .map(|found| found.is_some())
        .map_err(from_rusqlite)
}

/// Page through one person table ordered by id
pub fn list_people(
    conn: &Connection,
    kind: PersonKind,
    skip: usize,
    limit: usize,
) -> Result<Vec<Person>> {
    let sql = format!(
        "SELECT {} FROM {} ORDER BY id LIMIT ?1 OFFSET ?2",
        person_columns(kind),
        table(kind)
    );
    let (skip, limit) = page_bounds(skip, limit)?;
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(rusqlite::params![limit, skip], |row| row_to_person(kind, row))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

/// Match a login/password pair against one person table
pub fn match_credentials(
    conn: &Connection,
    kind: PersonKind,
    login: &str,
    password: &Sensitive<String>,
) -> Result<Option<Person>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE login = ?1 AND password = ?2",
        person_columns(kind),
        table(kind)
    );
    conn.query_row(
        &sql,
        rusqlite::params![login, password.expose()],
        |row| row_to_person(kind, row),
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Who owns a login according to the identity index
pub fn login_owner(conn: &Connection, login: &str) -> Result<Option<(PersonKind, i64)>> {
    let row: Option<(String, i64)> = conn
        .query_row(
            "SELECT person_kind, person_id FROM logins WHERE login = ?1",
            [login],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(from_rusqlite)?;

    match row {
        None => Ok(None),
        Some((kind, id)) => {
            let kind = kind.parse::<PersonKind>()?;
            Ok(Some((kind, id)))
        }
    }
}
