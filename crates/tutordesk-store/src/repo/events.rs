//! Event rows

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use tutordesk_core::model::{Event, NewEvent, PersonKind};

const EVENT_COLUMNS: &str = "id, day, time, user_type, id_user, id_teacher, name_teacher, subject";

fn row_to_event(row: &Row<'_>) -> rusqlite::Result<Event> {
    let user_type: String = row.get(3)?;
    let user_type = user_type.parse::<PersonKind>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Event {
        id: row.get(0)?,
        day: row.get(1)?,
        time: row.get(2)?,
        user_type,
        id_user: row.get(4)?,
        id_teacher: row.get(5)?,
        name_teacher: row.get(6)?,
        subject: row.get(7)?,
    })
}

fn collect_events(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<Event>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params, row_to_event)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

/// Insert an event with its resolved teacher name and subject
pub fn insert_event(
    conn: &Connection,
    event: &NewEvent,
    name_teacher: &str,
    subject: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO events (day, time, user_type, id_user, id_teacher, name_teacher, subject)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
            event.day,
            event.time,
            event.user_type.as_str(),
            event.id_user,
            event.id_teacher,
            name_teacher,
            subject,
        ],
    )
    .map_err(from_rusqlite)?;
    Ok(conn.last_insert_rowid())
}

pub fn get_event(conn: &Connection, event_id: i64) -> Result<Option<Event>> {
    conn.query_row(
        &format!("SELECT {} FROM events WHERE id = ?1", EVENT_COLUMNS),
        [event_id],
        row_to_event,
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Events of one teacher ordered by day, time, id
pub fn events_by_teacher(conn: &Connection, teacher_id: i64) -> Result<Vec<Event>> {
    collect_events(
        conn,
        &format!(
            "SELECT {} FROM events WHERE id_teacher = ?1 ORDER BY day, time, id",
            EVENT_COLUMNS
        ),
        [teacher_id],
    )
}

/// Events booked for one student or parent ordered by day, time, id
pub fn events_by_user(
    conn: &Connection,
    user_type: PersonKind,
    user_id: i64,
) -> Result<Vec<Event>> {
    collect_events(
        conn,
        &format!(
            "SELECT {} FROM events WHERE user_type = ?1 AND id_user = ?2 ORDER BY day, time, id",
            EVENT_COLUMNS
        ),
        rusqlite::params![user_type.as_str(), user_id],
    )
}
