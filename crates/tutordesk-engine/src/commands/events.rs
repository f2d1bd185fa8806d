//! Event creation.

#![allow(clippy::result_large_err)]

use rusqlite::Connection;
use tutordesk_core::errors::TutorError;
use tutordesk_core::log_op_start;
use tutordesk_core::model::{Event, NewEvent, PersonKind};
use tutordesk_core::rules::validation::validate_new_event;
use tutordesk_store::errors::Result;
use tutordesk_store::repo::{events, people};

use crate::commands::finish_op;

/// Book an event between a teacher and a student or parent
///
/// The teacher's name is copied onto the event. When the request carries no
/// subject, the teacher's subject is used.
///
/// # Errors
///
/// - `InvalidInput` when `user_type` is `teacher`, or no subject is available
/// - `NotFound` when the teacher or the user does not exist
pub fn create_event(conn: &Connection, event: NewEvent) -> Result<Event> {
    log_op_start!(
        "create_event",
        teacher_id = event.id_teacher,
        user_type = event.user_type.as_str(),
        user_id = event.id_user
    );
    let start = std::time::Instant::now();

    let result = (|| -> Result<Event> {
        validate_new_event(&event)?;

        let teacher = people::get_person(conn, PersonKind::Teacher, event.id_teacher)?
            .ok_or(TutorError::PersonNotFound {
                kind: PersonKind::Teacher,
                id: event.id_teacher,
            })?;
        if !people::person_exists(conn, event.user_type, event.id_user)? {
            return Err(TutorError::PersonNotFound {
                kind: event.user_type,
                id: event.id_user,
            }
            .into());
        }

        let subject = event
            .subject
            .clone()
            .or_else(|| teacher.subject.clone())
            .ok_or(TutorError::MissingSubject {
                teacher_id: teacher.id,
            })?;

        let id = events::insert_event(conn, &event, &teacher.name, &subject)?;
        Ok(Event {
            id,
            day: event.day,
            time: event.time,
            user_type: event.user_type,
            id_user: event.id_user,
            id_teacher: teacher.id,
            name_teacher: teacher.name,
            subject,
        })
    })();

    finish_op("create_event", start, &result);
    result
}
