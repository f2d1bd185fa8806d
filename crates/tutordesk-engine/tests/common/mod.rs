#![allow(dead_code)]

use rusqlite::Connection;
use tempfile::TempDir;
use tutordesk_core::model::NewPerson;
use tutordesk_engine::commands::read_tools::{StudentRegistration, TeacherRegistration};

pub fn setup_db() -> (TempDir, Connection) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let mut conn = Connection::open(&db_path).unwrap();
    tutordesk_store::db::configure(&conn).unwrap();
    tutordesk_store::migrations::apply_migrations(&mut conn).unwrap();
    (temp_dir, conn)
}

pub fn count(conn: &Connection, sql: &str) -> i64 {
    conn.query_row(sql, [], |r| r.get(0)).unwrap()
}

pub fn student(name: &str, login: &str) -> StudentRegistration {
    StudentRegistration {
        person: NewPerson::new(name, login, "pw"),
        group_name: None,
        parent_login: None,
    }
}

pub fn teacher(name: &str, login: &str, subject: Option<&str>, groups: &[&str]) -> TeacherRegistration {
    let mut person = NewPerson::new(name, login, "pw");
    if let Some(subject) = subject {
        person = person.with_subject(subject);
    }
    TeacherRegistration {
        person,
        groups: groups.iter().map(|g| g.to_string()).collect(),
    }
}
