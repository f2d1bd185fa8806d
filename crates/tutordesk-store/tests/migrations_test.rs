// Integration tests for the migration runner

use rusqlite::Connection;
use tempfile::TempDir;
use tutordesk_core::errors::ExErrorKind;
use tutordesk_store::migrations::apply_migrations;

fn table_exists(conn: &Connection, name: &str) -> bool {
    conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [name],
        |_| Ok(()),
    )
    .is_ok()
}

#[test]
fn test_all_tables_created() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    for table in [
        "logins",
        "students",
        "parents",
        "teachers",
        "study_groups",
        "parent_students",
        "teacher_groups",
        "group_students",
        "events",
        "schema_version",
    ] {
        assert!(table_exists(&conn, table), "missing table {}", table);
    }
}

#[test]
fn test_reopening_file_database_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tutordesk.db");

    {
        let mut conn = Connection::open(&path).unwrap();
        apply_migrations(&mut conn).unwrap();
        conn.execute("INSERT INTO study_groups (group_name) VALUES ('G1')", [])
            .unwrap();
    }

    let mut conn = Connection::open(&path).unwrap();
    apply_migrations(&mut conn).unwrap();
    let groups: i64 = conn
        .query_row("SELECT COUNT(*) FROM study_groups", [], |row| row.get(0))
        .unwrap();
    assert_eq!(groups, 1, "re-running migrations must not touch data");
}

#[test]
fn test_tampered_checksum_is_detected() {
    let mut conn = Connection::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '001_initial_schema'",
        [],
    )
    .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.entity_id(), Some("001_initial_schema"));
}
