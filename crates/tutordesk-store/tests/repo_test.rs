// Integration tests for the repository layer against in-memory SQLite

use chrono::{NaiveDate, NaiveTime};
use rusqlite::Connection;
use tutordesk_core::errors::ExErrorKind;
use tutordesk_core::model::{NewEvent, PersonKind};
use tutordesk_core_types::Sensitive;
use tutordesk_store::repo::{events, groups, links, people};

fn setup_test_db() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA foreign_keys = ON").unwrap();
    tutordesk_store::migrations::apply_migrations(&mut conn).unwrap();
    conn
}

fn pw(s: &str) -> Sensitive<String> {
    Sensitive::from(s)
}

fn add(conn: &Connection, kind: PersonKind, login: &str) -> i64 {
    let subject = (kind == PersonKind::Teacher).then_some("Maths");
    people::insert_person(conn, kind, login, login, &pw("p"), subject).unwrap()
}

#[test]
fn test_insert_person_writes_identity_row() {
    let conn = setup_test_db();
    let id = add(&conn, PersonKind::Parent, "mum");

    let owner = people::login_owner(&conn, "mum").unwrap();
    assert_eq!(owner, Some((PersonKind::Parent, id)));

    let parent = people::get_person(&conn, PersonKind::Parent, id)
        .unwrap()
        .unwrap();
    assert_eq!(parent.login, "mum");
    assert_eq!(parent.subject, None);
}

#[test]
fn test_login_unique_across_tables() {
    let conn = setup_test_db();
    add(&conn, PersonKind::Student, "shared");

    let err = people::insert_person(
        &conn,
        PersonKind::Teacher,
        "T",
        "shared",
        &pw("p"),
        None,
    )
    .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::AlreadyExists);
}

#[test]
fn test_teacher_subject_round_trips() {
    let conn = setup_test_db();
    let id = add(&conn, PersonKind::Teacher, "t1");
    let t = people::find_person_by_login(&conn, PersonKind::Teacher, "t1")
        .unwrap()
        .unwrap();
    assert_eq!(t.id, id);
    assert_eq!(t.subject.as_deref(), Some("Maths"));
}

#[test]
fn test_list_people_pages_by_id() {
    let conn = setup_test_db();
    for i in 0..5 {
        add(&conn, PersonKind::Student, &format!("s{}", i));
    }

    let page = people::list_people(&conn, PersonKind::Student, 1, 2).unwrap();
    let logins: Vec<_> = page.iter().map(|p| p.login.as_str()).collect();
    assert_eq!(logins, ["s1", "s2"]);

    let tail = people::list_people(&conn, PersonKind::Student, 4, 10).unwrap();
    assert_eq!(tail.len(), 1);
}

#[test]
fn test_list_rejects_skip_beyond_sqlite_range() {
    let conn = setup_test_db();
    add(&conn, PersonKind::Student, "s0");
    add(&conn, PersonKind::Student, "s1");
    groups::insert_group(&conn, "Maths").unwrap();

    let err = people::list_people(&conn, PersonKind::Student, usize::MAX, 10).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);

    let err = groups::list_groups(&conn, usize::MAX, 10).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);

    // Largest representable offset is still a valid, empty page
    let page = people::list_people(&conn, PersonKind::Student, i64::MAX as usize, 10).unwrap();
    assert!(page.is_empty());
}

#[test]
fn test_match_credentials_requires_both_fields() {
    let conn = setup_test_db();
    add(&conn, PersonKind::Student, "kid");

    assert!(people::match_credentials(&conn, PersonKind::Student, "kid", &pw("p"))
        .unwrap()
        .is_some());
    assert!(people::match_credentials(&conn, PersonKind::Student, "kid", &pw("x"))
        .unwrap()
        .is_none());
    assert!(people::match_credentials(&conn, PersonKind::Parent, "kid", &pw("p"))
        .unwrap()
        .is_none());
}

#[test]
fn test_duplicate_group_name_rejected() {
    let conn = setup_test_db();
    let id = groups::insert_group(&conn, "G1").unwrap();
    assert_eq!(groups::find_group_by_name(&conn, "G1").unwrap().unwrap().id, id);

    let err = groups::insert_group(&conn, "G1").unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::AlreadyExists);
}

#[test]
fn test_duplicate_link_rejected() {
    let conn = setup_test_db();
    let t = add(&conn, PersonKind::Teacher, "t");
    let g = groups::insert_group(&conn, "G").unwrap();

    links::insert_teacher_group(&conn, t, g).unwrap();
    let err = links::insert_teacher_group(&conn, t, g).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::AlreadyExists);
}

#[test]
fn test_link_to_missing_row_fails_foreign_key() {
    let conn = setup_test_db();
    let g = groups::insert_group(&conn, "G").unwrap();
    let err = links::insert_group_student(&conn, g, 999).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Persistence);
}

#[test]
fn test_teachers_by_parent_follows_all_paths() {
    let conn = setup_test_db();
    let parent = add(&conn, PersonKind::Parent, "mum");
    let kid1 = add(&conn, PersonKind::Student, "kid1");
    let kid2 = add(&conn, PersonKind::Student, "kid2");
    let teacher = add(&conn, PersonKind::Teacher, "t");
    let other_teacher = add(&conn, PersonKind::Teacher, "t2");
    let g1 = groups::insert_group(&conn, "G1").unwrap();
    let g2 = groups::insert_group(&conn, "G2").unwrap();

    links::insert_parent_student(&conn, parent, kid1).unwrap();
    links::insert_parent_student(&conn, parent, kid2).unwrap();
    links::insert_group_student(&conn, g1, kid1).unwrap();
    links::insert_group_student(&conn, g1, kid2).unwrap();
    links::insert_teacher_group(&conn, teacher, g1).unwrap();
    links::insert_teacher_group(&conn, other_teacher, g2).unwrap();

    let teachers = links::teachers_by_parent(&conn, parent).unwrap();
    // Two children in the same group: one row per path, no dedup
    assert_eq!(teachers.len(), 2);
    assert!(teachers.iter().all(|t| t.id == teacher));
}

#[test]
fn test_teachers_by_parent_without_children_is_empty() {
    let conn = setup_test_db();
    let parent = add(&conn, PersonKind::Parent, "mum");
    assert!(links::teachers_by_parent(&conn, parent).unwrap().is_empty());
}

#[test]
fn test_events_filtered_and_ordered() {
    let conn = setup_test_db();
    let teacher = add(&conn, PersonKind::Teacher, "t");
    let kid = add(&conn, PersonKind::Student, "kid");

    let mk = |day: u32, hour: u32, user_type: PersonKind| NewEvent {
        day: NaiveDate::from_ymd_opt(2024, 9, day).unwrap(),
        time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        user_type,
        id_user: kid,
        id_teacher: teacher,
        subject: None,
    };

    let late = events::insert_event(&conn, &mk(3, 9, PersonKind::Student), "t", "Maths").unwrap();
    let early = events::insert_event(&conn, &mk(2, 16, PersonKind::Student), "t", "Maths").unwrap();
    events::insert_event(&conn, &mk(2, 10, PersonKind::Parent), "t", "Maths").unwrap();

    let by_teacher = events::events_by_teacher(&conn, teacher).unwrap();
    assert_eq!(by_teacher.len(), 3);

    let by_user = events::events_by_user(&conn, PersonKind::Student, kid).unwrap();
    let ids: Vec<_> = by_user.iter().map(|e| e.id).collect();
    assert_eq!(ids, [early, late]);

    let fetched = events::get_event(&conn, early).unwrap().unwrap();
    assert_eq!(fetched.time, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
    assert_eq!(fetched.user_type, PersonKind::Student);
    assert!(events::get_event(&conn, 999).unwrap().is_none());
}
