// Integration tests for authentication, events and read-only queries.

mod common;

use chrono::{NaiveDate, NaiveTime};
use common::{setup_db, student, teacher};
use rusqlite::Connection;
use tutordesk_core::errors::ExErrorKind;
use tutordesk_core::model::{NewEvent, NewPerson, PersonKind};
use tutordesk_core_types::Sensitive;
use tutordesk_engine::commands::association::{link_group_student, link_parent_student};
use tutordesk_engine::commands::auth::authenticate;
use tutordesk_engine::commands::engine_query::{
    events_by_teacher, events_by_user, get_event, get_person, group_id_by_name, list_groups,
    list_people, login_owner, person_id_by_login, teachers_by_parent, teachers_by_student,
};
use tutordesk_engine::commands::events::create_event;
use tutordesk_engine::commands::read_tools::{ListOptions, DEFAULT_MAX_LIST_LIMIT};
use tutordesk_engine::commands::registration::{
    create_group, register_parent, register_student, register_teacher,
};

fn new_event(user_type: PersonKind, id_user: i64, id_teacher: i64, hour: u32) -> NewEvent {
    NewEvent {
        day: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
        time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        user_type,
        id_user,
        id_teacher,
        subject: None,
    }
}

/// Two groups, two teachers, one parent with two children.
///
/// Returns `(parent_id, [kid1, kid2], [t_maths, t_art])`. kid1 is in G1
/// (Maths), kid2 in G1 and G2 (Maths, Art).
fn seed_family(conn: &mut Connection) -> (i64, [i64; 2], [i64; 2]) {
    create_group(conn, "G1").unwrap();
    create_group(conn, "G2").unwrap();
    let maths = register_teacher(conn, teacher("Mia", "mia", Some("Maths"), &["G1"]))
        .unwrap()
        .teacher
        .id;
    let art = register_teacher(conn, teacher("Art", "art", Some("Art"), &["G2"]))
        .unwrap()
        .teacher
        .id;
    let parent = register_parent(conn, NewPerson::new("Pat", "pat", "pw"))
        .unwrap()
        .id;

    let mut reg = student("Kid One", "kid1");
    reg.group_name = Some("G1".to_string());
    reg.parent_login = Some("pat".to_string());
    let kid1 = register_student(conn, reg).unwrap().student.id;

    let mut reg = student("Kid Two", "kid2");
    reg.group_name = Some("G1".to_string());
    let kid2 = register_student(conn, reg).unwrap().student.id;
    link_group_student(conn, 2, kid2).unwrap();
    link_parent_student(conn, parent, kid2).unwrap();

    (parent, [kid1, kid2], [maths, art])
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[test]
fn test_authenticate_prefers_student_over_parent() {
    let (_tmp, conn) = setup_db();
    conn.execute_batch(
        "INSERT INTO parents (name, login, password) VALUES ('As Parent', 'dup', 'secret');
         INSERT INTO students (name, login, password) VALUES ('As Student', 'dup', 'secret');",
    )
    .unwrap();

    let auth = authenticate(&conn, "dup", &Sensitive::from("secret")).unwrap();
    assert_eq!(auth.user_type, PersonKind::Student);
    assert_eq!(auth.name, "As Student");
}

#[test]
fn test_authenticate_teacher_and_failure() {
    let (_tmp, mut conn) = setup_db();
    let t = register_teacher(&mut conn, teacher("Mia", "mia", None, &[]))
        .unwrap()
        .teacher;

    let auth = authenticate(&conn, "mia", &Sensitive::from("pw")).unwrap();
    assert_eq!(auth.id, t.id);
    assert_eq!(auth.user_type, PersonKind::Teacher);

    let wrong_password = authenticate(&conn, "mia", &Sensitive::from("nope")).unwrap_err();
    let unknown_login = authenticate(&conn, "ghost", &Sensitive::from("pw")).unwrap_err();
    assert_eq!(wrong_password.kind(), ExErrorKind::Unauthorised);
    assert_eq!(wrong_password.message(), unknown_login.message());
}

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

#[test]
fn test_teachers_by_parent_one_entry_per_join_path() {
    let (_tmp, mut conn) = setup_db();
    let (parent, _, [maths, art]) = seed_family(&mut conn);

    let mut ids: Vec<i64> = teachers_by_parent(&conn, parent)
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    ids.sort_unstable();

    // maths reaches the parent through both kids, art through kid2 only
    let mut expected = vec![maths, maths, art];
    expected.sort_unstable();
    assert_eq!(ids, expected);
}

#[test]
fn test_teachers_by_parent_without_children_is_empty() {
    let (_tmp, mut conn) = setup_db();
    let parent = register_parent(&mut conn, NewPerson::new("Solo", "solo", "pw")).unwrap();
    assert!(teachers_by_parent(&conn, parent.id).unwrap().is_empty());
}

#[test]
fn test_teachers_by_parent_unknown_parent_not_found() {
    let (_tmp, conn) = setup_db();
    let err = teachers_by_parent(&conn, 42).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_teachers_by_student() {
    let (_tmp, mut conn) = setup_db();
    let (_, [kid1, kid2], [maths, art]) = seed_family(&mut conn);

    let ids: Vec<i64> = teachers_by_student(&conn, kid1)
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![maths]);

    let mut ids: Vec<i64> = teachers_by_student(&conn, kid2)
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    ids.sort_unstable();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&maths) && ids.contains(&art));

    let lonely = register_student(&mut conn, student("Lone", "lone")).unwrap();
    assert!(teachers_by_student(&conn, lonely.student.id).unwrap().is_empty());

    let err = teachers_by_student(&conn, 999).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[test]
fn test_create_event_inherits_teacher_subject_and_name() {
    let (_tmp, mut conn) = setup_db();
    let (_, [kid1, _], [maths, _]) = seed_family(&mut conn);

    let event = create_event(&conn, new_event(PersonKind::Student, kid1, maths, 10)).unwrap();
    assert_eq!(event.subject, "Maths");
    assert_eq!(event.name_teacher, "Mia");
    assert_eq!(get_event(&conn, event.id).unwrap(), event);
}

#[test]
fn test_create_event_without_any_subject_rejected() {
    let (_tmp, mut conn) = setup_db();
    let t = register_teacher(&mut conn, teacher("Nos", "nos", None, &[]))
        .unwrap()
        .teacher;
    let kid = register_student(&mut conn, student("Kid", "kid")).unwrap().student;

    let err = create_event(&conn, new_event(PersonKind::Student, kid.id, t.id, 9)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);

    let mut explicit = new_event(PersonKind::Student, kid.id, t.id, 9);
    explicit.subject = Some("Chess".to_string());
    let event = create_event(&conn, explicit).unwrap();
    assert_eq!(event.subject, "Chess");
}

#[test]
fn test_create_event_missing_references() {
    let (_tmp, mut conn) = setup_db();
    let (parent, [kid1, _], [maths, _]) = seed_family(&mut conn);

    let err = create_event(&conn, new_event(PersonKind::Student, kid1, 77, 9)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);

    let err = create_event(&conn, new_event(PersonKind::Parent, parent + 10, maths, 9)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);

    let err = create_event(&conn, new_event(PersonKind::Teacher, maths, maths, 9)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}

#[test]
fn test_events_filtered_by_teacher_and_user_in_time_order() {
    let (_tmp, mut conn) = setup_db();
    let (parent, [kid1, kid2], [maths, art]) = seed_family(&mut conn);

    let late = create_event(&conn, new_event(PersonKind::Student, kid1, maths, 16)).unwrap();
    let early = create_event(&conn, new_event(PersonKind::Student, kid1, maths, 8)).unwrap();
    create_event(&conn, new_event(PersonKind::Student, kid2, art, 9)).unwrap();
    let for_parent = create_event(&conn, new_event(PersonKind::Parent, parent, maths, 12)).unwrap();

    let ids: Vec<i64> = events_by_teacher(&conn, maths)
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![early.id, for_parent.id, late.id]);

    let ids: Vec<i64> = events_by_user(&conn, PersonKind::Student, kid1)
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![early.id, late.id]);

    let ids: Vec<i64> = events_by_user(&conn, PersonKind::Parent, parent)
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![for_parent.id]);

    let err = events_by_user(&conn, PersonKind::Teacher, maths).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);

    let err = get_event(&conn, 9_999).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_event_queries_distinguish_unknown_person_from_no_events() {
    let (_tmp, mut conn) = setup_db();
    let (parent, [kid1, _], [maths, _]) = seed_family(&mut conn);

    assert!(events_by_teacher(&conn, maths).unwrap().is_empty());
    assert!(events_by_user(&conn, PersonKind::Student, kid1).unwrap().is_empty());
    assert!(events_by_user(&conn, PersonKind::Parent, parent).unwrap().is_empty());

    let err = events_by_teacher(&conn, 9_999).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);

    let err = events_by_user(&conn, PersonKind::Student, 9_999).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);

    let err = events_by_user(&conn, PersonKind::Parent, 9_999).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

// ---------------------------------------------------------------------------
// Listings and lookups
// ---------------------------------------------------------------------------

#[test]
fn test_list_people_paging() {
    let (_tmp, mut conn) = setup_db();
    for i in 0..12 {
        register_student(&mut conn, student("Kid", &format!("kid{i:02}"))).unwrap();
    }

    let first = list_people(&conn, PersonKind::Student, ListOptions::default(), DEFAULT_MAX_LIST_LIMIT).unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].login, "kid00");

    let rest = list_people(&conn, PersonKind::Student, ListOptions::new(10, 10), DEFAULT_MAX_LIST_LIMIT).unwrap();
    assert_eq!(rest.len(), 2);
    assert_eq!(rest[1].login, "kid11");

    let err = list_people(&conn, PersonKind::Student, ListOptions::new(0, 0), DEFAULT_MAX_LIST_LIMIT).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);

    let err = list_groups(&conn, ListOptions::new(0, 5), 4).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}

#[test]
fn test_list_skip_past_sqlite_range_is_rejected_not_wrapped() {
    let (_tmp, mut conn) = setup_db();
    register_student(&mut conn, student("Ann", "ann")).unwrap();
    register_student(&mut conn, student("Bob", "bob")).unwrap();

    let err = list_people(&conn, PersonKind::Student, ListOptions::new(usize::MAX, 10), DEFAULT_MAX_LIST_LIMIT)
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);

    let err = list_groups(&conn, ListOptions::new(usize::MAX, 10), DEFAULT_MAX_LIST_LIMIT).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
}

#[test]
fn test_lookups_by_name_and_login() {
    let (_tmp, mut conn) = setup_db();
    let (parent, [kid1, _], [maths, _]) = seed_family(&mut conn);

    assert_eq!(group_id_by_name(&conn, "G2").unwrap().id, 2);
    assert_eq!(
        group_id_by_name(&conn, "unknown").unwrap_err().kind(),
        ExErrorKind::NotFound
    );

    assert_eq!(person_id_by_login(&conn, PersonKind::Student, "kid1").unwrap().id, kid1);
    assert_eq!(person_id_by_login(&conn, PersonKind::Parent, "pat").unwrap().id, parent);
    assert_eq!(person_id_by_login(&conn, PersonKind::Teacher, "mia").unwrap().id, maths);
    // Logins only resolve in their own table
    assert_eq!(
        person_id_by_login(&conn, PersonKind::Teacher, "pat").unwrap_err().kind(),
        ExErrorKind::NotFound
    );

    assert_eq!(login_owner(&conn, "mia").unwrap(), Some((PersonKind::Teacher, maths)));
    assert_eq!(login_owner(&conn, "ghost").unwrap(), None);

    let p = get_person(&conn, PersonKind::Teacher, maths).unwrap();
    assert_eq!(p.subject.as_deref(), Some("Maths"));
    assert_eq!(
        get_person(&conn, PersonKind::Student, maths + 100).unwrap_err().kind(),
        ExErrorKind::NotFound
    );

    let groups = list_groups(&conn, ListOptions::default(), DEFAULT_MAX_LIST_LIMIT).unwrap();
    assert_eq!(groups.len(), 2);
}
