//! Route table

mod auth;
mod events;
mod groups;
mod people;

use axum::routing::{get, post};
use axum::{middleware, Router};

use crate::request_id::request_id;
use crate::state::AppState;

/// Build the application router with all routes and middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        // registration
        .route("/register/student/", post(people::register_student))
        .route("/register/parent/", post(people::register_parent))
        .route("/register/teacher/", post(people::register_teacher))
        // groups and links
        .route("/groups/", get(groups::list_groups))
        .route("/groups/create/", post(groups::create_group))
        .route("/link/parent_student/", post(groups::link_parent_student))
        .route("/link/group_student/", post(groups::link_group_student))
        .route("/link/teacher_group/", post(groups::link_teacher_group))
        .route("/get_group_id/", get(groups::group_id))
        // people
        .route("/students/", get(people::list_students))
        .route("/parents/", get(people::list_parents))
        .route("/teachers/", get(people::list_teachers))
        .route("/students/:id", get(people::get_student))
        .route("/parents/:id", get(people::get_parent))
        .route("/teachers/:id", get(people::get_teacher))
        .route("/get_student_id/", get(people::student_id))
        .route("/get_parent_id/", get(people::parent_id))
        .route("/get_teacher_id/", get(people::teacher_id))
        .route("/teachers_by_parent/:parent_id", get(people::teachers_by_parent))
        .route("/teachers_by_student/", get(people::teachers_by_student))
        // events
        .route("/create_event/", post(events::create_event))
        .route("/get_event/", get(events::events_by_teacher))
        .route("/get_event_by_user/", get(events::events_by_user))
        .route("/events/:id", get(events::get_event))
        // auth and health
        .route("/authorization/", post(auth::authorization))
        .route("/health/", get(auth::health))
        .layer(middleware::from_fn(request_id))
        .with_state(state)
}
