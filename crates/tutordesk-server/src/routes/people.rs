//! Person registration, listings and lookups

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tutordesk_core::model::{NewPerson, Person, PersonKind};
use tutordesk_engine::commands::engine_query;
use tutordesk_engine::commands::read_tools::{
    IdLookup, ListOptions, RegisteredStudent, RegisteredTeacher, StudentRegistration,
    TeacherRegistration,
};
use tutordesk_engine::commands::registration;

use crate::error::{ApiError, ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    login: String,
}

#[derive(Debug, Deserialize)]
pub struct StudentQuery {
    student_id: i64,
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

pub async fn register_student(
    State(state): State<AppState>,
    ApiJson(reg): ApiJson<StudentRegistration>,
) -> ApiResult<RegisteredStudent> {
    state
        .run(move |conn| registration::register_student(conn, reg))
        .await
        .map(Json)
}

pub async fn register_parent(
    State(state): State<AppState>,
    ApiJson(person): ApiJson<NewPerson>,
) -> ApiResult<Person> {
    state
        .run(move |conn| registration::register_parent(conn, person))
        .await
        .map(Json)
}

pub async fn register_teacher(
    State(state): State<AppState>,
    ApiJson(reg): ApiJson<TeacherRegistration>,
) -> ApiResult<RegisteredTeacher> {
    state
        .run(move |conn| registration::register_teacher(conn, reg))
        .await
        .map(Json)
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

async fn list(state: AppState, kind: PersonKind, opts: ListOptions) -> ApiResult<Vec<Person>> {
    let max = state.max_page_limit();
    state
        .run(move |conn| engine_query::list_people(conn, kind, opts, max))
        .await
        .map(Json)
}

pub async fn list_students(
    State(state): State<AppState>,
    ApiQuery(opts): ApiQuery<ListOptions>,
) -> ApiResult<Vec<Person>> {
    list(state, PersonKind::Student, opts).await
}

pub async fn list_parents(
    State(state): State<AppState>,
    ApiQuery(opts): ApiQuery<ListOptions>,
) -> ApiResult<Vec<Person>> {
    list(state, PersonKind::Parent, opts).await
}

pub async fn list_teachers(
    State(state): State<AppState>,
    ApiQuery(opts): ApiQuery<ListOptions>,
) -> ApiResult<Vec<Person>> {
    list(state, PersonKind::Teacher, opts).await
}

// ---------------------------------------------------------------------------
// Single lookups
// ---------------------------------------------------------------------------

async fn fetch(state: AppState, kind: PersonKind, id: i64) -> ApiResult<Person> {
    state
        .run(move |conn| engine_query::get_person(conn, kind, id))
        .await
        .map(Json)
}

pub async fn get_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Person> {
    fetch(state, PersonKind::Student, id).await
}

pub async fn get_parent(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Person> {
    fetch(state, PersonKind::Parent, id).await
}

pub async fn get_teacher(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Person> {
    fetch(state, PersonKind::Teacher, id).await
}

async fn id_by_login(state: AppState, kind: PersonKind, login: String) -> ApiResult<IdLookup> {
    state
        .run(move |conn| engine_query::person_id_by_login(conn, kind, &login))
        .await
        .map(Json)
}

pub async fn student_id(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<LoginQuery>,
) -> ApiResult<IdLookup> {
    id_by_login(state, PersonKind::Student, q.login).await
}

pub async fn parent_id(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<LoginQuery>,
) -> ApiResult<IdLookup> {
    id_by_login(state, PersonKind::Parent, q.login).await
}

pub async fn teacher_id(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<LoginQuery>,
) -> ApiResult<IdLookup> {
    id_by_login(state, PersonKind::Teacher, q.login).await
}

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

pub async fn teachers_by_parent(
    State(state): State<AppState>,
    ApiPath(parent_id): ApiPath<i64>,
) -> ApiResult<Vec<Person>> {
    state
        .run(move |conn| engine_query::teachers_by_parent(conn, parent_id))
        .await
        .map(Json)
}

pub async fn teachers_by_student(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<StudentQuery>,
) -> ApiResult<Vec<Person>> {
    state
        .run(move |conn| engine_query::teachers_by_student(conn, q.student_id))
        .await
        .map(Json)
}
