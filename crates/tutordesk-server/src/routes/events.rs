//! Event booking and lookups

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tutordesk_core::model::{Event, NewEvent, PersonKind};
use tutordesk_engine::commands::{engine_query, events};

use crate::error::{ApiError, ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct TeacherQuery {
    teacher_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    user_type: PersonKind,
    user_id: i64,
}

pub async fn create_event(
    State(state): State<AppState>,
    ApiJson(event): ApiJson<NewEvent>,
) -> ApiResult<Event> {
    state
        .run(move |conn| events::create_event(conn, event))
        .await
        .map(Json)
}

pub async fn events_by_teacher(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<TeacherQuery>,
) -> ApiResult<Vec<Event>> {
    state
        .run(move |conn| engine_query::events_by_teacher(conn, q.teacher_id))
        .await
        .map(Json)
}

pub async fn events_by_user(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<UserQuery>,
) -> ApiResult<Vec<Event>> {
    state
        .run(move |conn| engine_query::events_by_user(conn, q.user_type, q.user_id))
        .await
        .map(Json)
}

pub async fn get_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Event> {
    state
        .run(move |conn| engine_query::get_event(conn, id))
        .await
        .map(Json)
}
