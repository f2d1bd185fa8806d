//! Groups and association links

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tutordesk_core::model::Group;
use tutordesk_engine::commands::read_tools::{IdLookup, ListOptions};
use tutordesk_engine::commands::{association, engine_query, registration};

use crate::error::{ApiError, ApiJson, ApiQuery};
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Deserialize)]
pub struct CreateGroup {
    group_name: String,
}

#[derive(Debug, Deserialize)]
pub struct GroupNameQuery {
    group_name: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParentStudentLink {
    pub id_parent: i64,
    pub id_student: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroupStudentLink {
    pub group_id: i64,
    pub student_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TeacherGroupLink {
    pub teacher_id: i64,
    pub group_id: i64,
}

pub async fn create_group(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateGroup>,
) -> ApiResult<Group> {
    state
        .run(move |conn| registration::create_group(conn, &body.group_name))
        .await
        .map(Json)
}

pub async fn list_groups(
    State(state): State<AppState>,
    ApiQuery(opts): ApiQuery<ListOptions>,
) -> ApiResult<Vec<Group>> {
    let max = state.max_page_limit();
    state
        .run(move |conn| engine_query::list_groups(conn, opts, max))
        .await
        .map(Json)
}

pub async fn group_id(
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<GroupNameQuery>,
) -> ApiResult<IdLookup> {
    state
        .run(move |conn| engine_query::group_id_by_name(conn, &q.group_name))
        .await
        .map(Json)
}

// Link endpoints echo the created pair

pub async fn link_parent_student(
    State(state): State<AppState>,
    ApiJson(link): ApiJson<ParentStudentLink>,
) -> ApiResult<ParentStudentLink> {
    state
        .run(move |conn| association::link_parent_student(conn, link.id_parent, link.id_student))
        .await?;
    Ok(Json(link))
}

pub async fn link_group_student(
    State(state): State<AppState>,
    ApiJson(link): ApiJson<GroupStudentLink>,
) -> ApiResult<GroupStudentLink> {
    state
        .run(move |conn| association::link_group_student(conn, link.group_id, link.student_id))
        .await?;
    Ok(Json(link))
}

pub async fn link_teacher_group(
    State(state): State<AppState>,
    ApiJson(link): ApiJson<TeacherGroupLink>,
) -> ApiResult<TeacherGroupLink> {
    state
        .run(move |conn| association::link_teacher_group(conn, link.teacher_id, link.group_id))
        .await?;
    Ok(Json(link))
}
