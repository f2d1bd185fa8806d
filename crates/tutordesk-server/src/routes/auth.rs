//! Credential check and liveness

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tutordesk_core_types::Sensitive;
use tutordesk_engine::commands::auth::authenticate;
use tutordesk_engine::commands::read_tools::AuthResult;
use tutordesk_store::errors::from_rusqlite;

use crate::error::{ApiError, ApiJson};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    login: String,
    password: Sensitive<String>,
}

#[derive(Debug, Serialize)]
pub struct Health {
    status: &'static str,
}

pub async fn authorization(
    State(state): State<AppState>,
    ApiJson(creds): ApiJson<Credentials>,
) -> Result<Json<AuthResult>, ApiError> {
    state
        .run(move |conn| authenticate(conn, &creds.login, &creds.password))
        .await
        .map(Json)
}

/// Liveness plus a round trip to the database
pub async fn health(State(state): State<AppState>) -> Result<Json<Health>, ApiError> {
    state
        .run(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(from_rusqlite)
        })
        .await?;
    Ok(Json(Health { status: "ok" }))
}
