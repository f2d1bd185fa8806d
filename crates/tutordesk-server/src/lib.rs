//! TutorDesk Server - HTTP+JSON surface over the engine
//!
//! `routes::router` builds the `axum::Router`; `lifecycle::serve` runs it
//! with graceful shutdown. Blocking SQLite work is moved to the blocking
//! pool by `AppState::run`.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod request_id;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
