//! Shared handler state

use rusqlite::Connection;
use std::sync::Arc;
use tutordesk_core::errors::{ExError, ExErrorKind};
use tutordesk_store::Database;

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    db: Arc<Database>,
    max_page_limit: usize,
}

impl AppState {
    pub fn new(db: Arc<Database>, max_page_limit: usize) -> Self {
        Self { db, max_page_limit }
    }

    pub fn max_page_limit(&self) -> usize {
        self.max_page_limit
    }

    /// Run blocking database work off the async runtime
    ///
    /// The closure executes on the blocking pool inside the caller's span so
    /// engine log events keep the request id.
    pub async fn run<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut Connection) -> tutordesk_store::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db = Arc::clone(&self.db);
        let span = tracing::Span::current();
        let joined = tokio::task::spawn_blocking(move || span.in_scope(|| db.with_conn(f))).await;

        match joined {
            Ok(result) => result.map_err(ApiError::from),
            Err(join_err) => Err(ApiError(
                ExError::new(ExErrorKind::Internal)
                    .with_op("spawn_blocking")
                    .with_message(join_err.to_string()),
            )),
        }
    }
}
