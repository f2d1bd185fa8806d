//! Credential check across the three person tables.

#![allow(clippy::result_large_err)]

use rusqlite::Connection;
use tutordesk_core::errors::TutorError;
use tutordesk_core::log_op_start;
use tutordesk_core::model::PersonKind;
use tutordesk_core_types::Sensitive;
use tutordesk_store::errors::Result;
use tutordesk_store::repo::people;

use crate::commands::finish_op;
use crate::commands::read_tools::AuthResult;

/// Find the person owning a login/password pair
///
/// Tables are searched in `PersonKind::AUTH_PRIORITY` order and the first match
/// wins.
///
/// # Errors
///
/// `Unauthorised` when no table matches. The error does not say whether the
/// login or the password was wrong.
pub fn authenticate(
    conn: &Connection,
    login: &str,
    password: &Sensitive<String>,
) -> Result<AuthResult> {
    log_op_start!("authenticate", login = login);
    let start = std::time::Instant::now();

    let result = (|| -> Result<AuthResult> {
        for kind in PersonKind::AUTH_PRIORITY {
            if let Some(person) = people::match_credentials(conn, kind, login, password)? {
                return Ok(AuthResult {
                    id: person.id,
                    user_type: person.kind,
                    name: person.name,
                });
            }
        }
        Err(TutorError::InvalidCredentials.into())
    })();

    finish_op("authenticate", start, &result);
    result
}
