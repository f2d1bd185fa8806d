//! Usage: tutordesk --db <PATH> migrate

use std::path::Path;
use tutordesk_store::Database;

use super::CliResult;

pub fn execute(db_path: &Path) -> CliResult {
    // Opening applies any pending migrations
    let db = Database::open(db_path)?;
    db.close()?;
    println!("✓ Database ready: {}", db_path.display());
    Ok(())
}
