//! TutorDesk HTTP server

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tutordesk_core::errors::ExError;
use tutordesk_core::logging_facility;
use tutordesk_server::{lifecycle, router, AppState, ServerConfig};
use tutordesk_store::Database;

#[derive(Debug, Parser)]
#[command(name = "tutordesk-server")]
#[command(about = "TutorDesk - tutoring coordination HTTP service", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(long, env = "TUTORDESK_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), ExError> {
    let cfg = ServerConfig::load(args.config.as_deref())?;
    logging_facility::init(cfg.profile()?);
    let addr = cfg.bind_addr()?;

    let db = Arc::new(Database::open(&cfg.database_path)?);
    let app = router(AppState::new(Arc::clone(&db), cfg.max_page_limit));

    let served = lifecycle::serve(addr, app).await;

    // The router (and its clone of the handle) is gone once serve returns
    match Arc::try_unwrap(db) {
        Ok(db) => db.close()?,
        Err(_) => tracing::warn!("database still shared at shutdown, dropping without close"),
    }
    served
}
