//! TutorDesk CLI
//!
//! Administrative commands against the database file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tutordesk_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "tutordesk")]
#[command(about = "TutorDesk - tutoring coordination admin tool", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, default_value = "tutordesk.db")]
    db: PathBuf,

    /// Print operation logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the database if needed and apply pending migrations
    Migrate,
    /// Study group operations
    Group(commands::group::GroupArgs),
    /// Student, parent and teacher listings
    People(commands::people::PeopleArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        logging_facility::init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Migrate => commands::migrate::execute(&cli.db),
        Commands::Group(args) => commands::group::execute(&cli.db, args),
        Commands::People(args) => commands::people::execute(&cli.db, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
