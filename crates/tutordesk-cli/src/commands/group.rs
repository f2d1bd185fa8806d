//! Study group commands
//!
//! Usage: tutordesk group create <NAME>
//!        tutordesk group list [--skip N] [--limit N]

use clap::{Args, Subcommand};
use std::path::Path;
use tutordesk_engine::commands::engine_query::list_groups;
use tutordesk_engine::commands::read_tools::{ListOptions, DEFAULT_MAX_LIST_LIMIT};
use tutordesk_engine::commands::registration::create_group;
use tutordesk_store::Database;

use super::CliResult;

#[derive(Debug, Args)]
pub struct GroupArgs {
    #[command(subcommand)]
    pub command: GroupCommand,
}

#[derive(Debug, Subcommand)]
pub enum GroupCommand {
    /// Create a group with a unique name
    Create {
        name: String,
    },
    /// List groups ordered by id
    List(PageArgs),
}

#[derive(Debug, Args)]
pub struct PageArgs {
    #[arg(long)]
    pub skip: Option<usize>,
    #[arg(long)]
    pub limit: Option<usize>,
}

impl From<&PageArgs> for ListOptions {
    fn from(args: &PageArgs) -> Self {
        ListOptions {
            skip: args.skip,
            limit: args.limit,
        }
    }
}

pub fn execute(db_path: &Path, args: GroupArgs) -> CliResult {
    let db = Database::open(db_path)?;

    match args.command {
        GroupCommand::Create { name } => {
            let group = db.with_conn(|conn| create_group(conn, &name))?;
            println!("✓ Created group {} ({})", group.id, group.group_name);
        }
        GroupCommand::List(page) => {
            let groups =
                db.with_conn(|conn| list_groups(conn, ListOptions::from(&page), DEFAULT_MAX_LIST_LIMIT))?;
            for group in groups {
                println!("{}\t{}", group.id, group.group_name);
            }
        }
    }

    db.close()?;
    Ok(())
}
