//! People commands
//!
//! Usage: tutordesk people list <KIND> [--skip N] [--limit N]
//!        tutordesk people whois <LOGIN>

use clap::{Args, Subcommand, ValueEnum};
use std::path::Path;
use tutordesk_core::errors::{ExError, ExErrorKind};
use tutordesk_core::model::PersonKind;
use tutordesk_engine::commands::engine_query::{list_people, login_owner};
use tutordesk_engine::commands::read_tools::{ListOptions, DEFAULT_MAX_LIST_LIMIT};
use tutordesk_store::Database;

use super::group::PageArgs;
use super::CliResult;

#[derive(Debug, Args)]
pub struct PeopleArgs {
    #[command(subcommand)]
    pub command: PeopleCommand,
}

#[derive(Debug, Subcommand)]
pub enum PeopleCommand {
    /// List people of one kind ordered by id
    List {
        #[arg(value_enum)]
        kind: KindArg,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show which kind of person owns a login
    Whois { login: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Student,
    Parent,
    Teacher,
}

impl From<KindArg> for PersonKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Student => PersonKind::Student,
            KindArg::Parent => PersonKind::Parent,
            KindArg::Teacher => PersonKind::Teacher,
        }
    }
}

pub fn execute(db_path: &Path, args: PeopleArgs) -> CliResult {
    let db = Database::open(db_path)?;

    match args.command {
        PeopleCommand::List { kind, page } => {
            let kind = PersonKind::from(kind);
            let opts = ListOptions::from(&page);
            let people = db.with_conn(|conn| list_people(conn, kind, opts, DEFAULT_MAX_LIST_LIMIT))?;
            for person in people {
                match &person.subject {
                    Some(subject) => {
                        println!("{}\t{}\t{}\t{}", person.id, person.login, person.name, subject)
                    }
                    None => println!("{}\t{}\t{}", person.id, person.login, person.name),
                }
            }
        }
        PeopleCommand::Whois { login } => {
            let owner = db.with_conn(|conn| login_owner(conn, &login))?;
            match owner {
                Some((kind, id)) => println!("{} {}", kind, id),
                None => {
                    return Err(ExError::new(ExErrorKind::NotFound)
                        .with_entity_id(login.as_str())
                        .with_message(format!("no person has login {}", login))
                        .into())
                }
            }
        }
    }

    db.close()?;
    Ok(())
}
