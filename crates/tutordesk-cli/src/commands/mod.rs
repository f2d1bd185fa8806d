pub mod group;
pub mod migrate;
pub mod people;

/// Error type shared by all command handlers
pub type CliResult = Result<(), Box<dyn std::error::Error>>;
