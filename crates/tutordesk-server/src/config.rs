//! Server configuration
//!
//! Layered with the `config` crate, lowest precedence first:
//! built-in defaults, an optional TOML file, then `TUTORDESK_*` environment
//! variables. A `.env` file is folded into the process environment by
//! `dotenvy` before the environment layer is read; a missing one is skipped,
//! a malformed one fails the load.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tutordesk_core::errors::{ExError, ExErrorKind};
use tutordesk_core::logging_facility::Profile;

/// Prefix for environment overrides, e.g. `TUTORDESK_PORT=9000`
pub const ENV_PREFIX: &str = "TUTORDESK";

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "TUTORDESK_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_profile: String,
    pub max_page_limit: usize,
}

impl ServerConfig {
    /// Load from the process environment (after `.env`) and an optional file
    ///
    /// # Errors
    ///
    /// `InvalidInput` when a source cannot be read or a value is out of range.
    pub fn load(file: Option<&Path>) -> Result<Self, ExError> {
        dotenv_result(dotenvy::dotenv())?;
        Self::from_sources(file, None)
    }

    /// Load with an explicit environment map instead of the process one
    ///
    /// # Errors
    ///
    /// `InvalidInput` when a source cannot be read or a value is out of range.
    pub fn from_sources(
        file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ExError> {
        let mut builder = Config::builder()
            .set_default("database_path", "tutordesk.db")
            .and_then(|b| b.set_default("host", "127.0.0.1"))
            .and_then(|b| b.set_default("port", 8000))
            .and_then(|b| b.set_default("log_profile", "development"))
            .and_then(|b| b.set_default("max_page_limit", 100))
            .map_err(config_error)?;

        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        );

        let cfg: ServerConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ExError> {
        self.profile()?;
        if self.max_page_limit == 0 {
            return Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("config")
                .with_message("max_page_limit must be at least 1"));
        }
        Ok(())
    }

    /// Parsed logging profile
    ///
    /// # Errors
    ///
    /// `InvalidInput` for anything but development or production.
    pub fn profile(&self) -> Result<Profile, ExError> {
        match self.log_profile.parse::<Profile>()? {
            Profile::Test => Err(ExError::new(ExErrorKind::InvalidInput)
                .with_op("config")
                .with_message("log_profile must be development or production")),
            profile => Ok(profile),
        }
    }

    /// Socket address to bind
    ///
    /// # Errors
    ///
    /// `InvalidInput` when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ExError> {
        let ip = self.host.parse().map_err(|_| {
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("config")
                .with_message(format!("host is not an IP address: {}", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn dotenv_result<T>(result: dotenvy::Result<T>) -> Result<(), ExError> {
    match result {
        Ok(_) => Ok(()),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("config")
            .with_message(format!(".env: {}", err))),
    }
}

fn config_error(err: config::ConfigError) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("config")
        .with_message(err.to_string())
}
