use std::path::PathBuf;

use marid_core::ExtractOptions;
use marid_format::DEFAULT_FORMAT;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3306;
pub const DEFAULT_USER: &str = "root";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("database name is required")]
    MissingDatabase,
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error(".my.cnf file not found at {}", .0.display())]
    MyCnfNotFound(PathBuf),
    #[error("failed to read .my.cnf file: {0}")]
    MyCnf(#[from] config::ConfigError),
}

/// Connection values from one source. `None` means the source left it unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

impl ConnectionSettings {
    /// Fill every unset value from `fallback`.
    pub fn or(self, fallback: ConnectionSettings) -> Self {
        Self {
            host: non_empty(self.host).or(fallback.host),
            port: self.port.filter(|port| *port != 0).or(fallback.port),
            user: non_empty(self.user).or(fallback.user),
            password: non_empty(self.password).or(fallback.password),
            database: non_empty(self.database).or(fallback.database),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Comma separated table allow-list, as typed on the command line.
    pub tables: String,
    pub format: String,
}

impl Config {
    /// Apply defaults to merged connection settings.
    pub fn resolve(
        settings: ConnectionSettings,
        tables: String,
        format: String,
    ) -> Result<Self, ConfigError> {
        let database = non_empty(settings.database).ok_or(ConfigError::MissingDatabase)?;

        Ok(Self {
            host: non_empty(settings.host).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: settings.port.unwrap_or(DEFAULT_PORT),
            user: non_empty(settings.user).unwrap_or_else(|| DEFAULT_USER.to_string()),
            password: settings.password.unwrap_or_default(),
            database,
            tables,
            format: if format.is_empty() {
                DEFAULT_FORMAT.to_string()
            } else {
                format
            },
        })
    }

    /// Table names from the comma separated list; spaces and empty entries
    /// are dropped.
    pub fn tables_list(&self) -> Vec<String> {
        self.tables
            .split(',')
            .map(|entry| entry.replace(' ', ""))
            .filter(|entry| !entry.is_empty())
            .collect()
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::new(self.database.clone()).with_tables(self.tables_list())
    }
}
