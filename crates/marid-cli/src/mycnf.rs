use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};

use crate::settings::{ConfigError, ConnectionSettings};

/// Path of the per-user MySQL client configuration file.
pub fn default_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".my.cnf"))
        .ok_or(ConfigError::NoHomeDir)
}

/// Load `~/.my.cnf`.
pub fn load_default() -> Result<ConnectionSettings, ConfigError> {
    load(&default_path()?)
}

/// Read connection values from the `[client]` section of a `.my.cnf` file.
pub fn load(path: &Path) -> Result<ConnectionSettings, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::MyCnfNotFound(path.to_path_buf()));
    }

    let source = Config::builder()
        .add_source(File::from(path).format(FileFormat::Ini))
        .build()?;

    let get = |key: &str| {
        source
            .get_string(&format!("client.{key}"))
            .ok()
            .filter(|value| !value.is_empty())
    };

    Ok(ConnectionSettings {
        host: get("host"),
        port: get("port").and_then(|port| port.trim().parse().ok()),
        user: get("user"),
        password: get("password"),
        database: get("database"),
    })
}
