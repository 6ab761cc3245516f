use crate::{
    AssetsConfig, CONFIG_DIR_ENV, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

const CONFIG_FILENAME: &str = "config.toml";

/// Effective service configuration.
///
/// Every section falls back to its defaults, so an empty or missing
/// `config.toml` is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub assets: AssetsConfig,
}

impl Config {
    /// Build the configuration from, in increasing priority:
    /// defaults, `<config dir>/config.toml`, `PORT` / `DATABASE_URL`, and the
    /// `ET_*` variables. A `.env` file in the working directory is read
    /// first, and the config directory is created if missing.
    ///
    /// The result is not validated; call [`Config::validate`].
    pub fn load() -> ConfigErrorResult<Self> {
        // Missing .env is the normal case outside development
        let _ = dotenvy::dotenv();

        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::io(&config_dir, e))?;

        let config_path = config_dir.join(CONFIG_FILENAME);
        let mut config = if config_path.is_file() {
            Self::read_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env();
        Ok(config)
    }

    fn read_file(path: &Path) -> ConfigErrorResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `ET_CONFIG_DIR` when set, else `.et` under the working directory.
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = env::current_dir().map_err(|e| ConfigError::io(".", e))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()
    }

    /// Connection string for the store: the explicit URL when configured,
    /// otherwise the SQLite file inside the config directory.
    pub fn database_url(&self) -> ConfigErrorResult<String> {
        match &self.database.url {
            Some(url) => Ok(url.clone()),
            None => {
                let file = Self::config_dir()?.join(&self.database.path);
                Ok(format!("sqlite://{}", file.display()))
            }
        }
    }

    /// Absolute path of the log file, or `None` when logging to stdout.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(filename) = &self.logging.file else {
            return Ok(None);
        };

        let log_dir = Self::config_dir()?.join(&self.logging.dir);
        Ok(Some(log_dir.join(filename)))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        let database = match &self.database.url {
            Some(_) => String::from("<url>"),
            None => self.database.path.clone(),
        };

        info!("Configuration loaded:");
        info!("  server:   {}", self.bind_addr());
        info!(
            "  database: {} (pool of {})",
            database, self.database.max_connections
        );
        info!(
            "  logging:  {} to {}{}",
            *self.logging.level,
            self.logging.file.as_deref().unwrap_or("stdout"),
            if self.logging.colored { ", colored" } else { "" }
        );
        info!(
            "  assets:   views={} public={}",
            self.assets.views_dir, self.assets.public_dir
        );
    }

    fn apply_env(&mut self) {
        // Platform conventions first so the ET_* names win
        override_parsed("PORT", &mut self.server.port);
        override_optional("DATABASE_URL", &mut self.database.url);

        override_parsed("ET_SERVER_HOST", &mut self.server.host);
        override_parsed("ET_SERVER_PORT", &mut self.server.port);

        override_parsed("ET_DATABASE_PATH", &mut self.database.path);
        override_optional("ET_DATABASE_URL", &mut self.database.url);
        override_parsed(
            "ET_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        override_parsed("ET_LOG_LEVEL", &mut self.logging.level);
        override_flag("ET_LOG_COLORED", &mut self.logging.colored);
        override_optional("ET_LOG_FILE", &mut self.logging.file);

        override_parsed("ET_VIEWS_DIR", &mut self.assets.views_dir);
        override_parsed("ET_PUBLIC_DIR", &mut self.assets.public_dir);
    }
}

/// Replace `target` when the variable is set and parses; otherwise keep it.
fn override_parsed<T: FromStr>(name: &str, target: &mut T) {
    if let Some(value) = env::var(name).ok().and_then(|raw| raw.parse().ok()) {
        *target = value;
    }
}

/// Set an optional value from a non-empty variable.
fn override_optional(name: &str, target: &mut Option<String>) {
    if let Ok(raw) = env::var(name)
        && !raw.is_empty()
    {
        *target = Some(raw);
    }
}

/// `"true"` and `"1"` enable; any other value disables.
fn override_flag(name: &str, target: &mut bool) {
    if let Ok(raw) = env::var(name) {
        *target = matches!(raw.as_str(), "true" | "1");
    }
}
