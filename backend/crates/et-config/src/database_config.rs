use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, DEFAULT_DATABASE_MAX_CONNECTIONS,
    MAX_DATABASE_MAX_CONNECTIONS, MIN_DATABASE_MAX_CONNECTIONS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config dir. Ignored when `url` is set.
    pub path: String,
    /// Full connection string, e.g. `sqlite:///var/lib/exercise/data.db`
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            url: None,
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let db_path = std::path::Path::new(&self.path);
        if db_path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if let Some(url) = &self.url
            && !url.starts_with("sqlite:")
        {
            return Err(ConfigError::database(format!(
                "database.url must be a sqlite: URL, got '{}'",
                url
            )));
        }

        if !(MIN_DATABASE_MAX_CONNECTIONS..=MAX_DATABASE_MAX_CONNECTIONS)
            .contains(&self.max_connections)
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS, self.max_connections
            )));
        }

        Ok(())
    }
}
