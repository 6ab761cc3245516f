use et_config::AssetsConfig;
use et_db::{Database, ExerciseRepository, UserRepository};

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub assets: AssetsConfig,
}

impl AppState {
    pub fn new(database: Database, assets: AssetsConfig) -> Self {
        Self { database, assets }
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.database.pool().clone())
    }

    pub fn exercises(&self) -> ExerciseRepository {
        ExerciseRepository::new(self.database.pool().clone())
    }
}
