pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::exercise_repository::ExerciseRepository;
pub use repositories::user_repository::UserRepository;
