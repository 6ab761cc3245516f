pub mod error;
pub mod exercises;
pub mod extractors;
pub mod logs;
pub mod resolve;
pub mod users;
