mod error;
mod log_query;
