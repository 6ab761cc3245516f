mod log_filter;
mod user;
