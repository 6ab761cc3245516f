pub mod log_entry_dto;
pub mod log_query;
pub mod log_response;
#[allow(clippy::module_inception)]
pub mod logs;
