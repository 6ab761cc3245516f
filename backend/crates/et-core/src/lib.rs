pub mod date;
pub mod duration;
pub mod error;
pub mod models;
pub mod text;


pub use date::{CalendarDate, format_date, parse_date, render_date, today};
pub use duration::{DurationInput, parse_duration};
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::exercise::Exercise;
pub use models::log_filter::LogFilter;
pub use models::user::User;
pub use text::TextInput;
