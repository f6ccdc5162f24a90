pub mod formatting;
pub mod logger;
pub mod path;
pub mod table;

pub use formatting::{display_value, html_escape};
