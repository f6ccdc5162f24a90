pub mod input;
pub mod overlay;
pub mod render;
pub mod time;

pub use overlay::{ChangeIndex, apply_changes, filter_by_status};
pub use render::render;
pub use time::{elapsed_millis, format_elapsed};
