mod format;
mod labels;

pub use format::{format_compact, format_integer, format_magnitude, LabelFormat};
pub use labels::should_label;
