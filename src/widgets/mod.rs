pub mod progress_bar;

pub use progress_bar::{Indicator, indicator_progress, indicator_width};
