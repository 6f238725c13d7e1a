//! Console presentation: themes, message formatting and the run summary.

pub mod output_format;
pub mod summary;
pub mod theme;
