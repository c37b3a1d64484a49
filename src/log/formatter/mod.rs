mod core;
mod glog_formatter;

pub use core::LogFormatter;
pub use glog_formatter::{format_glog_line, GlogFormatter};
