mod console_appender;
mod memory_appender;
mod rolling_file_appender;
mod trait_;

pub use console_appender::{ConsoleAppender, ConsoleAppenderConfig, Target};
pub use memory_appender::MemoryAppender;
pub use rolling_file_appender::{RollingFileAppender, RollingFileAppenderConfig};
pub use trait_::LogAppender;
