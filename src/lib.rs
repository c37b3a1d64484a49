//! snowlog - glog 风格的流式日志库
//!
//! 面向小型服务和命令行工具的进程级日志门面。
//!
//! ## 模块
//!
//! - **log**: 日志级别、记录格式、输出器、全局 Logger 与流式日志宏
//!
//! ## 示例
//!
//! ```rust,no_run
//! use snowlog::{log_info, Endl};
//!
//! snowlog::init_with("app.log", 10 * 1024 * 1024, 5, snowlog::LogLevel::Info);
//! log_info!() << "first line" << Endl << "second line";
//! snowlog::shutdown();
//! ```

pub mod log;

// 重新导出主要的公共 API
pub use crate::log::{
    init, init_with, set_level, shutdown, Endl, Flush, LogAppender, LogFormatter, LogLevel,
    LogMessage, LogRecord, Logger, LoggerConfig,
};
