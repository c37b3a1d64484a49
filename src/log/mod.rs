//! 日志模块
//!
//! glog 风格的流式日志门面：调用点通过宏创建一条消息，用 `<<` 拼接任意可显示的值，
//! 语句结束时输出恰好一条带级别、时间、线程、文件和行号的记录。
//!
//! # 特性
//!
//! - 四个级别：Info、Warn、Error、Fatal，Fatal 输出后终止进程
//! - 彩色终端输出（ConsoleAppender）
//! - 按大小滚动的文件输出（RollingFileAppender），`app.log` 始终是最新的文件
//! - 进程级全局 Logger，可随时初始化、替换和关闭
//! - 可选的 `log` crate 桥接
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use snowlog::log::{self, LoggerConfig};
//! use snowlog::{log_err, log_info, log_warn_if};
//!
//! let config = LoggerConfig::from_json(r#"
//!     {
//!         file_path: "logs/app.log",
//!         max_file_size: 1048576,
//!         max_files: 3,
//!         level: "info",
//!     }
//! "#).unwrap();
//! log::init(config);
//!
//! let port = 8080;
//! log_info!() << "listening on port " << port;
//! log_warn_if!(port < 1024, "privileged port {}", port);
//! log_err!("connect to {} failed", "10.0.0.1");
//!
//! log::shutdown();
//! ```

pub mod appender;
pub mod bridge;
pub mod formatter;
pub mod global;
pub mod level;
pub mod log_record;
pub mod logger;
pub mod macros;
pub mod message;

pub use appender::{
    ConsoleAppender, ConsoleAppenderConfig, LogAppender, MemoryAppender, RollingFileAppender,
    RollingFileAppenderConfig, Target,
};
pub use bridge::{install_log_bridge, LogBridge};
pub use formatter::{format_glog_line, GlogFormatter, LogFormatter};
pub use global::{
    dispatch, enabled, flush, init, init_with, install, is_live, level, set_flush_level, set_level,
    shutdown,
};
pub use level::{LogLevel, ParseLevelError};
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerConfig};
pub use message::{Endl, Flush, LogMessage};
