//! `log` crate 桥接
//!
//! 把依赖库通过 `log::info!` 等宏输出的日志转发到全局 Logger，
//! 与本地调用点输出的记录使用相同的格式和输出器

use crate::log::global;
use crate::log::level::LogLevel;
use crate::log::log_record::LogRecord;
use ::log::{LevelFilter, Metadata, Record, SetLoggerError};

/// `log::Log` 的实现，转发到全局 Logger
///
/// debug / trace 没有对应的级别，直接丢弃；桥接永远不会产生 Fatal 记录
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

fn map_level(level: ::log::Level) -> Option<LogLevel> {
    match level {
        ::log::Level::Error => Some(LogLevel::Error),
        ::log::Level::Warn => Some(LogLevel::Warn),
        ::log::Level::Info => Some(LogLevel::Info),
        ::log::Level::Debug | ::log::Level::Trace => None,
    }
}

impl ::log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        map_level(metadata.level()).is_some_and(global::enabled)
    }

    fn log(&self, record: &Record) {
        let Some(level) = map_level(record.level()) else {
            return;
        };

        let message = record.args().to_string();
        if message.is_empty() {
            return;
        }

        let record = LogRecord::new(level, message)
            .with_location(record.file().unwrap_or("unknown"), record.line().unwrap_or(0));
        global::dispatch(&record);
    }

    fn flush(&self) {
        global::flush();
    }
}

/// 注册为 `log` crate 的全局 logger
///
/// 每个进程只能注册一次，重复调用返回错误
pub fn install_log_bridge() -> Result<(), SetLoggerError> {
    ::log::set_logger(&BRIDGE)?;
    ::log::set_max_level(LevelFilter::Info);
    Ok(())
}
