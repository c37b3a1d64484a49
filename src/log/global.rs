use crate::log::level::LogLevel;
use crate::log::log_record::LogRecord;
use crate::log::logger::{Logger, LoggerConfig};
use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// 全局 Logger 注册表
///
/// 未初始化或已关闭时为 None，此时所有非 Fatal 日志都是空操作。
/// 发射日志持有读锁，初始化与关闭持有写锁，因此一次发射要么作用于旧的输出器集合，
/// 要么什么也不做，不会看到半初始化的状态
static GLOBAL_LOGGER: once_cell::sync::Lazy<RwLock<Option<Logger>>> =
    once_cell::sync::Lazy::new(|| RwLock::new(None));

fn read() -> RwLockReadGuard<'static, Option<Logger>> {
    GLOBAL_LOGGER.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Option<Logger>> {
    GLOBAL_LOGGER.write().unwrap_or_else(PoisonError::into_inner)
}

/// 初始化全局日志系统
///
/// 重复调用时先刷新旧的输出器，再替换为新的
///
/// # 示例
///
/// ```no_run
/// use snowlog::log::{self, LoggerConfig, LogLevel};
///
/// log::init(LoggerConfig::default().with_file("app.log", 1024 * 1024, 3).with_level(LogLevel::Warn));
/// snowlog::log_warn!() << "disk usage " << 91 << "%";
/// log::shutdown();
/// ```
pub fn init(config: LoggerConfig) {
    install(Logger::new(config));
}

/// 按位置参数初始化：文件路径（为空表示只输出到终端）、单文件大小、保留文件数、级别
pub fn init_with(file_path: impl AsRef<Path>, max_file_size: u64, max_files: usize, level: LogLevel) {
    let file_path = file_path.as_ref().to_string_lossy().to_string();
    let config = LoggerConfig {
        file_path: Some(file_path).filter(|p| !p.is_empty()),
        max_file_size,
        max_files,
        level,
        ..Default::default()
    };
    init(config);
}

/// 发布一个已经构造好的 Logger 作为全局 Logger
pub fn install(logger: Logger) {
    let mut global = write();
    if let Some(previous) = global.take() {
        previous.flush();
    }
    *global = Some(logger);
}

/// 全局日志系统是否处于可用状态
pub fn is_live() -> bool {
    read().is_some()
}

/// 设置全局日志级别，未初始化时无效
pub fn set_level(level: LogLevel) {
    if let Some(logger) = read().as_ref() {
        logger.set_level(level);
    }
}

/// 当前全局日志级别，未初始化时返回 None
pub fn level() -> Option<LogLevel> {
    read().as_ref().map(Logger::level)
}

/// 设置立即刷新的级别，未初始化时无效
pub fn set_flush_level(level: LogLevel) {
    if let Some(logger) = read().as_ref() {
        logger.set_flush_level(level);
    }
}

/// 该级别的日志当前是否会被输出
pub fn enabled(level: LogLevel) -> bool {
    read().as_ref().is_some_and(|logger| logger.is_enabled(level))
}

/// 同步刷新所有输出器
pub fn flush() {
    if let Some(logger) = read().as_ref() {
        logger.flush();
    }
}

/// 关闭全局日志系统：刷新并释放所有输出器
///
/// 未初始化时调用是安全的
pub fn shutdown() {
    let previous = write().take();
    if let Some(logger) = previous {
        logger.flush();
    }
}

/// 把记录交给全局 Logger，返回是否找到了可用的 Logger
pub fn dispatch(record: &LogRecord) -> bool {
    match read().as_ref() {
        Some(logger) => {
            logger.log(record);
            true
        }
        None => false,
    }
}
