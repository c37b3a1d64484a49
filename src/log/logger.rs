use crate::log::appender::{
    ConsoleAppender, ConsoleAppenderConfig, LogAppender, RollingFileAppender,
    RollingFileAppenderConfig, Target,
};
use crate::log::formatter::{GlogFormatter, LogFormatter};
use crate::log::level::LogLevel;
use crate::log::log_record::LogRecord;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Logger 配置
///
/// 默认只输出到终端，级别 info，warn 及以上立即刷新
#[derive(Debug, Clone, Serialize, Deserialize, SmartDefault, PartialEq)]
#[serde(default)]
pub struct LoggerConfig {
    /// 日志文件路径，为空表示只输出到终端
    pub file_path: Option<String>,

    /// 单个日志文件最大大小（字节）
    #[default(10 * 1024 * 1024)]
    pub max_file_size: u64,

    /// 保留的日志文件数量
    #[default(5)]
    pub max_files: usize,

    /// 最低输出级别
    #[default(LogLevel::Info)]
    pub level: LogLevel,

    /// 达到该级别的记录输出后立即刷新所有输出器
    #[default(LogLevel::Warn)]
    pub flush_level: LogLevel,

    /// 终端输出是否按级别着色
    #[default = true]
    pub colored: bool,

    /// 终端输出目标
    pub target: Target,
}

impl LoggerConfig {
    /// 从 JSON 字符串创建配置（支持 JSON5 格式）
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(json5::from_str(json_str)?)
    }

    /// 从 YAML 字符串创建配置
    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// 从 TOML 字符串创建配置
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 设置文件输出
    pub fn with_file(mut self, file_path: impl Into<String>, max_file_size: u64, max_files: usize) -> Self {
        self.file_path = Some(file_path.into());
        self.max_file_size = max_file_size;
        self.max_files = max_files;
        self
    }

    /// 设置最低输出级别
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }
}

/// 核心日志器
///
/// 持有一组有序的输出器以及级别阈值，负责过滤、格式化和分发。
/// 分发过程中的任何错误都不会返回给调用方
pub struct Logger {
    level: AtomicU8,
    flush_level: AtomicU8,
    formatter: Arc<dyn LogFormatter>,
    appenders: Vec<Arc<dyn LogAppender>>,
    write_error_reported: AtomicBool,
}

impl Logger {
    /// 从配置创建 Logger
    ///
    /// 终端输出器始终存在；文件无法打开时只保留终端输出，并在终端给出一条警告
    pub fn new(config: LoggerConfig) -> Self {
        let console: Arc<dyn LogAppender> = Arc::new(ConsoleAppender::new(ConsoleAppenderConfig {
            use_colors: config.colored,
            target: config.target,
        }));

        let mut logger = Self::from_appenders(config.level, config.flush_level, vec![console]);

        if let Some(file_path) = config.file_path.as_deref().filter(|p| !p.is_empty()) {
            let file_config = RollingFileAppenderConfig {
                file_path: file_path.to_string(),
                max_size: config.max_file_size,
                max_files: config.max_files,
            };
            match RollingFileAppender::new(file_config) {
                Ok(appender) => logger.appenders.push(Arc::new(appender)),
                Err(err) => logger.diagnostic(
                    file!(),
                    line!(),
                    format!("{:#}, logging to console only", err),
                ),
            }
        }

        logger
    }

    /// 使用给定的输出器创建 Logger
    pub fn from_appenders(
        level: LogLevel,
        flush_level: LogLevel,
        appenders: Vec<Arc<dyn LogAppender>>,
    ) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
            flush_level: AtomicU8::new(flush_level as u8),
            formatter: Arc::new(GlogFormatter::new()),
            appenders,
            write_error_reported: AtomicBool::new(false),
        }
    }

    /// 替换格式化器
    pub fn with_formatter(mut self, formatter: Arc<dyn LogFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    /// 当前输出器列表
    pub fn appenders(&self) -> &[Arc<dyn LogAppender>] {
        &self.appenders
    }

    /// 设置日志级别
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Release);
    }

    /// 获取当前日志级别
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Acquire)).unwrap_or(LogLevel::Info)
    }

    /// 设置立即刷新的级别
    pub fn set_flush_level(&self, level: LogLevel) {
        self.flush_level.store(level as u8, Ordering::Release);
    }

    /// 获取立即刷新的级别
    pub fn flush_level(&self) -> LogLevel {
        LogLevel::from_u8(self.flush_level.load(Ordering::Acquire)).unwrap_or(LogLevel::Warn)
    }

    /// 该级别的记录是否会被输出
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// 记录日志
    pub fn log(&self, record: &LogRecord) {
        if !self.is_enabled(record.level) {
            return;
        }

        let formatted = match self.formatter.format(record) {
            Ok(formatted) => formatted,
            Err(_) => return,
        };

        for appender in &self.appenders {
            if let Err(err) = appender.append(record.level, &formatted) {
                self.report_write_error(appender.as_ref(), &err);
            }
        }

        if record.level >= self.flush_level() {
            self.flush();
        }
    }

    /// 刷新所有输出器，错误被忽略
    pub fn flush(&self) {
        for appender in &self.appenders {
            let _ = appender.flush();
        }
    }

    /// 非终端输出器第一次写入失败时，在终端输出一条警告
    fn report_write_error(&self, appender: &dyn LogAppender, err: &anyhow::Error) {
        if appender.is_interactive() || self.write_error_reported.swap(true, Ordering::AcqRel) {
            return;
        }
        self.diagnostic(
            file!(),
            line!(),
            format!("log sink write failed: {:#}; further failures are not reported", err),
        );
    }

    /// 直接写给终端输出器的自诊断信息
    fn diagnostic(&self, file: &str, line: u32, message: String) {
        let record = LogRecord::new(LogLevel::Warn, message).with_location(file, line);
        let Ok(formatted) = self.formatter.format(&record) else {
            return;
        };
        for appender in self.appenders.iter().filter(|a| a.is_interactive()) {
            let _ = appender.append(LogLevel::Warn, &formatted);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl From<LoggerConfig> for Logger {
    fn from(config: LoggerConfig) -> Self {
        Logger::new(config)
    }
}
