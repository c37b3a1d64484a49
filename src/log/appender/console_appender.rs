use crate::log::appender::LogAppender;
use crate::log::level::LogLevel;
use anyhow::Result;
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use std::io::{self, IsTerminal, Write};

/// 终端输出目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Stdout,
    #[default]
    Stderr,
}

/// ConsoleAppender 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ConsoleAppenderConfig {
    /// 是否按级别着色
    #[default = true]
    pub use_colors: bool,

    /// 输出目标，默认为标准错误
    pub target: Target,
}

/// 终端输出器
///
/// 将日志输出到标准错误（或标准输出），按级别着色
pub struct ConsoleAppender {
    config: ConsoleAppenderConfig,
    colorize: bool,
}

impl Target {
    /// 输出目标是否连接到终端
    pub fn is_terminal(self) -> bool {
        match self {
            Target::Stdout => io::stdout().is_terminal(),
            Target::Stderr => io::stderr().is_terminal(),
        }
    }
}

impl ConsoleAppender {
    /// 只有配置允许且实际输出目标是终端时才着色，重定向到文件的输出保持纯文本
    pub fn new(config: ConsoleAppenderConfig) -> Self {
        let colorize = config.use_colors && config.target.is_terminal();
        if colorize {
            // colored 默认按 stdout 判断是否着色，这里以实际目标为准
            colored::control::set_override(true);
        }
        Self::with_colorize(config, colorize)
    }

    fn with_colorize(config: ConsoleAppenderConfig, colorize: bool) -> Self {
        Self { config, colorize }
    }

    /// 是否会输出颜色
    pub fn is_colored(&self) -> bool {
        self.colorize
    }

    fn paint(level: LogLevel, line: &str) -> ColoredString {
        match level {
            LogLevel::Info => line.green(),
            LogLevel::Warn => line.yellow().bold(),
            LogLevel::Error => line.red().bold(),
            LogLevel::Fatal => line.white().on_red().bold(),
        }
    }

    fn write_line(&self, out: &mut dyn Write, level: LogLevel, line: &str) -> io::Result<()> {
        if self.colorize {
            writeln!(out, "{}", Self::paint(level, line))?;
        } else {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new(ConsoleAppenderConfig::default())
    }
}

impl From<ConsoleAppenderConfig> for ConsoleAppender {
    fn from(config: ConsoleAppenderConfig) -> Self {
        Self::new(config)
    }
}

impl LogAppender for ConsoleAppender {
    fn append(&self, level: LogLevel, formatted_message: &str) -> Result<()> {
        // 持有流锁期间写完整行，避免与其他线程的输出交错
        match self.config.target {
            Target::Stdout => self.write_line(&mut io::stdout().lock(), level, formatted_message)?,
            Target::Stderr => self.write_line(&mut io::stderr().lock(), level, formatted_message)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        match self.config.target {
            Target::Stdout => io::stdout().flush()?,
            Target::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
