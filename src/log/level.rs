use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// 日志级别
///
/// 严格有序：Info < Warn < Error < Fatal。Fatal 记录输出后进程会被终止
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 一般信息
    Info = 0,
    /// 警告信息
    #[serde(alias = "warning")]
    Warn = 1,
    /// 错误信息
    #[serde(alias = "err")]
    Error = 2,
    /// 致命错误，输出后 abort
    Fatal = 3,
}

/// 日志级别解析失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid log level: {0}")]
pub struct ParseLevelError(pub String);

impl LogLevel {
    /// 所有级别，按从低到高排列
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// 记录行首的级别字符
    pub fn letter(self) -> char {
        match self {
            LogLevel::Info => 'I',
            LogLevel::Warn => 'W',
            LogLevel::Error => 'E',
            LogLevel::Fatal => 'F',
        }
    }

    /// 从原始数值还原级别
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(LogLevel::Info),
            1 => Some(LogLevel::Warn),
            2 => Some(LogLevel::Error),
            3 => Some(LogLevel::Fatal),
            _ => None,
        }
    }

    /// 按原始数值取级别字符，未知数值渲染为 `?`
    pub fn letter_of(value: u8) -> char {
        Self::from_u8(value).map_or('?', LogLevel::letter)
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" | "err" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Fatal => write!(f, "FATAL"),
        }
    }
}
