use crate::log::formatter::LogFormatter;
use crate::log::log_record::LogRecord;
use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};

/// glog 风格格式化器
///
/// 输出格式：`I20231224 09:30:45.123456 12345 file.rs:123] message`
///
/// 时间戳按本地时区展开，精确到微秒
#[derive(Debug, Clone, Copy, Default)]
pub struct GlogFormatter;

impl GlogFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl LogFormatter for GlogFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        let timestamp: DateTime<Local> = record.timestamp.into();
        format_glog_line(
            record.level.letter(),
            &timestamp,
            record.thread_id,
            record.basename(),
            record.line,
            &record.message,
        )
    }
}

/// 拼装一行 glog 格式的记录
///
/// 纯函数：相同输入总是得到相同输出
pub fn format_glog_line<Tz>(
    letter: char,
    timestamp: &DateTime<Tz>,
    thread_id: u64,
    basename: &str,
    line: u32,
    message: &str,
) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    // 级别 1 + 时间 24 + 线程 20 + 分隔符
    let mut result = String::with_capacity(50 + basename.len() + message.len());

    result.push(letter);
    write!(result, "{}", timestamp.format("%Y%m%d %H:%M:%S%.6f"))?;
    write!(result, " {} {}:{}] ", thread_id, basename, line)?;
    result.push_str(message);

    Ok(result)
}
