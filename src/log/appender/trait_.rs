use crate::log::level::LogLevel;
use anyhow::Result;

/// 日志输出器 trait
///
/// 负责将格式化后的日志行输出到目标介质。同一个输出器会被多个线程同时调用，
/// 实现需要自行串行化写入，保证一行记录不会与其他记录交错
pub trait LogAppender: Send + Sync {
    /// 输出一行日志（不含换行符），级别用于着色等传输层处理
    fn append(&self, level: LogLevel, formatted_message: &str) -> Result<()>;

    /// 刷新缓冲区（默认实现为空操作）
    fn flush(&self) -> Result<()> {
        Ok(())
    }

    /// 是否为交互式终端输出器
    fn is_interactive(&self) -> bool {
        false
    }
}
