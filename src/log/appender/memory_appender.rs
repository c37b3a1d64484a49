use crate::log::appender::LogAppender;
use crate::log::level::LogLevel;
use anyhow::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// 内存输出器
///
/// 把日志行保存在内存中，主要用于测试和嵌入场景下捕获输出
#[derive(Default)]
pub struct MemoryAppender {
    lines: Mutex<Vec<(LogLevel, String)>>,
    flushes: AtomicUsize,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(LogLevel, String)>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 已写入的日志行
    pub fn lines(&self) -> Vec<String> {
        self.lock().iter().map(|(_, line)| line.clone()).collect()
    }

    /// 已写入的日志行及其级别
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.lock().clone()
    }

    /// 已写入的行数
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// flush 被调用的次数
    pub fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }

    /// 清空已保存的内容
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl LogAppender for MemoryAppender {
    fn append(&self, level: LogLevel, formatted_message: &str) -> Result<()> {
        self.lock().push((level, formatted_message.to_string()));
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
