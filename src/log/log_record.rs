use crate::log::level::LogLevel;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::SystemTime;

thread_local! {
    // 同一线程在进程生命周期内取值不变，只计算一次
    static THREAD_HASH: u64 = {
        let mut hasher = DefaultHasher::new();
        std::thread::current().id().hash(&mut hasher);
        hasher.finish()
    };
}

/// 当前线程的标识哈希
pub fn current_thread_hash() -> u64 {
    THREAD_HASH.with(|hash| *hash)
}

/// 日志记录
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// 日志级别
    pub level: LogLevel,
    /// 日志消息
    pub message: String,
    /// 源文件路径（调用点的完整路径）
    pub file: String,
    /// 行号
    pub line: u32,
    /// 时间戳
    pub timestamp: SystemTime,
    /// 线程标识哈希
    pub thread_id: u64,
}

impl LogRecord {
    /// 创建新的日志记录，时间戳与线程标识取自当前调用
    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message,
            file: String::new(),
            line: 0,
            timestamp: SystemTime::now(),
            thread_id: current_thread_hash(),
        }
    }

    /// 设置位置信息（文件和行号）
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }

    /// 覆盖时间戳
    pub fn with_timestamp(mut self, timestamp: SystemTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// 文件名（去掉最后一个 `/` 或 `\` 之前的部分）
    pub fn basename(&self) -> &str {
        basename(&self.file)
    }
}

/// 提取路径中的文件名部分
pub fn basename(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(path)
}
