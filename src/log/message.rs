use crate::log::formatter::{GlogFormatter, LogFormatter};
use crate::log::global;
use crate::log::level::LogLevel;
use crate::log::log_record::LogRecord;
use std::fmt::{self, Display, Write};
use std::ops::Shl;

/// 换行操纵符，向消息追加 `\n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endl;

impl Display for Endl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')
    }
}

/// 刷新操纵符，对消息内容没有影响
///
/// 记录仍然在消息析构时才输出
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flush;

impl Display for Flush {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

/// 流式日志消息
///
/// 由 `log_info!` 等宏在调用点创建，通过 `<<` 或 `append` 逐段拼接内容，
/// 在离开作用域时输出恰好一条记录。内容为空时不输出；级别为 Fatal 时输出后终止进程
///
/// ```no_run
/// use snowlog::{log_info, log_err};
///
/// log_info!() << "hello " << 42;
/// log_err!("connect to {} failed", "10.0.0.1");
/// ```
pub struct LogMessage {
    level: LogLevel,
    file: &'static str,
    line: u32,
    buffer: String,
    enabled: bool,
}

impl LogMessage {
    /// 创建绑定到调用点的消息
    pub fn new(level: LogLevel, file: &'static str, line: u32) -> Self {
        Self {
            level,
            file,
            line,
            buffer: String::new(),
            enabled: true,
        }
    }

    /// 创建一个被禁用的消息：忽略所有追加内容，析构时什么也不做
    pub fn disabled(level: LogLevel, file: &'static str, line: u32) -> Self {
        Self {
            level,
            file,
            line,
            buffer: String::new(),
            enabled: false,
        }
    }

    /// 追加任意可显示的值，不插入分隔符
    pub fn append<T: Display>(&mut self, value: T) -> &mut Self {
        if self.enabled {
            let _ = write!(self.buffer, "{}", value);
        }
        self
    }

    /// 追加格式化参数
    pub fn with_args(mut self, args: fmt::Arguments<'_>) -> Self {
        if self.enabled {
            let _ = self.buffer.write_fmt(args);
        }
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 已拼接的内容
    pub fn message(&self) -> &str {
        &self.buffer
    }

    fn emit(&mut self) {
        if !self.enabled {
            return;
        }

        if !self.buffer.is_empty() {
            let record = LogRecord::new(self.level, std::mem::take(&mut self.buffer))
                .with_location(self.file, self.line);
            let delivered = global::dispatch(&record);

            if !delivered && self.level == LogLevel::Fatal {
                // 没有可用的 Logger 时，致命记录直接写到标准错误
                if let Ok(line) = GlogFormatter::new().format(&record) {
                    eprintln!("{}", line);
                }
            }
        }

        if self.level == LogLevel::Fatal {
            global::flush();
            std::process::abort();
        }
    }
}

impl<T: Display> Shl<T> for LogMessage {
    type Output = LogMessage;

    fn shl(mut self, value: T) -> LogMessage {
        self.append(value);
        self
    }
}

impl Write for LogMessage {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.enabled {
            self.buffer.push_str(s);
        }
        Ok(())
    }
}

impl Drop for LogMessage {
    fn drop(&mut self) {
        self.emit();
    }
}
