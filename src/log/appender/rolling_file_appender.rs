use crate::log::appender::LogAppender;
use crate::log::level::LogLevel;
use anyhow::{Context, Result};
use serde::Deserialize;
use smart_default::SmartDefault;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// RollingFileAppender 配置
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct RollingFileAppenderConfig {
    /// 日志文件路径
    #[default("app.log".to_string())]
    pub file_path: String,

    /// 单个文件最大大小（字节）
    #[default(10 * 1024 * 1024)]
    pub max_size: u64,

    /// 保留的最大文件数量（包含当前正在写入的文件）
    #[default(5)]
    pub max_files: usize,
}

/// 当前文件信息
struct CurrentFile {
    writer: BufWriter<File>,
    size: u64,
}

/// 按大小滚动的文件输出器
///
/// 当前文件始终为 `<path>`，滚动后依次为 `<path>.1`、`<path>.2` …
/// 最多保留到 `<path>.<max_files-1>`，更旧的文件被覆盖删除。
/// 不会自动创建父目录
pub struct RollingFileAppender {
    config: RollingFileAppenderConfig,
    path: PathBuf,
    current: Mutex<Option<CurrentFile>>,
}

impl RollingFileAppender {
    /// 打开（或创建）日志文件，父目录不存在或无权限时返回错误
    pub fn new(config: RollingFileAppenderConfig) -> Result<Self> {
        let path = PathBuf::from(&config.file_path);
        let current = open_file(&path, false)?;

        Ok(Self {
            config,
            path,
            current: Mutex::new(Some(current)),
        })
    }

    /// 获取日志文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, Option<CurrentFile>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 第 index 个历史文件的路径
    fn rotated_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    /// 执行切分：关闭当前文件，历史文件序号依次后移，重新打开空文件
    fn do_rollover(&self, current: &mut Option<CurrentFile>) -> Result<()> {
        if let Some(mut file) = current.take() {
            file.writer.flush()?;
        }

        if let Err(err) = self.shift_files() {
            // 历史文件无法移动时，当前文件以追加方式重新打开，已写入的记录不丢失
            *current = Some(open_file(&self.path, false)?);
            return Err(err);
        }

        *current = Some(open_file(&self.path, true)?);
        Ok(())
    }

    fn shift_files(&self) -> Result<()> {
        for index in (1..self.config.max_files).rev() {
            let src = if index == 1 {
                self.path.clone()
            } else {
                self.rotated_path(index - 1)
            };
            if !src.exists() {
                continue;
            }

            let dst = self.rotated_path(index);
            if dst.exists() {
                std::fs::remove_file(&dst)
                    .with_context(|| format!("failed to remove {}", dst.display()))?;
            }
            std::fs::rename(&src, &dst).with_context(|| {
                format!("failed to rename {} to {}", src.display(), dst.display())
            })?;
        }

        Ok(())
    }
}

/// 打开日志文件，`truncate` 为 false 时在原有内容后追加
fn open_file(path: &Path, truncate: bool) -> Result<CurrentFile> {
    let mut options = OpenOptions::new();
    options.create(true);
    if truncate {
        options.write(true).truncate(true);
    } else {
        options.append(true);
    }

    let file = options
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let size = file.metadata().map(|m| m.len()).unwrap_or(0);

    Ok(CurrentFile {
        writer: BufWriter::new(file),
        size,
    })
}

impl LogAppender for RollingFileAppender {
    fn append(&self, _level: LogLevel, formatted_message: &str) -> Result<()> {
        let message_size = formatted_message.len() as u64 + 1; // +1 for newline

        let mut current = self.lock();

        // 上一次切分失败后文件可能处于关闭状态
        if current.is_none() {
            *current = Some(open_file(&self.path, false)?);
        }

        let needs_rollover = current
            .as_ref()
            .is_some_and(|f| f.size > 0 && f.size + message_size > self.config.max_size);
        // 切分失败但文件已重新打开时，记录仍然写入，再把错误返回
        let rollover = if needs_rollover {
            self.do_rollover(&mut current)
        } else {
            Ok(())
        };

        if let Some(file) = current.as_mut() {
            file.writer.write_all(formatted_message.as_bytes())?;
            file.writer.write_all(b"\n")?;
            file.size += message_size;
        }

        rollover
    }

    fn flush(&self) -> Result<()> {
        if let Some(file) = self.lock().as_mut() {
            file.writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn appender_in(dir: &TempDir, max_size: u64, max_files: usize) -> RollingFileAppender {
        let config = RollingFileAppenderConfig {
            file_path: dir.path().join("test.log").to_string_lossy().to_string(),
            max_size,
            max_files,
        };
        RollingFileAppender::new(config).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = RollingFileAppenderConfig::default();
        assert_eq!(config.file_path, "app.log");
        assert_eq!(config.max_size, 10 * 1024 * 1024);
        assert_eq!(config.max_files, 5);
    }

    #[test]
    fn test_rolling_file_appender_create() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let appender = appender_in(&temp_dir, 100, 5);

        assert!(temp_dir.path().join("test.log").exists());
        assert_eq!(appender.path(), temp_dir.path().join("test.log"));

        Ok(())
    }

    #[test]
    fn test_rolling_file_appender_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config = RollingFileAppenderConfig {
            file_path: temp_dir
                .path()
                .join("no")
                .join("such")
                .join("dir.log")
                .to_string_lossy()
                .to_string(),
            ..Default::default()
        };

        assert!(RollingFileAppender::new(config).is_err());
        assert!(!temp_dir.path().join("no").exists());
    }

    #[test]
    fn test_rolling_file_appender_appends_to_existing() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let log_path = temp_dir.path().join("test.log");
        std::fs::write(&log_path, "previous\n")?;

        let appender = appender_in(&temp_dir, 1024, 3);
        appender.append(LogLevel::Info, "next")?;
        appender.flush()?;

        assert_eq!(std::fs::read_to_string(&log_path)?, "previous\nnext\n");

        Ok(())
    }

    #[test]
    fn test_rolling_file_appender_size_based() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let appender = appender_in(&temp_dir, 1024, 3);

        // 每行 64 字节，共 4 KiB
        let line = "x".repeat(63);
        for _ in 0..64 {
            appender.append(LogLevel::Info, &line)?;
        }
        appender.flush()?;

        let base = temp_dir.path().join("test.log");
        assert!(base.exists());
        assert!(temp_dir.path().join("test.log.1").exists());
        assert!(temp_dir.path().join("test.log.2").exists());
        assert!(!temp_dir.path().join("test.log.3").exists());

        let mut total = 0;
        for name in ["test.log", "test.log.1", "test.log.2"] {
            let len = std::fs::metadata(temp_dir.path().join(name))?.len();
            assert!(len <= 1024, "{} is {} bytes", name, len);
            total += len;
        }
        assert!(total <= 3 * 1024 + 64);

        Ok(())
    }

    #[test]
    fn test_rolling_file_appender_newest_keeps_base_name() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let appender = appender_in(&temp_dir, 10, 3);

        appender.append(LogLevel::Info, "first-line")?;
        appender.append(LogLevel::Info, "second-line")?;
        appender.append(LogLevel::Info, "third-line")?;
        appender.flush()?;

        let read = |name: &str| std::fs::read_to_string(temp_dir.path().join(name)).unwrap();
        assert_eq!(read("test.log"), "third-line\n");
        assert_eq!(read("test.log.1"), "second-line\n");
        assert_eq!(read("test.log.2"), "first-line\n");

        appender.append(LogLevel::Info, "fourth-line")?;
        appender.flush()?;
        assert_eq!(read("test.log"), "fourth-line\n");
        assert_eq!(read("test.log.2"), "second-line\n");
        assert!(!temp_dir.path().join("test.log.3").exists());

        Ok(())
    }

    #[test]
    fn test_rolling_file_appender_single_file_truncates() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let appender = appender_in(&temp_dir, 10, 1);

        appender.append(LogLevel::Info, "first-line")?;
        appender.append(LogLevel::Info, "second-line")?;
        appender.flush()?;

        let content = std::fs::read_to_string(temp_dir.path().join("test.log"))?;
        assert_eq!(content, "second-line\n");
        assert!(!temp_dir.path().join("test.log.1").exists());

        Ok(())
    }

    #[test]
    fn test_rolling_file_appender_blocked_rotation_keeps_records() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("a.log");
        let blocked = temp_dir.path().join("a.log.1");
        std::fs::create_dir(&blocked)?;
        std::fs::write(blocked.join("occupied"), "x")?;

        let appender = RollingFileAppender::new(RollingFileAppenderConfig {
            file_path: path.to_string_lossy().to_string(),
            max_size: 20,
            max_files: 2,
        })?;

        appender.append(LogLevel::Info, "precious-record-1")?;
        let err = appender.append(LogLevel::Info, "record-2").unwrap_err();
        assert!(format!("{:#}", err).contains("a.log.1"));

        // 每次写入都会再次尝试切分，仍然不能丢失记录
        assert!(appender.append(LogLevel::Info, "record-3").is_err());
        appender.flush()?;

        let content = std::fs::read_to_string(&path)?;
        assert_eq!(content, "precious-record-1\nrecord-2\nrecord-3\n");
        assert!(blocked.join("occupied").exists());
        Ok(())
    }

    #[test]
    fn test_rolling_file_appender_oversized_record() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let appender = appender_in(&temp_dir, 8, 2);

        let big = "y".repeat(32);
        appender.append(LogLevel::Warn, &big)?;
        appender.flush()?;

        // 空文件不切分，超大记录仍完整写入
        let content = std::fs::read_to_string(temp_dir.path().join("test.log"))?;
        assert_eq!(content, format!("{}\n", big));
        assert!(!temp_dir.path().join("test.log.1").exists());

        Ok(())
    }

    #[test]
    fn test_rolling_file_appender_concurrent_lines_intact() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let appender = Arc::new(appender_in(&temp_dir, 1024 * 1024, 2));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let appender = Arc::clone(&appender);
                std::thread::spawn(move || {
                    for i in 0..500 {
                        appender
                            .append(LogLevel::Info, &format!("thread-{}-{:04}-{}", t, i, "z".repeat(40)))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        appender.flush()?;

        let content = std::fs::read_to_string(appender.path())?;
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2000);
        assert!(lines.iter().all(|l| l.starts_with("thread-") && l.ends_with(&"z".repeat(40))));

        Ok(())
    }
}
