use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use snowlog::log::{
    self, LogAppender, LogLevel, LogRecord, Logger, RollingFileAppender, RollingFileAppenderConfig,
};
use snowlog::{log_info, log_info_if};
use std::sync::Arc;

/// 丢弃所有输出，只测量过滤、格式化和分发的开销
struct NullAppender;

impl LogAppender for NullAppender {
    fn append(&self, _level: LogLevel, formatted_message: &str) -> Result<()> {
        black_box(formatted_message);
        Ok(())
    }
}

fn null_logger(level: LogLevel) -> Logger {
    Logger::from_appenders(
        level,
        LogLevel::Fatal,
        vec![Arc::new(NullAppender) as Arc<dyn LogAppender>],
    )
}

fn benchmark_basic_logging(c: &mut Criterion) {
    let logger = null_logger(LogLevel::Info);
    let record = LogRecord::new(LogLevel::Info, "Simple log message".to_string())
        .with_location(file!(), line!());

    let mut group = c.benchmark_group("logger_basic");

    group.bench_function("enabled", |b| b.iter(|| logger.log(black_box(&record))));

    logger.set_level(LogLevel::Error);
    group.bench_function("filtered", |b| b.iter(|| logger.log(black_box(&record))));

    group.finish();
}

fn benchmark_different_message_sizes(c: &mut Criterion) {
    let logger = null_logger(LogLevel::Info);

    let mut group = c.benchmark_group("message_sizes");

    for size in [10, 100, 1000].iter() {
        let record = LogRecord::new(LogLevel::Info, "x".repeat(*size)).with_location(file!(), line!());
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &record, |b, record| {
            b.iter(|| logger.log(black_box(record)))
        });
    }

    group.finish();
}

fn benchmark_stream_macros(c: &mut Criterion) {
    log::install(null_logger(LogLevel::Info));

    let mut group = c.benchmark_group("stream_macros");

    group.bench_function("log_info", |b| {
        b.iter(|| log_info!() << "user " << black_box(42) << " logged in")
    });

    group.bench_function("log_info_if_false", |b| {
        b.iter(|| log_info_if!(black_box(false)) << "user " << black_box(42) << " logged in")
    });

    group.finish();
    log::shutdown();
}

fn benchmark_rolling_file(c: &mut Criterion) {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let appender = RollingFileAppender::new(RollingFileAppenderConfig {
        file_path: temp_dir.path().join("bench.log").to_string_lossy().to_string(),
        max_size: 1024 * 1024,
        max_files: 3,
    })
    .unwrap();
    let logger = Logger::from_appenders(
        LogLevel::Info,
        LogLevel::Fatal,
        vec![Arc::new(appender) as Arc<dyn LogAppender>],
    );
    let record = LogRecord::new(LogLevel::Info, "a".repeat(100)).with_location(file!(), line!());

    let mut group = c.benchmark_group("rolling_file");
    group.bench_function("append", |b| b.iter(|| logger.log(black_box(&record))));
    group.finish();

    logger.flush();
}

criterion_group!(
    benches,
    benchmark_basic_logging,
    benchmark_different_message_sizes,
    benchmark_stream_macros,
    benchmark_rolling_file
);
criterion_main!(benches);
