//! Criterion benchmarks for rust_logger_setup

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_logger_setup::prelude::*;
use std::sync::Arc;

fn discard_handler(level: LogLevel) -> Handler {
    Handler::new(
        level,
        Arc::new(JsonFormatter::default()),
        Box::new(ConsoleAppender::with_writer(std::io::sink())),
    )
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatter");
    group.throughput(Throughput::Elements(1));

    let formatter = JsonFormatter::default();
    let record = LogRecord::new(LogLevel::Info, "APP", "Test message");

    group.bench_function("format", |b| {
        b.iter(|| black_box(formatter.format(black_box(&record))));
    });

    group.bench_function("format_time", |b| {
        b.iter(|| black_box(formatter.format_time(black_box(&record))));
    });

    let escaped = LogRecord::new(LogLevel::Info, "APP", "quote \" slash \\ tab \t newline \n");
    group.bench_function("format_escaped", |b| {
        b.iter(|| black_box(formatter.format(black_box(&escaped))));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_sync_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_logging");
    group.throughput(Throughput::Elements(1));

    let mut logger = Logger::new("APP");
    logger.add_handler(discard_handler(LogLevel::Debug));

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("error", |b| {
        b.iter(|| logger.error(black_box("Error message")));
    });

    group.finish();
}

fn bench_async_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("async_logging");
    group.throughput(Throughput::Elements(1));

    let metrics = Arc::new(LoggerMetrics::new());
    let mut logger = Logger::with_metrics("APP", Arc::clone(&metrics));
    let (queue, mut listener) = rust_logger_setup::core::delivery_queue(None, metrics);
    listener.add_handler(discard_handler(LogLevel::Debug));
    logger.attach_queue(queue);
    listener.start().expect("listener starts");

    group.bench_function("enqueue_info", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.finish();
    listener.stop().expect("listener stops");
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let mut logger = Logger::new("APP");
    logger.add_handler(discard_handler(LogLevel::Warning));

    group.bench_function("below_handler_threshold", |b| {
        b.iter(|| logger.debug(black_box("This should be filtered")));
    });

    logger.set_level(LogLevel::Error);
    group.bench_function("below_logger_threshold", |b| {
        b.iter(|| logger.warning(black_box("Filtered before any handler")));
    });

    group.finish();
}

// ============================================================================
// Setup Benchmarks
// ============================================================================

fn bench_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("setup");

    let document = "logger:\n  logger_name: bench\n  console:\n    logger_console_handler_level: INFO\n  remote:\n    logger_remote_logging_url: http://localhost:8080/log\n";

    group.bench_function("parse_yaml", |b| {
        b.iter(|| black_box(LoggerConfig::from_yaml_str(black_box(document)).expect("valid")));
    });

    let config = LoggerConfig::from_yaml_str(document).expect("valid");
    group.bench_function("build_logger", |b| {
        b.iter(|| {
            let built = LoggingSetup::new(config.clone())
                .console_writer(std::io::sink())
                .init()
                .expect("setup");
            black_box(built)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_formatter,
    bench_sync_logging,
    bench_async_logging,
    bench_level_filtering,
    bench_setup
);

criterion_main!(benches);
