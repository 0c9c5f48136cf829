//! Logging initialization
//!
//! Console output always, JSON or human-readable; optional rotating file
//! output on top. `RUST_LOG` overrides the configured level entirely.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Keeps the non-blocking file writer alive. Dropping it flushes buffered
/// output and stops the background writer thread, so it must live until
/// shutdown.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install the global subscriber described by `LoggingConfig`.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Keep database driver chatter below the configured level.
        EnvFilter::new(format!(
            "coursefinder={},tower_http=debug,sqlx=warn",
            config.level
        ))
    });

    let (file_writer, file_guard) = if config.file_enabled {
        let (writer, guard) = file_writer(config)?;
        (Some(writer), Some(guard))
    } else {
        (None, None)
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json {
        let console = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false);
        let file = file_writer.map(|writer| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(writer)
        });
        registry.with(console).with(file).init();
    } else {
        let console = fmt::layer().with_target(true);
        let file = file_writer.map(|writer| {
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
        });
        registry.with(console).with(file).init();
    }

    tracing::info!(
        level = %config.level,
        json = config.json,
        file_enabled = config.file_enabled,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Non-blocking rotating file writer under `logging.file_directory`.
fn file_writer(
    config: &LoggingConfig,
) -> anyhow::Result<(
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
)> {
    std::fs::create_dir_all(&config.file_directory)?;

    let appender = match config.file_rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(&config.file_directory, &config.file_prefix),
        "minutely" => {
            tracing_appender::rolling::minutely(&config.file_directory, &config.file_prefix)
        }
        "never" => tracing_appender::rolling::never(
            &config.file_directory,
            format!("{}.log", config.file_prefix),
        ),
        // "daily" is the default and the validated fallback.
        _ => tracing_appender::rolling::daily(&config.file_directory, &config.file_prefix),
    };

    Ok(tracing_appender::non_blocking(appender))
}
