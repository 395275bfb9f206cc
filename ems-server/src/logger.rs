use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::info;

/// Initialize the process-wide fern logger.
///
/// Output goes to `log_file` when given, otherwise stdout. Colors apply
/// only to stdout output.
pub fn initialize(
    level: ems_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let sink = match log_file {
        Some(ref path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {e}", path.display()),
                })?;
            Dispatch::new().chain(file)
        }
        None => Dispatch::new().chain(std::io::stdout()),
    };

    let palette = (colored && log_file.is_none()).then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    Dispatch::new()
        .level(level.filter())
        .format(move |out, message, record| write_line(out, message, record, palette.as_ref()))
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(path) => info!("Logger initialized: level={level}, file={}", path.display()),
        None => info!("Logger initialized: level={level}, stdout"),
    }

    // Route tracing events from dependencies into log
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn write_line(
    out: FormatCallback<'_>,
    message: &std::fmt::Arguments<'_>,
    record: &log::Record<'_>,
    palette: Option<&ColoredLevelConfig>,
) {
    let timestamp = humantime::format_rfc3339_seconds(SystemTime::now());
    let origin_file = record.file().unwrap_or("unknown");
    let origin_line = record.line().unwrap_or(0);

    match palette {
        Some(palette) => out.finish(format_args!(
            "[{timestamp} - {}] {message} [{origin_file}:{origin_line}]",
            palette.color(record.level()),
        )),
        None => out.finish(format_args!(
            "[{timestamp} - {}] {message} [{origin_file}:{origin_line}]",
            record.level(),
        )),
    }
}
