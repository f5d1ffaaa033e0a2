use flexi_logger::{
    colored_default_format, opt_format, Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError,
    Logger, LoggerHandle, Naming,
};
use std::path::Path;

/// Starts the global logger. `RUST_LOG` wins over `level`.
///
/// Without `log_dir` everything goes to stderr. With it, logs go to rotated files
/// (10 MB, last 3 kept) and warnings are still echoed to stderr.
/// Keep the returned handle alive until the program ends.
pub fn setup_logging(level: &str, log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?;

    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .duplicate_to_stderr(Duplicate::Warn),
        None => logger.format(colored_default_format),
    };

    logger.start()
}
