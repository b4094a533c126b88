// 📝 Logging - rotating file log under the data directory

use anyhow::Context;
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};

use crate::config::{self, AppConfig};

/// Start the file logger. The returned handle must be kept alive for the
/// lifetime of the program or buffered lines are lost.
pub fn init_logging(app: &AppConfig) -> anyhow::Result<LoggerHandle> {
    let log_dir = app.paths.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed creating log dir {}", log_dir.display()))?;

    // Console output belongs to the menu, so only warnings reach stderr.
    let handle = Logger::try_with_str(&app.log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename(config::logging::LOG_FILE_NAME),
        )
        .rotate(
            Criterion::Size(config::logging::LOG_ROTATE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config::logging::LOG_ROTATE_KEEP_FILES),
        )
        .duplicate_to_stderr(Duplicate::Warn)
        .format(flexi_logger::detailed_format)
        .start()
        .context("failed to start logger")?;

    log::info!("{}", "=".repeat(60));
    log::info!("Smart Travel Assistant starting");
    log::info!("Version: {}", crate::VERSION);
    log::info!("Data dir: {}", app.paths.data_dir.display());
    log::info!("{}", "=".repeat(60));

    Ok(handle)
}
