use super::{global, Logger, Severity};
use crate::errors::Result;

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        Logger::enabled(self, Severity::from(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        self.printf(Severity::from(record.level()), *record.args());
    }

    fn flush(&self) {}
}

/// Routes records from the `log` facade through the global logger.
///
/// `log` has no fatal level, so bridged records never exit the process.
pub fn install_log_bridge() -> Result<()> {
    log::set_logger(global())?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
