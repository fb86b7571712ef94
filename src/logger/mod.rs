//! Process-wide leveled logging.
//!
//! Messages below the current [`Threshold`] are dropped; the rest go to a
//! remote system log if one is configured, otherwise to the local stream as
//! `[LABEL] message` lines. Configure the global logger once with [`init`]
//! before spawning threads; until then the free functions log to stderr at
//! `Info`.

use std::fmt;
use std::sync::OnceLock;

mod bridge;
mod config;
mod console;
mod level;
mod logger;
mod policy;
mod remote;

pub use bridge::*;
pub use config::*;
pub use console::{console_logger, stderr_logger, ConsoleDrain};
pub use level::*;
pub use logger::*;
pub use policy::*;
pub use remote::{send, RemoteSink};

use crate::errors::{LogError, Result};

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs `logger` as the process-wide logger. Only the first call succeeds.
pub fn init(logger: Logger) -> Result<&'static Logger> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| LogError::AlreadyInitialized)?;
    Ok(global())
}

pub fn global() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::stderr)
}

pub fn threshold() -> Severity {
    global().threshold()
}

pub fn set_threshold(level: Severity) {
    global().set_threshold(level);
}

pub fn debug(args: &[&dyn fmt::Display]) {
    global().debug(args);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    global().debugf(args);
}

pub fn info(args: &[&dyn fmt::Display]) {
    global().info(args);
}

pub fn infof(args: fmt::Arguments<'_>) {
    global().infof(args);
}

pub fn warning(args: &[&dyn fmt::Display]) {
    global().warning(args);
}

pub fn warningf(args: fmt::Arguments<'_>) {
    global().warningf(args);
}

pub fn error(args: &[&dyn fmt::Display]) {
    global().error(args);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    global().errorf(args);
}

pub fn critical(args: &[&dyn fmt::Display]) {
    global().critical(args);
}

pub fn criticalf(args: fmt::Arguments<'_>) {
    global().criticalf(args);
}

pub fn fatal(args: &[&dyn fmt::Display]) -> ! {
    global().fatal(args)
}

pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    global().fatalf(args)
}
