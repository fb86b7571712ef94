use std::fmt::{self, Write};
use std::process;

use super::{remote, stderr_logger, RemoteSink, Severity, Threshold};

/// Level-gated dispatcher writing to exactly one sink.
///
/// With a remote sink configured every accepted message goes there; otherwise
/// it is written to the local stream prefixed with its level label. The sink
/// is fixed at construction, only the threshold may change while the logger
/// is shared.
///
/// # Examples
///
/// ```
/// use sevlog::logger::{Logger, Severity};
///
/// let logger = Logger::stderr().with_threshold(Severity::Warning);
/// logger.info(&[&"not shown"]);
/// logger.warningf(format_args!("disk {}% full", 93));
/// ```
pub struct Logger {
    threshold: Threshold,
    remote: Option<Box<dyn RemoteSink>>,
    local: slog::Logger,
}

impl Logger {
    pub fn new(local: slog::Logger) -> Self {
        Logger {
            threshold: Threshold::default(),
            remote: None,
            local,
        }
    }

    /// Local-only logger writing to stderr at `Info`.
    pub fn stderr() -> Self {
        Logger::new(stderr_logger())
    }

    pub fn with_threshold(self, level: Severity) -> Self {
        self.threshold.set(level);
        self
    }

    /// Routes every emitted message to `remote` instead of the local stream.
    pub fn with_remote<R: RemoteSink + 'static>(mut self, remote: R) -> Self {
        self.remote = Some(Box::new(remote));
        self
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn threshold(&self) -> Severity {
        self.threshold.get()
    }

    pub fn set_threshold(&self, level: Severity) {
        self.threshold.set(level);
    }

    #[inline]
    pub fn enabled(&self, level: Severity) -> bool {
        self.threshold.should_emit(level)
    }

    /// Emits an already rendered message at `level`.
    ///
    /// Like every entry point taking a level, a `Fatal` message exits the
    /// process with status 1 once it is written.
    pub fn emit(&self, level: Severity, text: &str) {
        if self.enabled(level) {
            self.dispatch(level, text);
        }
    }

    /// Emits the operands concatenated with no separator.
    pub fn print(&self, level: Severity, args: &[&dyn fmt::Display]) {
        if self.enabled(level) {
            self.dispatch(level, &concat(args));
        }
    }

    pub fn printf(&self, level: Severity, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.dispatch(level, &fmt::format(args));
        }
    }

    fn dispatch(&self, level: Severity, text: &str) {
        self.write(level, text);
        if level == Severity::Fatal {
            process::exit(1);
        }
    }

    fn write(&self, level: Severity, text: &str) {
        match &self.remote {
            Some(remote) => {
                if let Err(err) = remote::send(remote.as_ref(), level, text) {
                    slog::log!(
                        self.local,
                        slog::Level::Error,
                        "",
                        "Unable to write syslog: {} for msg: {}",
                        err,
                        text
                    );
                }
            }
            None => self.write_local(level, text),
        }
    }

    // Record level and tag must be constants.
    fn write_local(&self, level: Severity, text: &str) {
        match level {
            Severity::Debug => slog::log!(self.local, slog::Level::Debug, "DEBUG", "{}", text),
            Severity::Info => slog::log!(self.local, slog::Level::Info, "INFO", "{}", text),
            Severity::Warning => {
                slog::log!(self.local, slog::Level::Warning, "WARNING", "{}", text)
            }
            Severity::Error => slog::log!(self.local, slog::Level::Error, "ERROR", "{}", text),
            Severity::Critical => {
                slog::log!(self.local, slog::Level::Critical, "CRITICAL", "{}", text)
            }
            Severity::Fatal => slog::log!(self.local, slog::Level::Critical, "FATAL", "{}", text),
        }
    }

    pub fn debug(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Debug, args);
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.printf(Severity::Debug, args);
    }

    pub fn info(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Info, args);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.printf(Severity::Info, args);
    }

    pub fn warning(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Warning, args);
    }

    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.printf(Severity::Warning, args);
    }

    pub fn error(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Error, args);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.printf(Severity::Error, args);
    }

    pub fn critical(&self, args: &[&dyn fmt::Display]) {
        self.print(Severity::Critical, args);
    }

    pub fn criticalf(&self, args: fmt::Arguments<'_>) {
        self.printf(Severity::Critical, args);
    }

    /// Logs at `Fatal`, then exits the process with status 1.
    ///
    /// No destructors or exit hooks run after the message is written.
    pub fn fatal(&self, args: &[&dyn fmt::Display]) -> ! {
        self.dispatch(Severity::Fatal, &concat(args));
        process::exit(1)
    }

    /// Formatted variant of [`Logger::fatal`]; also exits with status 1.
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.dispatch(Severity::Fatal, &fmt::format(args));
        process::exit(1)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold())
            .field("remote", &self.has_remote())
            .finish()
    }
}

/// Renders each operand with its `Display` impl, operands adjacent.
pub fn concat(args: &[&dyn fmt::Display]) -> String {
    let mut text = String::new();
    for arg in args {
        // Writing into a String cannot fail.
        let _ = write!(text, "{}", arg);
    }
    text
}
