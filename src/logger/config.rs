use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{stderr_logger, Logger, Severity};
use crate::errors::Result;
use crate::syslog::{Facility, SyslogWriter};

/// Startup configuration, typically read from a JSON file and then
/// overridden from the command line.
///
/// ```json
/// { "loglevel": 2, "syslog": { "network": "udp", "address": "127.0.0.1:514", "facility": "local0" } }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level (0 = DEBUG, 5 = FATAL).
    pub loglevel: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog: Option<SyslogConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SyslogConfig {
    /// `unix`, `unixgram`, `udp` or `tcp`; empty for the local daemon.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub network: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address: String,
    pub facility: Facility,
    pub tag: String,
}

impl Default for SyslogConfig {
    fn default() -> Self {
        SyslogConfig {
            network: String::new(),
            address: String::new(),
            facility: Facility::default(),
            tag: default_tag(),
        }
    }
}

impl SyslogConfig {
    pub fn connect(&self) -> Result<SyslogWriter> {
        if self.network.is_empty() {
            SyslogWriter::local(self.facility, &self.tag)
        } else {
            SyslogWriter::dial(&self.network, &self.address, self.facility, &self.tag)
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Builds a logger writing locally to stderr.
    pub fn build(&self) -> Result<Logger> {
        self.build_with(stderr_logger())
    }

    pub fn build_with(&self, local: slog::Logger) -> Result<Logger> {
        let mut logger = Logger::new(local).with_threshold(self.loglevel);
        if let Some(syslog) = &self.syslog {
            logger = logger.with_remote(syslog.connect()?);
        }
        Ok(logger)
    }
}

/// Program name, used as the syslog tag when none is configured.
fn default_tag() -> String {
    let arg0 = std::env::args_os().next();
    arg0.as_deref()
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}
