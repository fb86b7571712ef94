use std::str::FromStr;

use serde_repr::{Deserialize_repr, Serialize_repr};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::errors::LogError;

/// Logging levels in increasing order of seriousness.
///
/// The numeric rank (`0 = DEBUG` .. `5 = FATAL`) is the canonical form, both on
/// the command line and in config files.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    IntoStaticStr,
    EnumIter,
    Serialize_repr,
    Deserialize_repr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
    Fatal = 5,
}

impl Severity {
    pub fn from_usize(n: usize) -> Option<Severity> {
        match n {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Info),
            2 => Some(Severity::Warning),
            3 => Some(Severity::Error),
            4 => Some(Severity::Critical),
            5 => Some(Severity::Fatal),
            _ => None,
        }
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// Tag written in front of messages on the local stream.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return Severity::from_usize(n).ok_or_else(|| LogError::InvalidLevel(s.to_owned()));
        }
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" | "err" => Ok(Severity::Error),
            "critical" | "crit" => Ok(Severity::Critical),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(LogError::InvalidLevel(s.to_owned())),
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Severity::Debug,
            log::Level::Info => Severity::Info,
            log::Level::Warn => Severity::Warning,
            log::Level::Error => Severity::Error,
        }
    }
}
