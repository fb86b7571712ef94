use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::errors::{LogError, Result};

/// Syslog facility, the upper bits of a message priority.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Facility {
    Kern = 0,
    User = 1,
    Mail = 2,
    Daemon = 3,
    Auth = 4,
    Syslog = 5,
    Lpr = 6,
    News = 7,
    Uucp = 8,
    Cron = 9,
    Authpriv = 10,
    Ftp = 11,
    Local0 = 16,
    Local1 = 17,
    Local2 = 18,
    Local3 = 19,
    Local4 = 20,
    Local5 = 21,
    Local6 = 22,
    Local7 = 23,
}

impl Facility {
    /// Case-insensitive lookup by facility name (`daemon`, `local3`, ...).
    pub fn from_name(name: &str) -> Result<Facility> {
        name.trim()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| LogError::InvalidFacility(name.to_owned()))
    }

    pub fn code(self) -> u8 {
        (self as u8) << 3
    }
}

impl Default for Facility {
    fn default() -> Self {
        Facility::User
    }
}

/// Syslog severity, the lower three bits of a message priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Priority {
    Emerg = 0,
    Alert = 1,
    Crit = 2,
    Err = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

impl Priority {
    /// Full `<PRI>` value for a message sent under `facility`.
    pub fn value(self, facility: Facility) -> u8 {
        facility.code() | self as u8
    }
}
