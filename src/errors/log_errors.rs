use thiserror::Error;

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LogError {
    // Level given as neither a rank in 0..=5 nor a known level name.
    #[error("Invalid log level '{0}' (0 = DEBUG, 5 = FATAL)")]
    InvalidLevel(String),

    #[error("Invalid syslog facility '{0}'")]
    InvalidFacility(String),

    #[error("Unsupported syslog network '{0}'")]
    UnsupportedNetwork(String),

    // No local syslog daemon answered on any of the well-known sockets.
    #[error("Unix syslog delivery error")]
    NoLocalSyslog,

    #[error("Logger already initialized")]
    AlreadyInitialized,

    #[error("Unable to install log bridge: {0}")]
    Bridge(#[from] log::SetLoggerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
