//! Leveled logging facade with a process-wide threshold, writing either to a
//! local stream or to syslog.

pub mod errors;
pub mod logger;
pub mod macros;
pub mod syslog;
pub mod utils;
