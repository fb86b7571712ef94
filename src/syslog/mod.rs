//! Minimal syslog client speaking the BSD (RFC 3164 style) line format to a
//! local daemon socket or a remote collector.

mod priority;
mod writer;

pub use priority::*;
pub use writer::*;
