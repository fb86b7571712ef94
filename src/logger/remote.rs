use std::io;
use std::sync::Arc;

use super::Severity;

/// Handle to a system logging service, one send method per severity class.
///
/// Each method may fail; the dispatcher reports failures on the local stream
/// and never retries.
pub trait RemoteSink: Send + Sync {
    fn debug(&self, msg: &str) -> io::Result<()>;
    fn info(&self, msg: &str) -> io::Result<()>;
    fn warning(&self, msg: &str) -> io::Result<()>;
    fn err(&self, msg: &str) -> io::Result<()>;
    fn crit(&self, msg: &str) -> io::Result<()>;
    fn emerg(&self, msg: &str) -> io::Result<()>;
}

impl<T: RemoteSink + ?Sized> RemoteSink for Arc<T> {
    fn debug(&self, msg: &str) -> io::Result<()> {
        (**self).debug(msg)
    }

    fn info(&self, msg: &str) -> io::Result<()> {
        (**self).info(msg)
    }

    fn warning(&self, msg: &str) -> io::Result<()> {
        (**self).warning(msg)
    }

    fn err(&self, msg: &str) -> io::Result<()> {
        (**self).err(msg)
    }

    fn crit(&self, msg: &str) -> io::Result<()> {
        (**self).crit(msg)
    }

    fn emerg(&self, msg: &str) -> io::Result<()> {
        (**self).emerg(msg)
    }
}

impl<T: RemoteSink + ?Sized> RemoteSink for Box<T> {
    fn debug(&self, msg: &str) -> io::Result<()> {
        (**self).debug(msg)
    }

    fn info(&self, msg: &str) -> io::Result<()> {
        (**self).info(msg)
    }

    fn warning(&self, msg: &str) -> io::Result<()> {
        (**self).warning(msg)
    }

    fn err(&self, msg: &str) -> io::Result<()> {
        (**self).err(msg)
    }

    fn crit(&self, msg: &str) -> io::Result<()> {
        (**self).crit(msg)
    }

    fn emerg(&self, msg: &str) -> io::Result<()> {
        (**self).emerg(msg)
    }
}

/// Sends `msg` through the sink method matching `level`.
pub fn send(sink: &dyn RemoteSink, level: Severity, msg: &str) -> io::Result<()> {
    match level {
        Severity::Debug => sink.debug(msg),
        Severity::Info => sink.info(msg),
        Severity::Warning => sink.warning(msg),
        Severity::Error => sink.err(msg),
        Severity::Critical => sink.crit(msg),
        Severity::Fatal => sink.emerg(msg),
    }
}
