use std::io;

use slog::{Drain, OwnedKVList, Record};
use slog_term::Decorator;

use crate::utils::{self, DateTimeFormatExt};

/// Local text stream drain.
///
/// Writes `2006/01/02 15:04:05 [LABEL] message` per record, taking the label
/// from the record tag. Records with an empty tag are written without the
/// bracketed label.
pub struct ConsoleDrain<D> {
    decorator: D,
}

impl<D: Decorator> ConsoleDrain<D> {
    pub fn new(decorator: D) -> Self {
        ConsoleDrain { decorator }
    }
}

impl<D: Decorator> Drain for ConsoleDrain<D> {
    type Ok = ();
    type Err = io::Error;

    fn log(&self, record: &Record, values: &OwnedKVList) -> io::Result<()> {
        self.decorator.with_record(record, values, |decorator| {
            decorator.start_timestamp()?;
            write!(decorator, "{}", utils::now().log_stamp())?;
            decorator.start_whitespace()?;
            write!(decorator, " ")?;

            let tag = record.tag();
            if !tag.is_empty() {
                decorator.start_level()?;
                write!(decorator, "[{}]", tag)?;
                decorator.start_whitespace()?;
                write!(decorator, " ")?;
            }

            decorator.start_msg()?;
            write!(decorator, "{}", record.msg())?;

            decorator.start_whitespace()?;
            writeln!(decorator)?;
            decorator.flush()?;
            Ok(())
        })
    }
}

/// Builds a synchronous local-stream logger over `writer`.
///
/// Write failures on the stream are dropped.
pub fn console_logger<W>(writer: W) -> slog::Logger
where
    W: io::Write + Send + 'static,
{
    let decorator = slog_term::PlainSyncDecorator::new(writer);
    let drain = ConsoleDrain::new(decorator).ignore_res();
    slog::Logger::root(drain, slog::o!())
}

pub fn stderr_logger() -> slog::Logger {
    console_logger(io::stderr())
}
