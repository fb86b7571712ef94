use chrono::{Local, SecondsFormat};

pub type DateTime = chrono::DateTime<Local>;

pub fn now() -> DateTime {
    Local::now()
}

pub trait DateTimeFormatExt {
    /// `2006/01/02 15:04:05`, the prefix of every local-stream line.
    fn log_stamp(&self) -> String;
    /// `Jan  2 15:04:05`, as expected by a local syslog daemon.
    fn syslog_stamp(&self) -> String;
    fn rfc3339(&self) -> String;
}

impl DateTimeFormatExt for DateTime {
    fn log_stamp(&self) -> String {
        self.format("%Y/%m/%d %H:%M:%S").to_string()
    }

    fn syslog_stamp(&self) -> String {
        self.format("%b %e %H:%M:%S").to_string()
    }

    fn rfc3339(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}
