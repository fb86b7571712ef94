//! Level macros over the global logger.
//!
//! The plain forms take any number of `Display` operands and concatenate them
//! without separators; the `f` forms take a format string, as `format!` does.
//!
//! ```
//! sevlog::warning!("disk", " low");
//! sevlog::errorf!("code={}", 42);
//! ```

#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {
        $crate::logger::debug(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::logger::debugf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {
        $crate::logger::info(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::logger::infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warning {
    ($($arg:expr),* $(,)?) => {
        $crate::logger::warning(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! warningf {
    ($($arg:tt)+) => {
        $crate::logger::warningf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {
        $crate::logger::error(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::logger::errorf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! critical {
    ($($arg:expr),* $(,)?) => {
        $crate::logger::critical(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! criticalf {
    ($($arg:tt)+) => {
        $crate::logger::criticalf(::std::format_args!($($arg)+))
    };
}

/// Logs at fatal level, then exits the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($($arg:expr),* $(,)?) => {
        $crate::logger::fatal(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Formatted fatal log, then exits the process with status 1.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::logger::fatalf(::std::format_args!($($arg)+))
    };
}
