mod log_errors;

pub use log_errors::*;
