mod datetime;

pub use datetime::*;
