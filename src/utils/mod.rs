pub mod file;
pub mod units;
