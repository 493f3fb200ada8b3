//! File input and output for annual runs.
//!
//! - [`load_file`]: reads a year of hourly building loads, one value per line.
//! - [`report`]: writes the side-by-side scenario comparison as CSV.

pub mod load_file;
pub mod report;
