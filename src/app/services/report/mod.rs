//! Statistics and reporting over imported weather stations
//!
//! - [`stats_computer`] - Station/failure totals and per-type count, min, max, mean
//! - [`reporter`] - Plain-text report rendering

pub mod reporter;
pub mod stats_computer;

#[cfg(test)]
mod tests;

pub use reporter::Reporter;
pub use stats_computer::{StatsComputer, TypeSummary};
