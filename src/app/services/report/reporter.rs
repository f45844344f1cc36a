//! Plain-text report rendering
//!
//! Writes, for one imported file, the station and failure totals followed by one
//! line of statistics per measure type in configuration order.

use colored::Colorize;
use std::io::Write;

use super::stats_computer::{StatsComputer, TypeSummary};
use crate::constants::NO_DATA_PLACEHOLDER;
use crate::{Error, Result};

/// Report writer over a [`StatsComputer`]
#[derive(Debug, Clone, Copy)]
pub struct Reporter<'a> {
    stats: StatsComputer<'a>,
    show_failures: bool,
    colored: bool,
}

impl<'a> Reporter<'a> {
    pub fn new(stats: StatsComputer<'a>) -> Self {
        Self {
            stats,
            show_failures: false,
            colored: false,
        }
    }

    /// List each failed measurement with its reason after the statistics
    pub fn with_failures(mut self, show_failures: bool) -> Self {
        self.show_failures = show_failures;
        self
    }

    /// Highlight headings with terminal colors
    pub fn with_colors(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Write the report for `file_name` to `out`
    pub fn write_report<W: Write>(&self, file_name: &str, out: &mut W) -> Result<()> {
        self.write_sections(file_name, out)
            .map_err(|e| Error::io(format!("Failed to write report for {}", file_name), e))
    }

    /// Render the report for `file_name` into a string
    pub fn render(&self, file_name: &str) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_report(file_name, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn write_sections<W: Write>(&self, file_name: &str, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "{}",
            self.heading(&format!("Report for file [{}]", file_name))
        )?;
        writeln!(
            out,
            "  Number of weather stations: {}",
            self.stats.station_count()
        )?;
        writeln!(
            out,
            "  Number of sensors in error: {}",
            self.stats.failure_count()
        )?;

        for measure_type in self.stats.measure_types() {
            let summary = self
                .stats
                .summary(measure_type.code())
                .map_err(std::io::Error::other)?;
            writeln!(
                out,
                "  {} ({}): {}",
                measure_type.name(),
                measure_type.code(),
                format_summary(&summary)
            )?;
        }

        if self.show_failures && self.stats.failure_count() > 0 {
            writeln!(out, "{}", self.heading("Failed measures"))?;
            for station in self.stats.stations() {
                for failed in station.failed_measurements() {
                    writeln!(
                        out,
                        "  [{}] {} => {}",
                        station.name(),
                        failed.raw(),
                        failed.reason()
                    )?;
                }
            }
        }

        Ok(())
    }

    fn heading(&self, text: &str) -> String {
        if self.colored {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

fn format_summary(summary: &TypeSummary) -> String {
    format!(
        "count={}, min={}, max={}, mean={}",
        summary.count,
        format_optional(summary.min),
        format_optional(summary.max),
        if summary.has_data() {
            format!("{:.2}", summary.mean)
        } else {
            NO_DATA_PLACEHOLDER.to_string()
        }
    )
}

fn format_optional(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| NO_DATA_PLACEHOLDER.to_string())
}
