//! Shared CLI output helpers for ribos binaries.

use std::time::{Duration, Instant};

use colored::Colorize;

pub fn banner(subtitle: &str) {
    eprintln!();
    eprintln!("{} {}", "ribos".bold().cyan(), subtitle.dimmed());
    eprintln!();
}

pub fn section(title: &str) {
    let bar = "─".repeat(50);
    eprintln!("{} {}", title.bold().blue(), bar.dimmed());
}

pub fn kv(key: &str, value: &str) {
    eprintln!("  {:<20} {}", key.dimmed(), value);
}

pub fn success(msg: &str) {
    eprintln!("  {} {}", "✓".green().bold(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("  {} {}", "⚠".yellow(), msg.yellow());
}

pub fn failure(msg: &str) {
    eprintln!("  {} {}", "✗".red().bold(), msg.red());
}

/// Per-run record tallies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunCounts {
    pub records: usize,
    pub valid: usize,
    pub fixed: usize,
    pub invalid: usize,
}

pub fn print_summary(start: Instant, counts: &RunCounts) {
    eprintln!();
    eprintln!(
        "{}  {}\n{}  {}\n{}  {}",
        "Records".dimmed(),
        counts.records.to_string().bold(),
        "Valid / fixed".dimmed(),
        format!("{} / {}", counts.valid, counts.fixed).bold(),
        "Time".dimmed(),
        format_elapsed(start.elapsed()).bold(),
    );
    if counts.invalid > 0 {
        eprintln!("{}  {}", "With errors".dimmed(), counts.invalid.to_string().red().bold());
    }
    eprintln!();
}

/// `HH:MM:SS.t`
#[must_use]
pub fn format_elapsed(d: Duration) -> String {
    let total_secs = d.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let tenths = d.subsec_millis() / 100;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{tenths}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_elapsed_basic() {
        assert_eq!(format_elapsed(Duration::from_millis(250)), "00:00:00.2");
        assert_eq!(format_elapsed(Duration::from_secs(61)), "00:01:01.0");
        assert_eq!(format_elapsed(Duration::from_secs(7322)), "02:02:02.0");
    }
}
