//! Progress display for batch overlay rendering

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SCAN_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Scans: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks rendered scans with a single bar
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bar yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Show a bar for `scan_count` scans
    pub fn initialize(&mut self, scan_count: usize) {
        let bar = ProgressBar::new(scan_count as u64);
        bar.set_style(SCAN_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Label the bar with the scan being rendered
    pub fn start_scan(&self, scan_id: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(scan_id.to_string());
        }
    }

    /// Advance the bar after a scan is written
    pub fn complete_scan(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Number of scans completed so far
    pub fn completed(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Close the bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All scans rendered");
        }
    }
}
