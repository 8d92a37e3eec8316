//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for token tagging
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar over input lines
    pub fn init_lines(&mut self, total_lines: u64) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total_lines);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} lines {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("##-"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Advance by a number of tagged lines
    pub fn lines_completed(&self, count: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(count);
        }
    }

    /// Report the segment currently being tagged
    pub fn segment_started(&self, segment: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("segment {segment}"));
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}
