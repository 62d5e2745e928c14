//! Progress display for the anchor search

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SEARCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} anchors {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Reports which anchor the assembler is trying and which stage is running
///
/// A hidden progress bar is used when output is suppressed, so callers never
/// need to branch on verbosity.
pub struct SearchProgress {
    bar: ProgressBar,
}

impl SearchProgress {
    /// Create a progress display over `anchor_count` anchors
    pub fn new(anchor_count: usize, visible: bool) -> Self {
        let bar = if visible {
            ProgressBar::new(anchor_count as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(anchor_count as u64);
        bar.set_style(SEARCH_STYLE.clone());
        bar.set_prefix("assembling");
        Self { bar }
    }

    /// Show the name of the current stage
    pub fn set_stage(&self, stage: &'static str) {
        self.bar.set_prefix(stage);
    }

    /// Record that `anchor` was tried without producing an assembly
    pub fn tried(&self, anchor: usize) {
        self.bar.set_position(anchor as u64 + 1);
    }

    /// Record the anchor that produced a complete assembly
    pub fn found(&self, anchor: usize) {
        self.bar.set_position(anchor as u64 + 1);
        self.bar.set_message(format!("(solved from anchor {anchor})"));
    }

    /// Anchors tried so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
