use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use super::style::PROGRESS_BAR_TEMPLATE;

/// Manages progress bars for downloads
pub struct ProgressManager {
    bars: MultiProgress,
}

impl ProgressManager {
    pub fn new() -> Self {
        let bars = MultiProgress::new();
        // NOTE: fix for flickering bar bug on windows (https://github.com/mitsuhiko/indicatif/issues/143)
        bars.set_move_cursor(cfg!(windows));

        Self { bars }
    }

    pub fn add_bar(&self) -> ProgressBar {
        let style = ProgressStyle::with_template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        let pb = ProgressBar::new(0).with_style(style.progress_chars("#>-"));

        self.bars.add(pb)
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}
