//! Progress display while loading content
//!
//! All progress reporting goes through the ProgressReporter trait, so a build
//! can show a progress bar while `--stdout` builds and tests stay silent.

use indicatif::{ProgressBar, ProgressStyle};

/// Longest path shown next to the progress bar
const MAX_MESSAGE_CHARS: usize = 50;

/// Progress reporter for a run over content files
pub trait ProgressReporter {
    /// Begin a run over `total` files
    fn start(&mut self, total: u64);

    /// Mark `path` as being fetched
    fn advance(&mut self, path: &str);

    /// The run is complete
    fn finish(&mut self);
}

/// Progress bar over collection entries
pub struct ProgressDisplay {
    pb: ProgressBar,
}

impl ProgressDisplay {
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} entries {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  ");

        let pb = ProgressBar::new(0);
        pb.set_style(style);
        Self { pb }
    }
}

impl Default for ProgressDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ProgressDisplay {
    fn start(&mut self, total: u64) {
        self.pb.set_length(total);
        self.pb.set_position(0);
    }

    fn advance(&mut self, path: &str) {
        self.pb.set_message(truncate_path(path));
        self.pb.inc(1);
    }

    fn finish(&mut self) {
        self.pb.finish_and_clear();
    }
}

/// No-op reporter
#[derive(Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn start(&mut self, _total: u64) {}

    fn advance(&mut self, _path: &str) {}

    fn finish(&mut self) {}
}

/// Keep the tail of long paths, which carries the file name
fn truncate_path(path: &str) -> String {
    let count = path.chars().count();
    if count <= MAX_MESSAGE_CHARS {
        return path.to_string();
    }
    let tail: String = path.chars().skip(count - (MAX_MESSAGE_CHARS - 3)).collect();
    format!("...{}", tail)
}
