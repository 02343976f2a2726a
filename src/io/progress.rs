//! Reveal progress display with automatic batching for large file sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Moves played so far for one input file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FileProgress {
    name: String,
    done: usize,
    total: usize,
}

/// Coordinates progress display while mosaics are revealed
///
/// Shows one bar per file for small batches and a single batch bar plus a
/// rolling window of file bars for large ones
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    files: Vec<FileProgress>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static MOVES_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.green/white}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Mosaics: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Create bars for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(0);
            pb.set_style(MOVES_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Start tracking a file whose reveal plays `total_moves` quarter turns
    pub fn start_file(&mut self, index: usize, path: &Path, total_moves: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.files.len() {
            self.files.resize(index + 1, FileProgress::default());
        }
        if let Some(file) = self.files.get_mut(index) {
            *file = FileProgress {
                name,
                done: 0,
                total: total_moves,
            };
        }
        self.update_bars();
    }

    /// Report moves played so far
    pub fn update_moves(&mut self, index: usize, done: usize) {
        if let Some(file) = self.files.get_mut(index) {
            if file.done == done {
                return;
            }
            file.done = done;
        }
        self.update_bars();
    }

    /// Mark a file as revealed and update batch progress
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(file) = self.files.get_mut(index) {
            file.name = format!("✓ {}", file.name);
            file.done = file.total;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All mosaics revealed");
        }
        let _ = self.multi_progress.clear();
    }

    // Show the most recent files in the available bars
    fn update_bars(&self) {
        let active: Vec<&FileProgress> =
            self.files.iter().filter(|file| !file.name.is_empty()).collect();
        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_idx, file) in visible.iter().enumerate() {
            if let Some(bar) = self.file_bars.get(bar_idx) {
                bar.set_length(file.total as u64);
                bar.set_position(file.done as u64);
                let width = file.total.to_string().len();
                bar.set_message(format!("{:>width$}/{} moves", file.done, file.total));
                bar.set_prefix(file.name.clone());
            }
        }

        for bar in self.file_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
