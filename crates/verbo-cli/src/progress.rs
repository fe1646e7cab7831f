use std::path::Path;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::ui;

/// Per-file progress on stderr while records are analyzed.
///
/// Hidden when progress is disabled or there is a single file.
pub struct FileProgress {
    bar: Option<ProgressBar>,
}

fn template(term_width: Option<usize>) -> &'static str {
    match term_width {
        Some(cols) if cols >= 110 => "{bar:40.cyan/blue} {pos}/{len} files {wide_msg}",
        Some(cols) if cols >= 80 => "{wide_bar:.cyan/blue} {pos}/{len} {msg}",
        _ => "{wide_bar:.cyan/blue} {percent}%",
    }
}

impl FileProgress {
    #[must_use]
    pub fn start(files: usize) -> Self {
        let prefs = ui::prefs();
        if !prefs.progress || files < 2 {
            return Self { bar: None };
        }

        let total = u64::try_from(files).unwrap_or(u64::MAX);
        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stderr());
        let style = ProgressStyle::with_template(template(prefs.term_width))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Self { bar: Some(bar) }
    }

    /// Show `path` as the file being read.
    pub fn reading(&self, path: &Path) {
        if let Some(bar) = &self.bar {
            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            bar.set_message(name);
        }
    }

    pub fn done_one(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
