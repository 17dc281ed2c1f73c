//! Progress bar display for downloads

use std::io::Write;

use indicatif::{ProgressBar, ProgressBarIter, ProgressStyle};

/// Byte progress for a single download, drawn on stderr
pub struct DownloadProgress {
    pb: ProgressBar,
}

impl DownloadProgress {
    /// Create a progress display; `total` is the expected size when the server reports one
    pub fn new(file_name: &str, total: Option<u64>) -> Self {
        let pb = match total {
            Some(len) => {
                let pb = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::default_bar()
                    .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                {
                    pb.set_style(style.progress_chars("#>-"));
                }
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {bytes} {msg}")
                {
                    pb.set_style(style);
                }
                pb
            }
        };
        pb.set_message(file_name.to_string());
        Self { pb }
    }

    /// Wrap a writer so bytes written through it advance the bar
    pub fn wrap_write<W: Write>(&self, writer: W) -> ProgressBarIter<W> {
        self.pb.wrap_write(writer)
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Abandon on error, leaving the bar's last state visible
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}
