use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use pointclip_pipeline::{Progress, ProgressSink};
use std::time::Duration;

const TEMPLATE: &str = "{bar:50.yellow} {spinner:.green} {human_pos}k/{human_len}k [{percent}%] points done in {elapsed} (ETA:~{eta})";

/// Terminal progress bar counting thousands of points.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Result<Self> {
        let style = ProgressStyle::with_template(TEMPLATE).context("progress bar template")?;
        let bar = ProgressBar::new(0);
        bar.set_style(style);
        Ok(Self { bar })
    }
}

impl ProgressSink for BarProgress {
    fn start(&mut self, total: u64) {
        self.bar.set_length(total.div_ceil(1000));
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn update(&mut self, progress: &Progress) {
        // The declared total can be short of what the file really holds.
        self.bar.set_length(progress.effective_total().div_ceil(1000));
        self.bar.set_position(progress.processed / 1000);
    }

    fn finish(&mut self, progress: &Progress) {
        self.bar.set_position(progress.effective_total().div_ceil(1000));
        self.bar.finish();
    }
}

impl Drop for BarProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}
