use log::info;

/// Running counters of a clipping run.
///
/// `total` is the source's declared count and may be wrong; `percent` clamps
/// to 100 rather than overshooting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub processed: u64,
    pub written: u64,
    pub total: u64,
    pub chunks: u64,
}

impl Progress {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record_chunk(&mut self, read: usize, kept: usize) {
        self.processed += read as u64;
        self.written += kept as u64;
        self.chunks += 1;
    }

    /// Declared total, raised to `processed` when the source under-declared.
    pub fn effective_total(&self) -> u64 {
        self.total.max(self.processed)
    }

    pub fn percent(&self) -> f64 {
        let total = self.effective_total();
        if total == 0 {
            return 100.0;
        }
        (self.processed as f64 / total as f64 * 100.0).min(100.0)
    }
}

/// Receives progress after every chunk.
pub trait ProgressSink {
    fn start(&mut self, _total: u64) {}

    fn update(&mut self, progress: &Progress);

    fn finish(&mut self, _progress: &Progress) {}
}

/// Discards progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn update(&mut self, _progress: &Progress) {}
}

/// Reports progress through the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn start(&mut self, total: u64) {
        info!("clipping {} points", total);
    }

    fn update(&mut self, progress: &Progress) {
        info!(
            "{}k/{}k points done [{:.1}%]",
            progress.processed / 1000,
            progress.effective_total() / 1000,
            progress.percent()
        );
    }

    fn finish(&mut self, progress: &Progress) {
        info!(
            "{} of {} points kept in {} chunks",
            progress.written, progress.processed, progress.chunks
        );
    }
}

#[cfg(test)]
mod tests {
    use super::Progress;
    use proptest::prelude::*;

    #[test]
    fn percent_tracks_processed() {
        let mut p = Progress::new(200);
        p.record_chunk(50, 10);
        assert_eq!(p.percent(), 25.0);
        p.record_chunk(150, 0);
        assert_eq!(p.percent(), 100.0);
        assert_eq!(p.chunks, 2);
        assert_eq!(p.written, 10);
    }

    #[test]
    fn under_declared_total_clamps() {
        let mut p = Progress::new(10);
        p.record_chunk(25, 25);
        assert_eq!(p.percent(), 100.0);
        assert_eq!(p.effective_total(), 25);
        assert_eq!(p.total, 10);
    }

    #[test]
    fn empty_stream_is_complete() {
        let p = Progress::new(0);
        assert_eq!(p.percent(), 100.0);
    }

    proptest! {
        #[test]
        fn percent_stays_in_range(
            total in 0u64..1_000_000,
            reads in prop::collection::vec(0usize..100_000, 0..20),
        ) {
            let mut p = Progress::new(total);
            for r in reads {
                p.record_chunk(r, r / 2);
                let pct = p.percent();
                prop_assert!((0.0..=100.0).contains(&pct));
            }
        }
    }
}
