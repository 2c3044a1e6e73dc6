use crate::{check_destination, CancelToken, Progress, ProgressSink};
use log::{debug, info, warn};
use pointclip_core::{ClipError, HasXY, Result};
use pointclip_filters::{clip_points, ClipPolicy};
use pointclip_geometry::PolygonSet;
use pointclip_io::{LasSink, LasSource, PointSink, PointSource};
use std::num::NonZeroUsize;
use std::path::Path;

pub const DEFAULT_CHUNK_SIZE: usize = 100_000;

/// Run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipOptions {
    pub chunk_size: NonZeroUsize,
    pub policy: ClipPolicy,
}

impl Default for ClipOptions {
    fn default() -> Self {
        Self {
            chunk_size: NonZeroUsize::new(DEFAULT_CHUNK_SIZE).unwrap_or(NonZeroUsize::MIN),
            policy: ClipPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipSummary {
    pub points_read: u64,
    pub points_written: u64,
    pub chunks: u64,
}

/// An opened source/sink pair ready to stream.
///
/// [`run`](ClipPipeline::run) consumes the pipeline: the sink is closed
/// exactly once whether streaming succeeds, fails, or is cancelled, and the
/// source is released when the pipeline drops.
pub struct ClipPipeline<S, W> {
    source: S,
    sink: W,
    cancel: CancelToken,
}

impl ClipPipeline<LasSource, LasSink> {
    /// Opens `input` and creates `output` with the input's header.
    ///
    /// An `output` that resolves to `input` is refused before anything is
    /// opened. If the output cannot be created the already opened input is released
    /// before the error is returned.
    pub fn open_las(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Self> {
        let (input, output) = (input.as_ref(), output.as_ref());
        check_destination(input, output, true)?;
        let source = LasSource::open(input)?;
        let sink = LasSink::create(output, source.header().clone())?;
        Ok(Self::new(source, sink))
    }
}

impl<S, W, P> ClipPipeline<S, W>
where
    S: PointSource<Point = P>,
    W: PointSink<Point = P>,
    P: HasXY,
{
    pub fn new(source: S, sink: W) -> Self {
        Self {
            source,
            sink,
            cancel: CancelToken::new(),
        }
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn run(
        mut self,
        polygons: &PolygonSet,
        options: &ClipOptions,
        progress: &mut dyn ProgressSink,
    ) -> Result<ClipSummary> {
        let streamed = self.stream(polygons, options, progress);
        let closed = self.sink.close();

        match (streamed, closed) {
            (Ok(state), Ok(())) => {
                progress.finish(&state);
                Ok(ClipSummary {
                    points_read: state.processed,
                    points_written: state.written,
                    chunks: state.chunks,
                })
            }
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                warn!("finalizing output after failure also failed: {close_err}");
                Err(e)
            }
        }
    }

    fn stream(
        &mut self,
        polygons: &PolygonSet,
        options: &ClipOptions,
        progress: &mut dyn ProgressSink,
    ) -> Result<Progress> {
        let mut state = Progress::new(self.source.total_point_count());
        progress.start(state.total);

        loop {
            if self.cancel.is_cancelled() {
                return Err(ClipError::Interrupted {
                    processed: state.processed,
                });
            }

            let Some(chunk) = self.source.next_chunk(options.chunk_size.get())? else {
                break;
            };
            let offset = chunk.offset;
            let read = chunk.len();

            let kept = clip_points(chunk.into_points(), polygons, options.policy);
            let kept_len = kept.len();
            self.sink.write(kept)?;

            state.record_chunk(read, kept_len);
            debug!("chunk at {offset}: kept {kept_len}/{read} points");
            progress.update(&state);
        }

        Ok(state)
    }
}

/// Clips a LAS/LAZ file into another one.
pub fn clip_las_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    polygons: &PolygonSet,
    options: &ClipOptions,
    progress: &mut dyn ProgressSink,
    cancel: CancelToken,
) -> Result<ClipSummary> {
    let (input, output) = (input.as_ref(), output.as_ref());
    info!(
        "clipping {} -> {} ({} polygons, {} points per chunk, keep {} points, {})",
        input.display(),
        output.display(),
        polygons.len(),
        options.chunk_size,
        if options.policy.keep_external {
            "external"
        } else {
            "internal"
        },
        options.policy.strategy,
    );
    ClipPipeline::open_las(input, output)?
        .with_cancel_token(cancel)
        .run(polygons, options, progress)
}
