use pointclip_core::{Chunk, Result};

/// A finite, forward-only source of point chunks.
///
/// Each call to [`next_chunk`](PointSource::next_chunk) advances the stream;
/// the chunks are disjoint and, concatenated in order, reproduce the source.
/// At most one chunk is held in memory by the source.
pub trait PointSource {
    type Point;

    /// Declared number of points. Best effort, only used for progress.
    fn total_point_count(&self) -> u64;

    /// Reads up to `max_size` points. `Ok(None)` marks the end of the stream.
    /// A `max_size` of zero is [`ClipError::InvalidUse`](pointclip_core::ClipError::InvalidUse).
    fn next_chunk(&mut self, max_size: usize) -> Result<Option<Chunk<Self::Point>>>;

    fn chunks(&mut self, max_size: usize) -> Chunks<'_, Self>
    where
        Self: Sized,
    {
        Chunks {
            source: self,
            max_size,
            done: false,
        }
    }
}

/// An append-only destination for points.
///
/// `close` finalizes the destination and must run exactly once; writing or
/// closing again afterwards is [`ClipError::InvalidUse`](pointclip_core::ClipError::InvalidUse).
pub trait PointSink {
    type Point;

    /// Appends `points` in order. An empty batch is a no-op.
    fn write(&mut self, points: Vec<Self::Point>) -> Result<()>;

    fn close(&mut self) -> Result<()>;

    fn points_written(&self) -> u64;

    fn is_closed(&self) -> bool;
}

/// Iterator adapter over [`PointSource::next_chunk`]. Stops after the first
/// error.
pub struct Chunks<'a, S> {
    source: &'a mut S,
    max_size: usize,
    done: bool,
}

impl<S: PointSource> Iterator for Chunks<'_, S> {
    type Item = Result<Chunk<S::Point>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.next_chunk(self.max_size) {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
