use crate::{PointSink, PointSource};
use pointclip_core::{Chunk, ClipError, Result};

/// Point source over an in-memory vector.
#[derive(Debug)]
pub struct MemorySource<P> {
    points: std::vec::IntoIter<P>,
    declared: u64,
    position: u64,
}

impl<P> MemorySource<P> {
    pub fn new(points: Vec<P>) -> Self {
        let declared = points.len() as u64;
        Self {
            points: points.into_iter(),
            declared,
            position: 0,
        }
    }

    /// Overrides the declared total, as a file header may disagree with the
    /// number of points actually stored.
    pub fn with_declared_total(mut self, declared: u64) -> Self {
        self.declared = declared;
        self
    }
}

impl<P> PointSource for MemorySource<P> {
    type Point = P;

    fn total_point_count(&self) -> u64 {
        self.declared
    }

    fn next_chunk(&mut self, max_size: usize) -> Result<Option<Chunk<P>>> {
        if max_size == 0 {
            return Err(ClipError::InvalidUse("chunk size must be positive"));
        }
        let points: Vec<P> = self.points.by_ref().take(max_size).collect();
        if points.is_empty() {
            return Ok(None);
        }
        let chunk = Chunk::new(self.position, points);
        self.position = chunk.end();
        Ok(Some(chunk))
    }
}

/// Point sink collecting into a vector.
#[derive(Debug)]
pub struct MemorySink<P> {
    points: Vec<P>,
    closed: bool,
}

impl<P> MemorySink<P> {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            closed: false,
        }
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn into_points(self) -> Vec<P> {
        self.points
    }
}

impl<P> Default for MemorySink<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> PointSink for MemorySink<P> {
    type Point = P;

    fn write(&mut self, mut points: Vec<P>) -> Result<()> {
        if self.closed {
            return Err(ClipError::InvalidUse("write after close"));
        }
        self.points.append(&mut points);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(ClipError::InvalidUse("sink closed twice"));
        }
        self.closed = true;
        Ok(())
    }

    fn points_written(&self) -> u64 {
        self.points.len() as u64
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
