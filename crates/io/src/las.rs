use crate::{PointSink, PointSource};
use log::{debug, warn};
use pointclip_core::{Chunk, ClipError, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

// Upper bound on the points reserved ahead of a chunk read. The header's
// declared count is not trusted beyond this; the chunk grows past it as needed.
const MAX_PREALLOCATED_POINTS: usize = 1 << 16;

fn preallocation(declared_remaining: u64, max_size: usize) -> usize {
    usize::try_from(declared_remaining)
        .unwrap_or(usize::MAX)
        .min(max_size)
        .min(MAX_PREALLOCATED_POINTS)
}

/// Chunked reader over a LAS/LAZ file.
pub struct LasSource {
    reader: ::las::Reader,
    path: PathBuf,
    position: u64,
}

impl LasSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader =
            ::las::Reader::from_path(path).map_err(|e| ClipError::SourceUnavailable {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        debug!(
            "opened {} ({} points declared)",
            path.display(),
            reader.header().number_of_points()
        );
        Ok(Self {
            reader,
            path: path.to_path_buf(),
            position: 0,
        })
    }

    pub fn header(&self) -> &::las::Header {
        self.reader.header()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PointSource for LasSource {
    type Point = ::las::Point;

    fn total_point_count(&self) -> u64 {
        self.reader.header().number_of_points()
    }

    fn next_chunk(&mut self, max_size: usize) -> Result<Option<Chunk<::las::Point>>> {
        if max_size == 0 {
            return Err(ClipError::InvalidUse("chunk size must be positive"));
        }

        let start = self.position;
        let remaining = self.total_point_count().saturating_sub(start);
        let mut points = Vec::with_capacity(preallocation(remaining, max_size));

        for point in self.reader.points().take(max_size) {
            let point = point.map_err(|e| ClipError::StreamCorruption {
                index: start + points.len() as u64,
                source: e.into(),
            })?;
            points.push(point);
        }

        if points.is_empty() {
            return Ok(None);
        }
        let chunk = Chunk::new(start, points);
        self.position = chunk.end();
        Ok(Some(chunk))
    }
}

/// LAS/LAZ writer seeded with a source header.
///
/// The header's point count and bounds are recomputed from the points
/// actually written when the sink is closed; the template's values are not
/// carried over. Dropping an unclosed sink closes it and logs any failure.
pub struct LasSink {
    writer: Option<::las::Writer<BufWriter<File>>>,
    path: PathBuf,
    written: u64,
}

impl LasSink {
    pub fn create(path: impl AsRef<Path>, header: ::las::Header) -> Result<Self> {
        let path = path.as_ref();
        let writer =
            ::las::Writer::from_path(path, header).map_err(|e| ClipError::DestinationUnwritable {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        Ok(Self {
            writer: Some(writer),
            path: path.to_path_buf(),
            written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unwritable(&self, e: ::las::Error) -> ClipError {
        ClipError::DestinationUnwritable {
            path: self.path.clone(),
            source: e.into(),
        }
    }
}

impl PointSink for LasSink {
    type Point = ::las::Point;

    fn write(&mut self, points: Vec<::las::Point>) -> Result<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Err(ClipError::InvalidUse("write after close"));
        };
        for point in points {
            if let Err(e) = writer.write_point(point) {
                return Err(self.unwritable(e));
            }
            self.written += 1;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let Some(mut writer) = self.writer.take() else {
            return Err(ClipError::InvalidUse("sink closed twice"));
        };
        writer.close().map_err(|e| self.unwritable(e))?;
        debug!("closed {} ({} points)", self.path.display(), self.written);
        Ok(())
    }

    fn points_written(&self) -> u64 {
        self.written
    }

    fn is_closed(&self) -> bool {
        self.writer.is_none()
    }
}

impl Drop for LasSink {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.close() {
                warn!("failed to finalize {}: {}", self.path.display(), e);
            }
        }
    }
}
