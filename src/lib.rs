//! Streaming polygon clipping of LAS/LAZ point clouds.
//!
//! Points are read in chunks, tested against a [`PolygonSet`], and the
//! survivors are appended to an output that keeps the input's header.
//!
//! ```no_run
//! use pointclip::{clip_las_file, load_polygons, CancelToken, ClipOptions, LogProgress};
//!
//! let polygons = load_polygons("area.shp")?;
//! let summary = clip_las_file(
//!     "in.las",
//!     "out.las",
//!     &polygons,
//!     &ClipOptions::default(),
//!     &mut LogProgress,
//!     CancelToken::new(),
//! )?;
//! println!("{} points kept", summary.points_written);
//! # Ok::<(), pointclip::ClipError>(())
//! ```
#![forbid(unsafe_code)]

pub use pointclip_core::{Aabb2, Chunk, ClipError, HasXY, Mask, PointXY, Record, Result};
pub use pointclip_filters::{clip_points, mask, select, ClipPolicy, Strategy};
pub use pointclip_geometry::{load_polygons, Polygon, PolygonSet};
pub use pointclip_io::{LasSink, LasSource, MemorySink, MemorySource, PointSink, PointSource};
pub use pointclip_pipeline::{
    check_destination, clip_las_file, CancelToken, ClipOptions, ClipPipeline, ClipSummary, LogProgress, NoProgress,
    Progress, ProgressSink, DEFAULT_CHUNK_SIZE,
};
