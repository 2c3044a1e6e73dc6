#![forbid(unsafe_code)]

pub mod cancel;
pub mod destination;
pub mod pipeline;
pub mod progress;

pub use cancel::CancelToken;
pub use destination::check_destination;
pub use pipeline::{clip_las_file, ClipOptions, ClipPipeline, ClipSummary, DEFAULT_CHUNK_SIZE};
pub use progress::{LogProgress, NoProgress, Progress, ProgressSink};
