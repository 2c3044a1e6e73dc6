#![forbid(unsafe_code)]

pub mod las;
pub mod memory;
pub mod stream;

pub use self::las::{LasSink, LasSource};
pub use memory::{MemorySink, MemorySource};
pub use stream::{Chunks, PointSink, PointSource};
