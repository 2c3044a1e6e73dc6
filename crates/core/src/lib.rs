#![forbid(unsafe_code)]

pub mod bbox;
pub mod chunk;
pub mod error;
pub mod point;
pub mod traits;

pub use bbox::Aabb2;
pub use chunk::{Chunk, Mask};
pub use error::{BoxError, ClipError, Result};
pub use point::{PointXY, Record};
pub use traits::HasXY;
