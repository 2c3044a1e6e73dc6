#![forbid(unsafe_code)]

pub mod clip;

pub use clip::{clip_points, mask, select, ClipPolicy, Strategy};
