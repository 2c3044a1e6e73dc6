#![forbid(unsafe_code)]

pub mod polygon;
pub mod polygon_set;
pub mod shp;

pub use polygon::{Location, Polygon};
pub use polygon_set::PolygonSet;
pub use shp::load_polygons;
