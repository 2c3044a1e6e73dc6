/// A bare planar point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointXY {
    pub x: f64,
    pub y: f64,
}

impl PointXY {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A planar point carrying an opaque payload that travels with it untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    pub x: f64,
    pub y: f64,
    pub payload: T,
}

impl<T> Record<T> {
    pub fn new(x: f64, y: f64, payload: T) -> Self {
        Self { x, y, payload }
    }
}
