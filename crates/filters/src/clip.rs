use pointclip_core::{HasXY, Mask};
use pointclip_geometry::PolygonSet;
use std::fmt;

/// How membership in several polygons combines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Inside at least one polygon.
    #[default]
    Union,
    /// Inside every polygon.
    Intersection,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Union => "union",
            Strategy::Intersection => "intersection",
        })
    }
}

/// Which points survive clipping.
///
/// A point is kept iff `inside ^ keep_external`, where `inside` is its
/// membership under `strategy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipPolicy {
    pub keep_external: bool,
    pub strategy: Strategy,
}

impl ClipPolicy {
    pub fn inside() -> Self {
        Self::default()
    }

    pub fn outside() -> Self {
        Self {
            keep_external: true,
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[inline]
    pub fn keeps(&self, polygons: &PolygonSet, x: f64, y: f64) -> bool {
        let inside = match self.strategy {
            Strategy::Union => polygons.contains(x, y),
            Strategy::Intersection => polygons.contains_all(x, y),
        };
        inside ^ self.keep_external
    }
}

/// One flag per point, in order: whether the point passes `policy`.
pub fn mask<P: HasXY>(points: &[P], polygons: &PolygonSet, policy: ClipPolicy) -> Mask {
    points
        .iter()
        .map(|p| policy.keeps(polygons, p.x(), p.y()))
        .collect()
}

/// Keeps the points whose mask entry is true, preserving order.
///
/// # Panics
///
/// Panics if `points` and `mask` differ in length.
pub fn select<P>(points: Vec<P>, mask: &[bool]) -> Vec<P> {
    assert_eq!(
        points.len(),
        mask.len(),
        "mask must have one entry per point"
    );
    points
        .into_iter()
        .zip(mask)
        .filter_map(|(p, &keep)| keep.then_some(p))
        .collect()
}

pub fn clip_points<P: HasXY>(points: Vec<P>, polygons: &PolygonSet, policy: ClipPolicy) -> Vec<P> {
    let m = mask(&points, polygons, policy);
    select(points, &m)
}
