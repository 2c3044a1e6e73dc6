use crate::{Polygon, PolygonSet};
use log::{debug, warn};
use pointclip_core::{ClipError, Result};
use shapefile::record::traits::HasXY as ShpHasXY;
use shapefile::{PolygonRing, Shape};
use std::path::Path;

/// Loads every polygon of an ESRI shapefile.
///
/// Polygon, PolygonM and PolygonZ records are accepted; M and Z are dropped.
/// Each outer ring starts a new polygon and the inner rings that follow it
/// become its holes. Other shape kinds and degenerate rings are skipped with a
/// warning. A file that cannot be read, or that yields no usable polygon, is
/// a [`ClipError::MalformedGeometry`].
pub fn load_polygons(path: impl AsRef<Path>) -> Result<PolygonSet> {
    let path = path.as_ref();
    let malformed = |reason: String| ClipError::MalformedGeometry {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader = shapefile::ShapeReader::from_path(path)
        .map_err(|e| malformed(format!("cannot open shapefile: {e}")))?;

    let mut polygons = Vec::new();
    for (index, shape) in reader.iter_shapes().enumerate() {
        let shape = shape.map_err(|e| malformed(format!("record {index}: {e}")))?;
        match shape {
            Shape::Polygon(poly) => push_rings(poly.rings(), index, &mut polygons),
            Shape::PolygonM(poly) => push_rings(poly.rings(), index, &mut polygons),
            Shape::PolygonZ(poly) => push_rings(poly.rings(), index, &mut polygons),
            Shape::NullShape => debug!("record {index}: null shape skipped"),
            other => warn!(
                "record {index}: {:?} is not a polygon, skipped",
                other.shapetype()
            ),
        }
    }

    if polygons.is_empty() {
        return Err(malformed("no usable polygon".to_string()));
    }
    Ok(PolygonSet::new(polygons))
}

fn push_rings<P: ShpHasXY>(rings: &[PolygonRing<P>], index: usize, out: &mut Vec<Polygon>) {
    let mut exterior: Option<Vec<[f64; 2]>> = None;
    let mut holes = Vec::new();

    for ring in rings {
        match ring {
            PolygonRing::Outer(points) => {
                if let Some(prev) = exterior.take() {
                    finish(prev, std::mem::take(&mut holes), index, out);
                }
                exterior = Some(to_xy(points));
            }
            PolygonRing::Inner(points) => {
                if exterior.is_some() {
                    holes.push(to_xy(points));
                } else {
                    warn!("record {index}: inner ring without outer ring skipped");
                }
            }
        }
    }

    if let Some(prev) = exterior {
        finish(prev, holes, index, out);
    }
}

fn finish(exterior: Vec<[f64; 2]>, holes: Vec<Vec<[f64; 2]>>, index: usize, out: &mut Vec<Polygon>) {
    let polygon = Polygon::with_holes(exterior, holes);
    if polygon.is_degenerate() {
        warn!("record {index}: degenerate ring skipped");
        return;
    }
    out.push(polygon);
}

fn to_xy<P: ShpHasXY>(points: &[P]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x(), p.y()]).collect()
}
