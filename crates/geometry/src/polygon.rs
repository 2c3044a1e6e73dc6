use pointclip_core::Aabb2;

/// Where a point sits relative to a single ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Inside,
    Boundary,
    Outside,
}

/// A simple polygon: one exterior ring and any number of holes.
///
/// Rings are closed implicitly; a trailing vertex equal to the first one is
/// dropped on construction. Containment is inclusive: points on the exterior
/// ring, or on the ring of a hole, count as inside. A polygon whose exterior
/// has fewer than three distinct vertices contains nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Vec<[f64; 2]>,
    holes: Vec<Vec<[f64; 2]>>,
    bounds: Aabb2,
    degenerate: bool,
}

impl Polygon {
    pub fn new(exterior: Vec<[f64; 2]>) -> Self {
        Self::with_holes(exterior, Vec::new())
    }

    pub fn with_holes(exterior: Vec<[f64; 2]>, holes: Vec<Vec<[f64; 2]>>) -> Self {
        let exterior = open_ring(exterior);
        let holes = holes.into_iter().map(open_ring).collect();
        let bounds = Aabb2::from_points(&exterior);
        let degenerate = distinct_vertices(&exterior) < 3;
        Self {
            exterior,
            holes,
            bounds,
            degenerate,
        }
    }

    /// Axis-aligned rectangle with corners `min` and `max`.
    pub fn rectangle(min: [f64; 2], max: [f64; 2]) -> Self {
        Self::new(vec![min, [max[0], min[1]], max, [min[0], max[1]]])
    }

    pub fn exterior(&self) -> &[[f64; 2]] {
        &self.exterior
    }

    pub fn holes(&self) -> &[Vec<[f64; 2]>] {
        &self.holes
    }

    pub fn bounds(&self) -> &Aabb2 {
        &self.bounds
    }

    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        if self.degenerate || !self.bounds.contains(&[x, y]) {
            return false;
        }

        match ring_location(&self.exterior, x, y) {
            Location::Outside => false,
            Location::Boundary => true,
            Location::Inside => self
                .holes
                .iter()
                .all(|hole| ring_location(hole, x, y) != Location::Inside),
        }
    }
}

/// Winding-number location of `(x, y)` against a closed ring.
///
/// Edge tests use exact arithmetic on the input coordinates, so a point lies
/// on the boundary only when it is collinear with an edge and within its
/// extent.
pub fn ring_location(ring: &[[f64; 2]], x: f64, y: f64) -> Location {
    let n = ring.len();
    if n == 0 || !x.is_finite() || !y.is_finite() {
        return Location::Outside;
    }

    let mut winding = 0i32;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        let cross = (b[0] - a[0]) * (y - a[1]) - (x - a[0]) * (b[1] - a[1]);

        if cross == 0.0
            && x >= a[0].min(b[0])
            && x <= a[0].max(b[0])
            && y >= a[1].min(b[1])
            && y <= a[1].max(b[1])
        {
            return Location::Boundary;
        }

        if a[1] <= y {
            if b[1] > y && cross > 0.0 {
                winding += 1;
            }
        } else if b[1] <= y && cross < 0.0 {
            winding -= 1;
        }
    }

    if winding != 0 {
        Location::Inside
    } else {
        Location::Outside
    }
}

fn open_ring(mut ring: Vec<[f64; 2]>) -> Vec<[f64; 2]> {
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

fn distinct_vertices(ring: &[[f64; 2]]) -> usize {
    let mut distinct: Vec<[f64; 2]> = Vec::with_capacity(3);
    for v in ring {
        if !distinct.contains(v) {
            distinct.push(*v);
            if distinct.len() >= 3 {
                break;
            }
        }
    }
    distinct.len()
}
