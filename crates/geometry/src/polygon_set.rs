use crate::Polygon;
use pointclip_core::Aabb2;

/// Ordered collection of polygons queried as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonSet {
    polygons: Vec<Polygon>,
}

impl PolygonSet {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }

    /// True iff at least one member contains `(x, y)`. Always false when empty.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.polygons.iter().any(|p| p.contains(x, y))
    }

    /// True iff every member contains `(x, y)`. Always false when empty.
    pub fn contains_all(&self, x: f64, y: f64) -> bool {
        !self.polygons.is_empty() && self.polygons.iter().all(|p| p.contains(x, y))
    }

    /// Union of the member bounds.
    pub fn bounds(&self) -> Aabb2 {
        let mut aabb = Aabb2::empty();
        for p in &self.polygons {
            aabb.expand_with_box(p.bounds());
        }
        aabb
    }
}

impl FromIterator<Polygon> for PolygonSet {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PolygonSet {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}
