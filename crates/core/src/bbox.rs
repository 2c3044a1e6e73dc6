/// Axis-aligned 2D bounding box over `f64` coordinates.
///
/// Containment is inclusive on every edge. Non-finite points are ignored when
/// expanding and are never contained.
#[derive(Debug, Clone, PartialEq)]
pub struct Aabb2 {
    pub min: [f64; 2],
    pub max: [f64; 2],
    empty: bool,
}

impl Aabb2 {
    pub fn empty() -> Self {
        Self {
            min: [f64::INFINITY; 2],
            max: [f64::NEG_INFINITY; 2],
            empty: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn expand_with_point(&mut self, point: [f64; 2]) {
        if !point.iter().all(|v| v.is_finite()) {
            return;
        }

        if self.empty {
            self.min = point;
            self.max = point;
            self.empty = false;
            return;
        }

        for (axis, &val) in point.iter().enumerate() {
            self.min[axis] = self.min[axis].min(val);
            self.max[axis] = self.max[axis].max(val);
        }
    }

    pub fn expand_with_box(&mut self, other: &Aabb2) {
        if other.empty {
            return;
        }
        self.expand_with_point(other.min);
        self.expand_with_point(other.max);
    }

    pub fn contains(&self, point: &[f64; 2]) -> bool {
        if self.empty || !point.iter().all(|v| v.is_finite()) {
            return false;
        }

        (0..2).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a [f64; 2]>) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.expand_with_point(*p);
        }
        aabb
    }
}

impl Default for Aabb2 {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Aabb2;
    use proptest::prelude::*;

    #[test]
    fn empty_contains_nothing() {
        let aabb = Aabb2::empty();
        assert!(aabb.is_empty());
        assert!(!aabb.contains(&[0.0, 0.0]));
    }

    #[test]
    fn edges_are_inclusive() {
        let aabb = Aabb2::from_points(&[[0.0, 0.0], [3.0, 3.0]]);
        assert!(aabb.contains(&[0.0, 0.0]));
        assert!(aabb.contains(&[3.0, 1.5]));
        assert!(!aabb.contains(&[3.000_001, 1.5]));
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let aabb = Aabb2::from_points(&[[f64::NAN, 1.0], [1.0, 2.0], [f64::INFINITY, 0.0]]);
        assert_eq!(aabb.min, [1.0, 2.0]);
        assert_eq!(aabb.max, [1.0, 2.0]);
        assert!(!aabb.contains(&[f64::NAN, 2.0]));
    }

    #[test]
    fn merging_boxes() {
        let mut a = Aabb2::from_points(&[[0.0, 0.0], [1.0, 1.0]]);
        let b = Aabb2::from_points(&[[-2.0, 0.5], [0.5, 4.0]]);
        a.expand_with_box(&b);
        a.expand_with_box(&Aabb2::empty());
        assert_eq!(a.min, [-2.0, 0.0]);
        assert_eq!(a.max, [1.0, 4.0]);
    }

    proptest! {
        #[test]
        fn contains_every_finite_input(
            pts in prop::collection::vec((-1e6f64..1e6f64, -1e6f64..1e6f64), 1..300)
        ) {
            let pts: Vec<[f64; 2]> = pts.into_iter().map(|(x, y)| [x, y]).collect();
            let aabb = Aabb2::from_points(&pts);
            for p in &pts {
                prop_assert!(aabb.contains(p));
            }
        }
    }
}
