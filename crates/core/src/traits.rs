use crate::{PointXY, Record};

/// Planar position used by the containment test.
pub trait HasXY {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn xy(&self) -> [f64; 2] {
        [self.x(), self.y()]
    }
}

impl HasXY for PointXY {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl<T> HasXY for Record<T> {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl HasXY for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

// Scaled and offset coordinates as decoded by the las crate.
impl HasXY for las::Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

#[cfg(test)]
mod tests {
    use super::HasXY;
    use crate::{PointXY, Record};

    #[test]
    fn all_point_shapes_expose_xy() {
        assert_eq!(PointXY::new(1.0, 2.0).xy(), [1.0, 2.0]);
        assert_eq!(Record::new(3.0, 4.0, "payload").xy(), [3.0, 4.0]);
        assert_eq!([5.0, 6.0].xy(), [5.0, 6.0]);

        let mut p = las::Point::default();
        p.x = 9.0;
        p.y = 10.0;
        p.z = 11.0;
        assert_eq!(p.xy(), [9.0, 10.0]);
    }
}
