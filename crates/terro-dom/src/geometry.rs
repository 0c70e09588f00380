//! Geometry
//!
//! `DOMRect` in CSS pixels. Layout boxes are stored in document
//! coordinates; client rects are derived by subtracting the scroll offset.

/// Rectangle geometry
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DOMRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DOMRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Same rect moved by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Edge-inclusive intersection.
    ///
    /// Touching rects intersect with a zero-sized result, which is what an
    /// intersection observer needs for zero-height targets.
    pub fn intersection(&self, other: &DOMRect) -> Option<DOMRect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right >= x && bottom >= y {
            Some(DOMRect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection() {
        let a = DOMRect::new(0.0, 0.0, 100.0, 100.0);
        let b = DOMRect::new(50.0, 80.0, 100.0, 100.0);
        let i = a.intersection(&b).unwrap();
        assert_eq!(i, DOMRect::new(50.0, 80.0, 50.0, 20.0));
        assert_eq!(i.area(), 1000.0);
    }

    #[test]
    fn test_disjoint_and_touching() {
        let a = DOMRect::new(0.0, 0.0, 100.0, 100.0);
        assert!(a.intersection(&DOMRect::new(0.0, 150.0, 10.0, 10.0)).is_none());

        let touching = a.intersection(&DOMRect::new(0.0, 100.0, 100.0, 0.0)).unwrap();
        assert_eq!(touching.area(), 0.0);
    }

    #[test]
    fn test_translated() {
        let r = DOMRect::new(0.0, 900.0, 300.0, 200.0).translated(0.0, -400.0);
        assert_eq!(r.top(), 500.0);
        assert_eq!(r.bottom(), 700.0);
    }
}
