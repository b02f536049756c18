//! Axis-aligned hit-boxes.

use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Strict overlap: rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Inclusive containment: points on the border are inside.
    pub fn contains(&self, point: Vec2) -> bool {
        self.x <= point.x
            && self.x + self.width >= point.x
            && self.y <= point.y
            && self.y + self.height >= point.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_symmetric() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let above = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&above));
    }

    #[test]
    fn contains_includes_border() {
        let r = Rect::new(10.0, 20.0, 5.0, 5.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(15.0, 25.0)));
        assert!(!r.contains(Vec2::new(15.1, 25.0)));
    }

    #[test]
    fn set_position_keeps_size() {
        let mut r = Rect::new(0.0, 0.0, 3.0, 4.0);
        r.set_position(Vec2::new(7.0, -2.0));
        assert_eq!(r, Rect::new(7.0, -2.0, 3.0, 4.0));
    }
}
