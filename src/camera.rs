//! Orthographic 2D camera, y-up.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Centre of the view in world space.
    pub position: Vec2,
    /// Visible width and height in world units.
    pub viewport: Vec2,
}

impl Camera {
    /// Camera whose view starts at the world origin.
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(width / 2.0, height / 2.0),
            viewport: Vec2::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.position.x - self.viewport.x / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.position.y - self.viewport.y / 2.0
    }

    /// Map a point in viewport space (origin bottom-left) to world space.
    pub fn to_world(&self, viewport_point: Vec2) -> Vec2 {
        Vec2::new(self.left(), self.bottom()) + viewport_point
    }

    /// Inverse of [`Camera::to_world`].
    pub fn to_viewport(&self, world_point: Vec2) -> Vec2 {
        world_point - Vec2::new(self.left(), self.bottom())
    }
}
