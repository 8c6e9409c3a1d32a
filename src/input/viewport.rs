use glam::Vec2;

/// Screen rectangle the mannequin is drawn into, in physical pixels with
/// the origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Viewport {
    /// Viewport covering a `width` x `height` surface from its top-left.
    #[must_use]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: width as f32,
            height: height as f32,
        }
    }

    /// Width over height, or `None` for an empty viewport.
    #[must_use]
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }

    /// Whether the pixel position lies inside the viewport. Right and
    /// bottom edges are exclusive.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left
            && x < self.left + self.width
            && y >= self.top
            && y < self.top + self.height
    }

    /// Convert a pixel position to normalized device coordinates
    /// (+Y up, [-1, 1] across the viewport).
    ///
    /// Returns `None` for an empty viewport. Positions outside the viewport
    /// map outside [-1, 1].
    #[must_use]
    pub fn to_ndc(&self, x: f32, y: f32) -> Option<Vec2> {
        if self.aspect().is_none() {
            return None;
        }
        let ndc_x = ((x - self.left) / self.width) * 2.0 - 1.0;
        let ndc_y = 1.0 - ((y - self.top) / self.height) * 2.0;
        Some(Vec2::new(ndc_x, ndc_y))
    }
}
