/// RGBA color with components in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Committed circle.
    pub const PURPLE: Self = Self::new(1.0, 0.0, 1.0, 1.0);
    /// Committed segment.
    pub const SKY: Self = Self::new(0.5, 0.5, 1.0, 1.0);
    /// Shape still being dragged.
    pub const PREVIEW_GRAY: Self = Self::new(0.5, 0.5, 0.5, 1.0);
    /// Intersection points.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::new(1.0, 0.0, 1.0, 1.0);

    /// Returns the components as an array, in shader uniform order.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
