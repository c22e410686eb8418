//! 8-bit RGB colour type.

use std::fmt;

/// An opaque 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same value on all three channels.
    pub const fn grey(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build from unit-range channels, truncating each `c * 255`.
    ///
    /// Values outside `0.0..=1.0` saturate to the nearest end.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::from_scaled(r * 255.0, g * 255.0, b * 255.0)
    }

    /// Build from channels already scaled to `0.0..=255.0`, truncating.
    pub fn from_scaled(r: f64, g: f64, b: f64) -> Self {
        Self::new(truncate(r), truncate(g), truncate(b))
    }

    /// Convert to an `[r, g, b]` array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// `as` truncates toward zero and saturates, so NaN lands on 0.
fn truncate(value: f64) -> u8 {
    value as u8
}
