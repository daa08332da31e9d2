//! RGBA pixels and the tolerance-based color comparator.
//!
//! Two colors are compared by the Manhattan distance over all four channels.
//! Channel differences are taken as absolute values and summed in `u32`, so the
//! largest possible distance (opaque white against transparent black) is 1020.

/// Non-premultiplied 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Creates a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// Returns the channels in `[r, g, b, a]` order.
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(value: Rgba) -> Self {
        value.channels()
    }
}

/// Sum of absolute channel differences between two colors.
#[inline]
pub fn color_distance(a: Rgba, b: Rgba) -> u32 {
    u32::from(a.r.abs_diff(b.r))
        + u32::from(a.g.abs_diff(b.g))
        + u32::from(a.b.abs_diff(b.b))
        + u32::from(a.a.abs_diff(b.a))
}

/// Returns `true` when the distance between `a` and `b` is strictly below `tolerance`.
///
/// A tolerance of zero never reports two colors as the same.
#[inline]
pub fn is_same(a: Rgba, b: Rgba, tolerance: u32) -> bool {
    color_distance(a, b) < tolerance
}

#[cfg(test)]
mod tests {
    use super::{color_distance, is_same, Rgba};

    #[test]
    fn distance_sums_all_four_channels() {
        let a = Rgba::new(10, 20, 30, 40);
        let b = Rgba::new(13, 18, 30, 50);
        assert_eq!(color_distance(a, b), 3 + 2 + 10);
    }

    #[test]
    fn distance_does_not_wrap() {
        let white = Rgba::opaque(255, 255, 255);
        assert_eq!(color_distance(white, Rgba::TRANSPARENT), 1020);
        assert!(!is_same(white, Rgba::TRANSPARENT, 16));
    }

    #[test]
    fn tolerance_is_exclusive() {
        let a = Rgba::opaque(100, 100, 100);
        let b = Rgba::opaque(104, 100, 100);
        assert!(!is_same(a, b, 4));
        assert!(is_same(a, b, 5));
        assert!(!is_same(a, a, 0));
    }
}
