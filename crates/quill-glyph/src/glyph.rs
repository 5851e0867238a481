//! A catalog entry with its derived metrics.

use crate::catalog::{self, SPACE, UnitPoint};
use quill_core::math::DVec2;

/// A single drawable character.
///
/// Extents and width are derived from the path once, at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    character: char,
    path: &'static [UnitPoint],
    x_min: f64,
    x_max: f64,
}

impl Glyph {
    /// Build the glyph for `c`, case-folding to uppercase first.
    ///
    /// Returns `None` for characters the catalog does not define.
    pub fn new(c: char) -> Option<Self> {
        let character = fold(c)?;
        let path = catalog::lookup(character)?;
        let (x_min, x_max) = path
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), [x, _]| {
                (lo.min(*x), hi.max(*x))
            });

        Some(Self {
            character,
            path,
            x_min,
            x_max,
        })
    }

    /// The (uppercase) character this glyph draws.
    pub fn character(&self) -> char {
        self.character
    }

    /// The raw unit-space path.
    pub fn path(&self) -> &'static [UnitPoint] {
        self.path
    }

    /// The unit-space path as vectors.
    pub fn points(&self) -> impl ExactSizeIterator<Item = DVec2> + '_ {
        self.path.iter().map(|[x, y]| DVec2::new(*x, *y))
    }

    /// Whether this is the blank-advance space glyph.
    pub fn is_space(&self) -> bool {
        self.character == SPACE
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Width in unit space, `x_max - x_min`.
    pub fn unit_width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// First point of the path.
    pub fn start_point(&self) -> DVec2 {
        let [x, y] = self.path[0];
        DVec2::new(x, y)
    }

    /// Glyph width at text height `height`.
    pub fn width_at(&self, height: f64) -> f64 {
        self.unit_width() * height
    }

    /// Offset from the glyph's left/bottom reference to the start of its path.
    pub fn start_delta_at(&self, height: f64) -> DVec2 {
        DVec2::new(-self.x_min * height, self.start_point().y * height)
    }

    /// Distance from the start point to the left edge.
    ///
    /// The start x is deliberately left unscaled while `x_min` is scaled; the
    /// baseline transform only ever evaluates this at height 1.
    pub fn delta_left_at(&self, height: f64) -> f64 {
        self.start_point().x - self.x_min * height
    }
}

/// Uppercase `c` if the result is a single supported character.
pub(crate) fn fold(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if catalog::is_supported(u) => Some(u),
        _ => None,
    }
}
