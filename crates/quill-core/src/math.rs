//! Double precision vector math for turtle geometry.
//!
//! Re-exports the [`glam`] `f64` types and adds the heading conventions shared by
//! every Quill crate: headings are degrees, `0` points along `+X`, and angles grow
//! counter-clockwise.
//!
//! ```
//! use quill_core::math::{DVec2, rotate_deg};
//!
//! let v = rotate_deg(DVec2::X, 90.0);
//! assert!((v - DVec2::Y).length() < 1e-12);
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{DVec2, dvec2};

/// Rotate `v` counter-clockwise by `degrees`.
#[inline]
pub fn rotate_deg(v: DVec2, degrees: f64) -> DVec2 {
    DVec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Unit vector pointing along `heading`.
#[inline]
pub fn direction(heading: f64) -> DVec2 {
    DVec2::from_angle(heading.to_radians())
}

/// Wrap a heading into `[0, 360)`.
#[inline]
pub fn normalize_heading(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Heading from `from` towards `to`, normalized to `[0, 360)`.
///
/// Coincident points yield `0`, matching a turtle's `towards`.
#[inline]
pub fn heading_towards(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    normalize_heading(d.y.atan2(d.x).to_degrees())
}

/// Whether two points are within `tolerance` of each other.
#[inline]
pub fn approx_eq(a: DVec2, b: DVec2, tolerance: f64) -> bool {
    a.distance(b) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_quarter_turns() {
        let v = DVec2::new(2.0, 0.0);
        assert!(approx_eq(rotate_deg(v, 90.0), DVec2::new(0.0, 2.0), 1e-12));
        assert!(approx_eq(rotate_deg(v, 180.0), DVec2::new(-2.0, 0.0), 1e-12));
        assert!(approx_eq(rotate_deg(v, -90.0), DVec2::new(0.0, -2.0), 1e-12));
    }

    #[test]
    fn test_heading_towards() {
        assert_eq!(heading_towards(DVec2::ZERO, DVec2::new(1.0, 0.0)), 0.0);
        assert!((heading_towards(DVec2::ZERO, DVec2::new(0.0, 1.0)) - 90.0).abs() < 1e-12);
        assert!((heading_towards(DVec2::ZERO, DVec2::new(0.0, -1.0)) - 270.0).abs() < 1e-12);
        assert_eq!(heading_towards(DVec2::ONE, DVec2::ONE), 0.0);
    }

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(725.0), 5.0);
    }

    #[test]
    fn test_direction_is_unit() {
        for heading in [0.0, 33.0, 135.0, 271.5] {
            assert!((direction(heading).length() - 1.0).abs() < 1e-12);
        }
    }
}
