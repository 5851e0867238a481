//! Solving for the radius that fits text into an angular extent.

use crate::{TextStyle, TurtleError, TurtleResult, arc::heading_delta};
use quill_core::profiling::profile_function;
use quill_glyph::{Glyph, glyphs, text_width};

/// A full turn, in degrees.
pub const FULL_CIRCLE: f64 = 360.0;

/// How close, in degrees, a solved extent must be to the target.
pub const EXTENT_TOLERANCE: f64 = 0.05;

/// Iteration budget for [`solve_radius`]. Three or so is typical.
pub const MAX_FIT_ITERATIONS: usize = 20;

/// Outcome of [`solve_radius`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcFit {
    /// Best radius found. Its sign is the opposite of the target extent's.
    pub radius: f64,
    /// Absolute difference, in degrees, between the last measured extent and
    /// the target.
    pub error: f64,
    /// Extents measured before stopping.
    pub iterations: usize,
    /// Whether `error` came within [`EXTENT_TOLERANCE`].
    pub converged: bool,
}

/// Angle swept by `text` drawn on an arc of signed `radius`.
///
/// The result is the negated heading change, so a counter-clockwise (positive)
/// radius gives a negative extent. Spacing is counted after every glyph; with
/// the style's `spacing_at_end` off, the final gap counts for three quarters.
pub fn text_circle_extent(text: &str, radius: f64, style: &TextStyle) -> TurtleResult<f64> {
    let glyphs: Vec<Glyph> = glyphs(text).collect();
    if glyphs.is_empty() {
        return Ok(0.0);
    }

    let spacing_turn = heading_delta(style.spacing(), radius)?;
    let mut heading_change = 0.0;
    for (i, glyph) in glyphs.iter().enumerate() {
        heading_change -= heading_delta(glyph.width_at(style.height), radius)? * 2.0;

        let is_last = i + 1 == glyphs.len();
        let spacing_mult = if is_last && !style.spacing_at_end { 1.5 } else { 2.0 };
        heading_change -= spacing_turn * spacing_mult;
    }
    Ok(heading_change)
}

/// Find a radius at which `text` sweeps `extent` degrees.
///
/// Starts from the radius whose circumference arc equals the text width, then
/// rescales it by the ratio of measured to target extent until they agree to
/// within [`EXTENT_TOLERANCE`]. When the budget runs out the last radius is
/// returned with `converged: false`.
///
/// Following the turtle convention a positive extent yields a negative
/// (clockwise) radius and vice versa.
pub fn solve_radius(text: &str, extent: f64, style: &TextStyle) -> TurtleResult<ArcFit> {
    solve_radius_with(text, extent, style, MAX_FIT_ITERATIONS)
}

pub(crate) fn solve_radius_with(
    text: &str,
    extent: f64,
    style: &TextStyle,
    max_iterations: usize,
) -> TurtleResult<ArcFit> {
    profile_function!();
    style.validate()?;
    if extent == 0.0 || !extent.is_finite() {
        return Err(TurtleError::InvalidExtent(extent));
    }
    if glyphs(text).next().is_none() {
        return Err(TurtleError::EmptyText);
    }

    let spacing = style.spacing();
    let mut width = text_width(text, style.height, Some(spacing));
    // trailing allowance centers the text on the arc
    width += if style.spacing_at_end {
        spacing
    } else {
        spacing / 2.0
    };

    let mut fit = ArcFit {
        radius: width / extent.to_radians(),
        error: f64::INFINITY,
        iterations: 0,
        converged: false,
    };

    while fit.iterations < max_iterations {
        let measured = text_circle_extent(text, fit.radius, style)?;
        fit.radius *= measured / extent;
        fit.error = (measured - extent).abs();
        fit.iterations += 1;

        tracing::debug!(
            iteration = fit.iterations,
            radius = fit.radius,
            measured,
            error = fit.error,
            "Arc fit step"
        );

        if fit.error < EXTENT_TOLERANCE {
            fit.converged = true;
            break;
        }
    }

    if !fit.converged {
        tracing::warn!(
            extent,
            radius = fit.radius,
            error = fit.error,
            "Arc fit did not converge after {} iterations",
            max_iterations
        );
    }
    Ok(fit)
}

/// The radius from [`solve_radius`], converged or not.
pub fn radius_for_extent(text: &str, extent: f64, style: &TextStyle) -> TurtleResult<f64> {
    solve_radius(text, extent, style).map(|fit| fit.radius)
}
