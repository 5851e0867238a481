//! Drawing glyphs along a circular baseline.
//!
//! An arc is walked as a chain of straight chords. Turning by [`heading_delta`]
//! before and again after a chord keeps the agent tangent to the circle at both
//! ends of it.

use crate::{TextStyle, Turtle, TurtleError, TurtleResult, baseline::draw_glyph, fit};
use quill_core::profiling::profile_function;
use quill_glyph::{Glyph, glyphs};

/// Heading change, in degrees, between the tangent at the start of a chord of
/// `segment_length` and the chord itself, on a circle of signed `radius`.
///
/// A positive radius turns left (counter-clockwise), a negative one right.
///
/// # Errors
///
/// [`TurtleError::InvalidRadius`] for a zero or non-finite radius and
/// [`TurtleError::ChordTooLong`] when `|segment_length| > 2 |radius|`.
pub fn heading_delta(segment_length: f64, radius: f64) -> TurtleResult<f64> {
    if radius == 0.0 || !radius.is_finite() {
        return Err(TurtleError::InvalidRadius(radius));
    }
    let ratio = segment_length / (2.0 * radius);
    if !(-1.0..=1.0).contains(&ratio) {
        return Err(TurtleError::ChordTooLong {
            segment_length,
            radius,
        });
    }
    Ok(ratio.asin().to_degrees())
}

/// Apply one half of the chord heading correction to `agent`.
///
/// Call once before moving `segment_length` and once after to end up tangent
/// to the arc again.
pub fn set_arc_segment_heading<T: Turtle + ?Sized>(
    agent: &mut T,
    segment_length: f64,
    radius: f64,
) -> TurtleResult<()> {
    let delta = heading_delta(segment_length, radius)?;
    agent.turn(delta);
    Ok(())
}

/// Draw `text` on an arc of signed `radius`, starting tangent to the agent's
/// heading.
///
/// Without a radius, one is solved so the text (with trailing spacing) fills a
/// full circle. The agent ends tangent to the arc after the last glyph, pen
/// restored. All chord corrections are checked before anything is drawn.
pub fn draw_text_circle<T: Turtle + ?Sized>(
    agent: &mut T,
    text: &str,
    radius: Option<f64>,
    style: &TextStyle,
) -> TurtleResult<()> {
    profile_function!();
    style.validate()?;

    let glyphs: Vec<Glyph> = glyphs(text).collect();
    if glyphs.is_empty() {
        return Ok(());
    }

    let (style, radius) = match radius {
        Some(radius) => (*style, radius),
        None => {
            let fitted = style.with_spacing_at_end(true);
            let solution = fit::solve_radius(text, fit::FULL_CIRCLE, &fitted)?;
            (fitted, solution.radius)
        }
    };

    let half_spacing = style.spacing() / 2.0;
    let spacing_turn = heading_delta(half_spacing, radius)?;
    let glyph_turns = glyphs
        .iter()
        .map(|glyph| heading_delta(glyph.width_at(style.height), radius))
        .collect::<TurtleResult<Vec<f64>>>()?;

    tracing::debug!(
        glyphs = glyphs.len(),
        radius,
        height = style.height,
        "Drawing text on arc"
    );

    let base_pen = agent.is_pen_down();
    // spacing chords never leave ink
    agent.pen_up();

    for (i, (glyph, glyph_turn)) in glyphs.iter().zip(glyph_turns).enumerate() {
        agent.turn(spacing_turn);
        agent.forward(half_spacing);
        agent.turn(spacing_turn);

        agent.turn(glyph_turn);
        draw_glyph(agent, glyph, style.height, 0.0);
        agent.turn(glyph_turn);

        let is_last = i + 1 == glyphs.len();
        if !is_last || style.spacing_at_end {
            agent.turn(spacing_turn);
            agent.forward(half_spacing);
            agent.turn(spacing_turn);
        }
    }

    agent.set_pen(base_pen);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_delta_half_circle() {
        // a diameter chord subtends a half circle
        assert!((heading_delta(20.0, 10.0).unwrap() - 90.0).abs() < 1e-12);
        assert!((heading_delta(20.0, -10.0).unwrap() + 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_heading_delta_is_odd_in_radius() {
        for (s, r) in [(1.0, 3.0), (7.5, 40.0), (0.1, 1000.0)] {
            let a = heading_delta(s, r).unwrap();
            let b = heading_delta(s, -r).unwrap();
            assert!((a + b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_heading_delta_rejects_long_chord() {
        assert_eq!(
            heading_delta(21.0, 10.0),
            Err(TurtleError::ChordTooLong {
                segment_length: 21.0,
                radius: 10.0
            })
        );
        assert_eq!(heading_delta(1.0, 0.0), Err(TurtleError::InvalidRadius(0.0)));
        assert!(heading_delta(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_zero_length_chord() {
        assert_eq!(heading_delta(0.0, 5.0), Ok(0.0));
    }
}
