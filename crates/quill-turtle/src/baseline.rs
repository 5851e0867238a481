//! Drawing glyphs along a straight baseline.

use crate::{TextStyle, Turtle, TurtleResult};
use quill_core::math::{DVec2, rotate_deg};
use quill_core::profiling::profile_function;
use quill_glyph::{Glyph, glyphs};

/// World-space points of `glyph`'s path for a baseline starting at `base`
/// and running along `heading`.
///
/// The glyph's left edge lands on `base` regardless of where its path starts.
pub fn letter_to_baseline(glyph: &Glyph, height: f64, base: DVec2, heading: f64) -> Vec<DVec2> {
    // left/bottom reference at unit height
    let left = glyph.start_delta_at(1.0).x;
    let shift = rotate_deg(DVec2::new(left + glyph.delta_left_at(1.0), 0.0), heading);

    glyph
        .points()
        .map(|p| {
            let local = rotate_deg(DVec2::new(p.x - left, p.y), heading);
            (local + shift) * height + base
        })
        .collect()
}

/// Draw one glyph at the agent's position and advance past it.
///
/// The pen is lifted for the move to the path start and for the advance, so the
/// agent always finishes pen up, `width + spacing` further along its original
/// heading, facing that heading again.
pub fn draw_glyph<T: Turtle + ?Sized>(agent: &mut T, glyph: &Glyph, height: f64, spacing: f64) {
    let base_heading = agent.heading();
    let origin = agent.position();
    let advance = glyph.width_at(height) + spacing;

    tracing::trace!(
        glyph = %glyph.character(),
        x = origin.x,
        y = origin.y,
        heading = base_heading,
        "Drawing glyph"
    );

    agent.pen_up();
    let points = letter_to_baseline(glyph, height, origin, base_heading);
    for (i, point) in points.into_iter().enumerate() {
        if i > 0 && !glyph.is_space() {
            agent.pen_down();
        }
        agent.head_to(point);
    }

    agent.pen_up();
    agent.head_to(origin + rotate_deg(DVec2::new(advance, 0.0), base_heading));
    agent.set_heading(base_heading);
}

/// Draw `text` along the agent's current heading.
///
/// Heading and pen state are restored afterwards; the position is left at the
/// end of the text.
pub fn draw_text<T: Turtle + ?Sized>(agent: &mut T, text: &str, style: &TextStyle) -> TurtleResult<()> {
    profile_function!();
    style.validate()?;

    let base_pen = agent.is_pen_down();
    let base_heading = agent.heading();
    let spacing = style.spacing();
    let glyphs: Vec<Glyph> = glyphs(text).collect();

    tracing::debug!(
        glyphs = glyphs.len(),
        height = style.height,
        spacing,
        "Drawing text on straight baseline"
    );

    for (i, glyph) in glyphs.iter().enumerate() {
        let is_last = i + 1 == glyphs.len();
        let gap = if is_last && !style.spacing_at_end {
            0.0
        } else {
            spacing
        };
        draw_glyph(agent, glyph, style.height, gap);
    }

    agent.set_heading(base_heading);
    agent.set_pen(base_pen);
    Ok(())
}
