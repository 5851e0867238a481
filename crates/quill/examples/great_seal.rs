//! Draws "The Great Seal" on two facing arcs with a headless turtle and logs
//! the resulting pen strokes.
//!
//! Run with `RUST_LOG=debug` to see the radius solver at work, and with
//! `QUILL_PROFILE=1` to serve puffin profiling data.

use quill::core::profiling::{ProfilingBackend, init_profiling, new_frame};
use quill::prelude::*;

fn main() -> Result<(), TurtleError> {
    quill::logging::init();
    if std::env::var_os("QUILL_PROFILE").is_some() {
        init_profiling(ProfilingBackend::PuffinHttp);
    }

    let writer = TextWriter::new(TextStyle::new(40.0));
    let mut turtle = RecordingTurtle::new();
    turtle.pen_up();

    // Upper arc: fit the text into half a circle, clockwise.
    let top = "The Great Seal";
    let radius = writer.radius_for_extent(top, -180.0, true)?;
    turtle.head_to(dvec2(-radius, 0.0));
    turtle.set_heading(90.0);
    writer.text_circle(&mut turtle, top, Some(-radius))?;

    // Lower arc: the baseline runs on the inside track, so grow the radius by
    // one text height to line the two arcs up.
    let bottom = "of Text Turtle";
    let radius = radius + writer.style().height;
    turtle.head_to(dvec2(-radius, 0.0));
    turtle.set_heading(-90.0);
    let extent = writer.text_circle_extent(bottom, radius, true)?;

    // Walk along the arc, pen up, so the lower text is centred.
    let lead_in = (180.0 + extent) / 2.0;
    let chord = 2.0 * radius * (lead_in.to_radians() / 2.0).sin();
    turtle.turn(lead_in / 2.0);
    turtle.forward(chord);
    turtle.turn(lead_in / 2.0);

    writer.text_circle(&mut turtle, bottom, Some(radius))?;

    let strokes = turtle.strokes();
    tracing::info!(
        strokes = strokes.len(),
        ink = turtle.ink_length(),
        "Seal drawn"
    );
    for (i, stroke) in strokes.iter().enumerate() {
        tracing::debug!(stroke = i, points = stroke.len(), start = %stroke[0], "Stroke");
    }

    new_frame();
    Ok(())
}
