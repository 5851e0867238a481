//! Straight baseline rendering tests.
//!
//! These drive a `RecordingTurtle` and check the recorded moves.

use quill_core::math::{DVec2, approx_eq, rotate_deg};
use quill_turtle::{RecordingTurtle, TextStyle, TextWriter, Turtle, TurtleCommand, TurtleError};

const EPS: f64 = 1e-9;

fn writer() -> TextWriter {
    TextWriter::new(TextStyle::default())
}

#[test]
fn test_l_end_to_end() {
    let style = TextStyle::default().with_spacing_at_end(true);
    let writer = TextWriter::new(style);
    let mut turtle = RecordingTurtle::new();

    writer.text(&mut turtle, "L").unwrap();

    let moves: Vec<_> = turtle.moves().copied().collect();
    assert_eq!(moves.len(), 5);

    // positioning leg, never inked
    assert!(!moves[0].pen_down);
    assert!(approx_eq(moves[0].to, DVec2::new(0.0, 0.0), EPS));

    let inked = [
        DVec2::new(0.0, 50.0),
        DVec2::new(0.0, 0.0),
        DVec2::new(37.5, 0.0),
    ];
    for (m, expected) in moves[1..4].iter().zip(inked) {
        assert!(m.pen_down);
        assert!(approx_eq(m.to, expected, EPS), "{} != {}", m.to, expected);
    }

    // advance past the glyph and its spacing
    assert!(!moves[4].pen_down);
    assert!(approx_eq(moves[4].to, DVec2::new(37.5 + 15.0, 0.0), EPS));
}

#[test]
fn test_heading_and_pen_restored() {
    for (heading, pen_down) in [(0.0, true), (37.0, false), (-120.0, true), (400.0, false)] {
        let mut turtle = RecordingTurtle::at(DVec2::new(3.0, -4.0), heading);
        turtle.set_pen(pen_down);

        writer().text(&mut turtle, "Turtle Text").unwrap();

        assert_eq!(turtle.heading(), heading);
        assert_eq!(turtle.is_pen_down(), pen_down);
    }
}

#[test]
fn test_advance_matches_text_width() {
    let writer = writer();
    for heading in [0.0, 90.0, 200.0, 313.5] {
        let start = DVec2::new(10.0, 20.0);
        let mut turtle = RecordingTurtle::at(start, heading);

        writer.text(&mut turtle, "Great Seal").unwrap();

        let expected = start + rotate_deg(DVec2::new(writer.text_width("Great Seal"), 0.0), heading);
        assert!(
            approx_eq(turtle.position(), expected, 1e-6),
            "heading {heading}: {} != {}",
            turtle.position(),
            expected
        );
    }
}

#[test]
fn test_spacing_at_end_adds_one_gap() {
    let style = TextStyle::new(20.0).with_spacing(5.0).with_spacing_at_end(true);
    let writer = TextWriter::new(style);
    let mut turtle = RecordingTurtle::new();

    writer.text(&mut turtle, "AB").unwrap();

    assert!((turtle.position().x - (writer.text_width("AB") + 5.0)).abs() < 1e-6);
}

#[test]
fn test_space_never_inks() {
    for height in [5.0, 50.0, 120.0] {
        let writer = TextWriter::new(TextStyle::new(height));
        let mut turtle = RecordingTurtle::new();
        turtle.pen_up();

        writer.text(&mut turtle, "   ").unwrap();

        assert!(!turtle.is_pen_down());
        assert_eq!(turtle.drawn_segments().count(), 0);
        assert!(
            !turtle
                .commands()
                .iter()
                .any(|c| matches!(c, TurtleCommand::PenDown))
        );
    }
}

#[test]
fn test_unsupported_text_is_noop() {
    let mut turtle = RecordingTurtle::at(DVec2::ONE, 45.0);

    writer().text(&mut turtle, "123?!").unwrap();

    assert_eq!(turtle.moves().count(), 0);
    assert_eq!(turtle.position(), DVec2::ONE);
    assert_eq!(turtle.heading(), 45.0);
    assert!(turtle.is_pen_down());
}

#[test]
fn test_ink_is_case_insensitive() {
    let mut upper = RecordingTurtle::new();
    let mut mixed = RecordingTurtle::new();

    writer().text(&mut upper, "HELLO").unwrap();
    writer().text(&mut mixed, "Hello!").unwrap();

    assert_eq!(upper.commands(), mixed.commands());
}

#[test]
fn test_strokes_per_letter() {
    let mut turtle = RecordingTurtle::new();
    turtle.pen_up();

    writer().text(&mut turtle, "LIT").unwrap();

    // each letter is a single pen-down stroke
    assert_eq!(turtle.strokes().len(), 3);
}

#[test]
fn test_invalid_height_is_rejected() {
    let writer = TextWriter::new(TextStyle::new(-1.0));
    let mut turtle = RecordingTurtle::new();

    assert_eq!(
        writer.text(&mut turtle, "A"),
        Err(TurtleError::InvalidHeight(-1.0))
    );
    assert!(turtle.commands().is_empty());
}

#[test]
fn test_works_through_trait_object() {
    let mut turtle = RecordingTurtle::new();
    let agent: &mut dyn Turtle = &mut turtle;

    writer().text(agent, "Q").unwrap();

    assert!(turtle.drawn_segments().count() > 0);
}
