//! Quill - block-letter text for turtle-style plotters
//!
//! Quill turns uppercase text into pen moves for any agent that has a position,
//! a heading and a pen. It provides:
//!
//! - **Glyphs**: single-stroke block letters `A`-`Z` plus space
//! - **Metrics**: glyph and text widths at any height
//! - **Straight text**: drawn along the agent's current heading
//! - **Arc text**: drawn along a circle, with a solver for the radius that fits
//!   text into a given angle
//!
//! # Quick Start
//!
//! ```
//! use quill::prelude::*;
//!
//! let writer = TextWriter::new(TextStyle::new(40.0));
//! let mut turtle = RecordingTurtle::new();
//! turtle.pen_up();
//!
//! writer.text(&mut turtle, "Hello").unwrap();
//!
//! for stroke in turtle.strokes() {
//!     // hand each polyline to a plotter
//!     assert!(stroke.len() >= 2);
//! }
//! ```
//!
//! Any type implementing [`Turtle`](prelude::Turtle) can stand in for
//! `RecordingTurtle`; rendering only goes through that trait.

pub use quill_core as core;
pub use quill_core::{logging, math};
pub use quill_glyph as glyph;
pub use quill_turtle as turtle;

pub mod prelude {
    pub use quill_core::math::{DVec2, dvec2};
    pub use quill_glyph::{Glyph, filter_text, text_width};
    pub use quill_turtle::{
        ArcFit, RecordingTurtle, TextStyle, TextWriter, Turtle, TurtleCommand, TurtleError,
        TurtleResult,
    };
}
