//! Quill Turtle - block text for turtle-style plotters
//!
//! This crate lays the [`quill_glyph`] letters out for any agent implementing
//! [`Turtle`]:
//! - Straight baselines along the agent's heading
//! - Circular baselines of a signed radius
//! - Solving the radius that fits text into a given arc
//!
//! # Example
//!
//! ```
//! use quill_turtle::{RecordingTurtle, TextStyle, TextWriter, Turtle};
//!
//! let writer = TextWriter::new(TextStyle::default());
//! let mut turtle = RecordingTurtle::new();
//! turtle.pen_up();
//!
//! // half circle, clockwise
//! let radius = writer.radius_for_extent("QUILL", 180.0, true).unwrap();
//! writer.text_circle(&mut turtle, "QUILL", Some(radius)).unwrap();
//!
//! assert!(!turtle.is_pen_down());
//! assert!(turtle.drawn_segments().count() > 0);
//! ```

mod error;
mod recorder;
mod turtle;

pub mod arc;
pub mod baseline;
pub mod config;
pub mod fit;
pub mod writer;

pub use error::*;
pub use recorder::*;
pub use turtle::*;

pub use arc::{heading_delta, set_arc_segment_heading};
pub use baseline::{draw_glyph, letter_to_baseline};
pub use config::TextStyle;
pub use fit::{ArcFit, radius_for_extent, solve_radius, text_circle_extent};
pub use writer::TextWriter;
