//! A text style bundled with the operations that use it.

use crate::{
    ArcFit, TextStyle, Turtle, TurtleResult,
    arc::draw_text_circle,
    baseline::draw_text,
    fit::{FULL_CIRCLE, solve_radius, text_circle_extent},
};
use quill_glyph::text_width;

/// Draws block text with any [`Turtle`].
///
/// # Example
///
/// ```
/// use quill_turtle::{RecordingTurtle, TextStyle, TextWriter, Turtle};
///
/// let writer = TextWriter::new(TextStyle::new(40.0));
/// let mut turtle = RecordingTurtle::new();
///
/// writer.text(&mut turtle, "hello").unwrap();
/// assert!(turtle.is_pen_down());
/// assert!((turtle.position().x - writer.text_width("hello")).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextWriter {
    style: TextStyle,
}

impl TextWriter {
    pub fn new(style: TextStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut TextStyle {
        &mut self.style
    }

    /// Draw `text` along the agent's heading.
    pub fn text<T: Turtle + ?Sized>(&self, agent: &mut T, text: &str) -> TurtleResult<()> {
        draw_text(agent, text, &self.style)
    }

    /// Draw `text` on an arc of signed `radius`, or around a full circle when
    /// `radius` is `None`.
    ///
    /// Positive radii curve left (counter-clockwise), negative radii right.
    pub fn text_circle<T: Turtle + ?Sized>(
        &self,
        agent: &mut T,
        text: &str,
        radius: Option<f64>,
    ) -> TurtleResult<()> {
        draw_text_circle(agent, text, radius, &self.style)
    }

    /// Straight-baseline width of `text`.
    pub fn text_width(&self, text: &str) -> f64 {
        text_width(text, self.style.height, Some(self.style.spacing()))
    }

    /// Angle swept by `text` on an arc of `radius`. See [`text_circle_extent`].
    ///
    /// `spacing_at_end` replaces the writer's own setting for this call only.
    pub fn text_circle_extent(&self, text: &str, radius: f64, spacing_at_end: bool) -> TurtleResult<f64> {
        let style = self.style.with_spacing_at_end(spacing_at_end);
        text_circle_extent(text, radius, &style)
    }

    /// Radius at which `text` sweeps `extent` degrees. See [`solve_radius`].
    pub fn radius_for_extent(&self, text: &str, extent: f64, spacing_at_end: bool) -> TurtleResult<f64> {
        self.solve_radius(text, extent, spacing_at_end).map(|fit| fit.radius)
    }

    /// Radius for a full circle with trailing spacing.
    pub fn radius_for_circle(&self, text: &str) -> TurtleResult<f64> {
        self.radius_for_extent(text, FULL_CIRCLE, true)
    }

    pub fn solve_radius(&self, text: &str, extent: f64, spacing_at_end: bool) -> TurtleResult<ArcFit> {
        let style = self.style.with_spacing_at_end(spacing_at_end);
        solve_radius(text, extent, &style)
    }
}

impl From<TextStyle> for TextWriter {
    fn from(style: TextStyle) -> Self {
        Self::new(style)
    }
}
