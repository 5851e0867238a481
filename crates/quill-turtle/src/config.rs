//! Text run configuration.

use crate::{TurtleError, TurtleResult};
use quill_glyph::{DEFAULT_HEIGHT, default_spacing};

/// Size and spacing of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Glyph height in world units.
    pub height: f64,
    /// Gap between glyphs in world units. `None` means `0.3 * height`.
    pub spacing: Option<f64>,
    /// Leave spacing after the last glyph too, e.g. when the text will be
    /// continued by another call.
    pub spacing_at_end: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            spacing: None,
            spacing_at_end: false,
        }
    }
}

impl TextStyle {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            ..Default::default()
        }
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn with_spacing_at_end(mut self, spacing_at_end: bool) -> Self {
        self.spacing_at_end = spacing_at_end;
        self
    }

    /// The effective glyph spacing.
    pub fn spacing(&self) -> f64 {
        self.spacing.unwrap_or_else(|| default_spacing(self.height))
    }

    pub fn validate(&self) -> TurtleResult<()> {
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(TurtleError::InvalidHeight(self.height));
        }
        let spacing = self.spacing();
        if !spacing.is_finite() {
            return Err(TurtleError::InvalidSpacing(spacing));
        }
        Ok(())
    }
}
