/// Errors that can occur while laying text onto a baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurtleError {
    /// A chord is longer than the diameter of the arc it should be inscribed in.
    ChordTooLong { segment_length: f64, radius: f64 },

    /// Arc radius is zero or not a finite number.
    InvalidRadius(f64),

    /// Target angular extent is zero or not a finite number.
    InvalidExtent(f64),

    /// There is nothing to fit: the text has no drawable characters.
    EmptyText,

    /// Text height is not a positive finite number.
    InvalidHeight(f64),

    /// Glyph spacing is not a finite number.
    InvalidSpacing(f64),
}

impl std::fmt::Display for TurtleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurtleError::ChordTooLong {
                segment_length,
                radius,
            } => write!(
                f,
                "Segment of length {} does not fit in an arc of radius {}",
                segment_length, radius
            ),
            TurtleError::InvalidRadius(radius) => write!(f, "Invalid arc radius: {}", radius),
            TurtleError::InvalidExtent(extent) => write!(f, "Invalid arc extent: {}", extent),
            TurtleError::EmptyText => write!(f, "Text has no drawable characters"),
            TurtleError::InvalidHeight(height) => write!(f, "Invalid text height: {}", height),
            TurtleError::InvalidSpacing(spacing) => {
                write!(f, "Invalid glyph spacing: {}", spacing)
            }
        }
    }
}

impl std::error::Error for TurtleError {}

/// Result type for turtle text operations.
pub type TurtleResult<T> = Result<T, TurtleError>;
