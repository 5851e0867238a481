//! A headless turtle that records what it was asked to do.

use crate::Turtle;
use quill_core::math::{DVec2, direction};

/// Tolerance used when deciding whether two moves join into one stroke.
const JOIN_EPSILON: f64 = 1e-9;

/// A straight move of the pen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub from: DVec2,
    pub to: DVec2,
    /// Whether the pen was down, i.e. whether this move leaves ink.
    pub pen_down: bool,
}

impl Move {
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

/// A recorded call on a [`RecordingTurtle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurtleCommand {
    SetHeading(f64),
    PenUp,
    PenDown,
    Move(Move),
}

/// A [`Turtle`] that draws nothing and keeps a log of every command.
///
/// Starts like a fresh turtle: at the origin, heading `0`, pen down.
///
/// # Example
///
/// ```
/// use quill_turtle::{RecordingTurtle, Turtle};
///
/// let mut turtle = RecordingTurtle::new();
/// turtle.forward(10.0);
/// turtle.pen_up();
/// turtle.forward(5.0);
///
/// assert_eq!(turtle.drawn_segments().count(), 1);
/// assert_eq!(turtle.moves().count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingTurtle {
    position: DVec2,
    heading: f64,
    pen_down: bool,
    commands: Vec<TurtleCommand>,
}

impl Default for RecordingTurtle {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingTurtle {
    pub fn new() -> Self {
        Self::at(DVec2::ZERO, 0.0)
    }

    /// Start at `position` facing `heading`, pen down.
    pub fn at(position: DVec2, heading: f64) -> Self {
        Self {
            position,
            heading,
            pen_down: true,
            commands: Vec::new(),
        }
    }

    /// Every command in call order.
    pub fn commands(&self) -> &[TurtleCommand] {
        &self.commands
    }

    /// Every move, inked or not.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.commands.iter().filter_map(|command| match command {
            TurtleCommand::Move(m) => Some(m),
            _ => None,
        })
    }

    /// Only the moves made with the pen down.
    pub fn drawn_segments(&self) -> impl Iterator<Item = &Move> {
        self.moves().filter(|m| m.pen_down)
    }

    /// Inked moves joined into polylines.
    ///
    /// A stroke ends at a pen-up move or wherever the next inked move does not
    /// start at the previous one's end.
    pub fn strokes(&self) -> Vec<Vec<DVec2>> {
        let mut strokes = Vec::new();
        let mut current: Vec<DVec2> = Vec::new();

        for m in self.moves() {
            if !m.pen_down {
                if current.len() > 1 {
                    strokes.push(std::mem::take(&mut current));
                }
                current.clear();
                continue;
            }

            let joined = current
                .last()
                .is_some_and(|last| last.distance(m.from) <= JOIN_EPSILON);
            if !joined {
                if current.len() > 1 {
                    strokes.push(std::mem::take(&mut current));
                }
                current.clear();
                current.push(m.from);
            }
            current.push(m.to);
        }

        if current.len() > 1 {
            strokes.push(current);
        }
        strokes
    }

    /// Total length of ink laid down.
    pub fn ink_length(&self) -> f64 {
        self.drawn_segments().map(Move::length).sum()
    }

    /// Forget recorded commands, keeping position, heading and pen.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Turtle for RecordingTurtle {
    fn position(&self) -> DVec2 {
        self.position
    }

    fn heading(&self) -> f64 {
        self.heading
    }

    fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    fn set_heading(&mut self, heading: f64) {
        self.heading = heading;
        self.commands.push(TurtleCommand::SetHeading(heading));
    }

    fn forward(&mut self, distance: f64) {
        let from = self.position;
        let to = from + direction(self.heading) * distance;
        self.position = to;
        self.commands.push(TurtleCommand::Move(Move {
            from,
            to,
            pen_down: self.pen_down,
        }));
    }

    fn pen_up(&mut self) {
        self.pen_down = false;
        self.commands.push(TurtleCommand::PenUp);
    }

    fn pen_down(&mut self) {
        self.pen_down = true;
        self.commands.push(TurtleCommand::PenDown);
    }
}
