//! The drawing agent interface.
//!
//! Text rendering never owns the agent. It borrows anything implementing
//! [`Turtle`] for the duration of one call and drives it through these
//! primitives, so a plotter, a canvas or a [`RecordingTurtle`] can all be used.
//!
//! The agent's position, heading and pen are shared mutable state. Only one
//! render call may drive a given agent at a time.
//!
//! [`RecordingTurtle`]: crate::RecordingTurtle

use quill_core::math::{DVec2, heading_towards};

/// A position + heading + pen plotting agent.
pub trait Turtle {
    /// Current position in world units.
    fn position(&self) -> DVec2;

    /// Current heading in degrees, counter-clockwise from `+X`.
    fn heading(&self) -> f64;

    fn is_pen_down(&self) -> bool;

    /// Set the absolute heading in degrees.
    fn set_heading(&mut self, heading: f64);

    /// Move along the current heading. Negative distances move backwards.
    fn forward(&mut self, distance: f64);

    fn pen_up(&mut self);

    fn pen_down(&mut self);

    /// Put the pen into the given state.
    fn set_pen(&mut self, down: bool) {
        if down {
            self.pen_down();
        } else {
            self.pen_up();
        }
    }

    /// Rotate the heading by `delta` degrees (positive is a left turn).
    fn turn(&mut self, delta: f64) {
        let heading = self.heading();
        self.set_heading(heading + delta);
    }

    /// Heading from the current position towards `target`.
    fn towards(&self, target: DVec2) -> f64 {
        heading_towards(self.position(), target)
    }

    /// Distance from the current position to `target`.
    fn distance(&self, target: DVec2) -> f64 {
        self.position().distance(target)
    }

    /// Face `target` and move to it.
    ///
    /// A zero-length move keeps the current heading.
    fn head_to(&mut self, target: DVec2) {
        let distance = self.distance(target);
        if distance > 0.0 {
            let heading = self.towards(target);
            self.set_heading(heading);
        }
        self.forward(distance);
    }
}

impl<T: Turtle + ?Sized> Turtle for &mut T {
    fn position(&self) -> DVec2 {
        (**self).position()
    }

    fn heading(&self) -> f64 {
        (**self).heading()
    }

    fn is_pen_down(&self) -> bool {
        (**self).is_pen_down()
    }

    fn set_heading(&mut self, heading: f64) {
        (**self).set_heading(heading)
    }

    fn forward(&mut self, distance: f64) {
        (**self).forward(distance)
    }

    fn pen_up(&mut self) {
        (**self).pen_up()
    }

    fn pen_down(&mut self) {
        (**self).pen_down()
    }
}
