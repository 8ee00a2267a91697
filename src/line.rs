use crate::vector::{Axis, Vector};

/// A line through `l0`, pointing along `l`.
///
/// `l_prime` is the raw second defining point; rotating the line around
/// another line needs it to rebuild the result from two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub l0: Vector,
    pub l: Vector,
    pub l_prime: Vector,
}

impl Line {
    /// The direction `l` is always recomputed as `l_prime - l0`.
    pub fn through_points(l0: Vector, l_prime: Vector) -> Self {
        Self {
            l0,
            l: l_prime - l0,
            l_prime,
        }
    }

    pub(crate) fn at_coord(&self, coord: f64) -> Vector {
        self.l * coord + self.l0
    }

    /// Turns the direction about the x-axis by `alpha` degrees, then about
    /// the z-axis by `beta` degrees. Only positive angles are applied; the
    /// base point never moves.
    pub fn rotate(&mut self, alpha: f64, beta: f64) {
        if alpha > 0.0 {
            self.l = self.l.rotate(Axis::X, alpha);
        }
        if beta > 0.0 {
            self.l = self.l.rotate(Axis::Z, beta);
        }
    }

    /// Rotates both defining points around `axis` and rebuilds the line, or
    /// `None` when the axis direction has zero length.
    pub fn rotate_around_line(&self, axis: &Line, angle: f64) -> Option<Line> {
        Some(Line::through_points(
            self.l0.rotate_around_line(axis, angle)?,
            self.l_prime.rotate_around_line(axis, angle)?,
        ))
    }
}
