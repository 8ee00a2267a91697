use thiserror::Error;

use crate::{intersect::IntersectFrom, line::Line, vector::Vector};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaneError {
    #[error("cannot construct plane: direction vectors are linearly dependent")]
    LinearlyDependentDirections,
}

/// A plane in normal form: the points `p` with `(p - p0) . n == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub p0: Vector,
    pub n: Vector,
}

impl Plane {
    /// Builds the plane through three points. The normal is `r2 x r1` (second
    /// direction crossed with first), which fixes its orientation.
    pub fn through_points(p0: Vector, a: Vector, b: Vector) -> Result<Self, PlaneError> {
        let r1 = a - p0;
        let r2 = b - p0;
        if r1.is_linearly_dependent_on(&r2) {
            return Err(PlaneError::LinearlyDependentDirections);
        }
        Ok(Self {
            p0,
            n: r2.cross(&r1),
        })
    }
}

impl IntersectFrom<Line> for Plane {
    type Intersection = Option<Vector>;

    fn intersect_from(&self, line: &Line) -> Self::Intersection {
        let a = (self.p0 - line.l0).dot(&self.n);
        let b = line.l.dot(&self.n);
        // a == 0: the base point offset has no normal component;
        // b == 0: the direction runs parallel to the plane.
        // Both tests are exact, there is no tolerance.
        if a == 0.0 || b == 0.0 {
            return None;
        }
        Some(line.at_coord(a / b))
    }
}
