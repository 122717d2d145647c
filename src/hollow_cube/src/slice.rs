//! Turn descriptors: which plane of cubelets moves, and which way.

use crate::{CubeError, slice_view::is_face_depth};
use std::fmt;

/// One of the three coordinate axes, numbered the way slices are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Y = 0,
    Z = 1,
    X = 2,
}

impl Axis {
    pub const ALL: [Self; 3] = {
        use Axis::*;
        let v = [Y, Z, X];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Axis::Y => 'Y',
            Axis::Z => 'Z',
            Axis::X => 'X',
        }
    }

    /// The `(row, column)` axes of a slice perpendicular to this axis.
    ///
    /// Slice extraction, write-back and face rotation all go through this
    /// pairing. It is chosen so that a clockwise turn about every axis moves
    /// the cells the same way the orientation cycle in
    /// [`Cubelet::rotate`](crate::Cubelet::rotate) moves their stickers.
    #[must_use]
    pub const fn plane(self) -> (Axis, Axis) {
        match self {
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::Y, Axis::X),
            Axis::X => (Axis::Z, Axis::Y),
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = CubeError;

    fn try_from(axis: usize) -> Result<Self, Self::Error> {
        Axis::ALL
            .get(axis)
            .copied()
            .ok_or(CubeError::InvalidAxis { axis })
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    #[must_use]
    pub const fn is_clockwise(self) -> bool {
        matches!(self, Direction::Clockwise)
    }
}

/// `true` is a clockwise turn.
impl From<bool> for Direction {
    fn from(clockwise: bool) -> Self {
        if clockwise {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }
}

/// A quarter turn of the square plane of cubelets perpendicular to `axis` at
/// coordinate `depth`.
///
/// On a 4x4 cube the slice directly beneath the `Y = 0` face is
/// `Slice { axis: Axis::Y, depth: 1, .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slice {
    pub axis: Axis,
    pub depth: usize,
    pub direction: Direction,
}

impl Slice {
    #[must_use]
    pub const fn new(axis: Axis, depth: usize, direction: Direction) -> Self {
        Slice {
            axis,
            depth,
            direction,
        }
    }

    /// The same slice turned the other way.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Slice {
            direction: self.direction.inverse(),
            ..self
        }
    }

    /// Whether this slice is a full face rather than a hollow ring.
    #[must_use]
    pub const fn is_face(self, size: usize) -> bool {
        is_face_depth(self.depth, size)
    }
}

/// Formats as `<axis><depth>`, with a trailing `'` when counter-clockwise.
impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis, self.depth)?;
        if !self.direction.is_clockwise() {
            write!(f, "'")?;
        }
        Ok(())
    }
}
