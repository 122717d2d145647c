//! A state engine for N×N×N twisty cubes.
//!
//! Only the surface of the cube is stored: a [`SurfaceStore`] keeps one value
//! per cell that has at least one coordinate on a face, and never allocates
//! the interior. Turning a slice pulls its cells out in a fixed order, rotates
//! them (see [`rotation`]), writes them back and then relabels the faces of
//! every [`Cubelet`] that moved so that each sticker keeps pointing out of the
//! face it is currently on.
//!
//! Axes are numbered as `0 = Y`, `1 = Z`, `2 = X` throughout.

#![warn(clippy::pedantic)]

pub mod cube;
pub mod cubelet;
pub mod matrix;
pub mod notation;
pub mod rotation;
pub mod slice;
pub mod slice_view;
pub mod surface_store;

pub use cube::Cube;
pub use cubelet::{Cubelet, Face, Sign};
pub use matrix::SquareMatrix;
pub use notation::{NotationError, format_sequence, parse_sequence};
pub use slice::{Axis, Direction, Slice};
pub use slice_view::SliceShape;
pub use surface_store::{Coord, SurfaceCoords, SurfaceStore};

use std::fmt;
use thiserror::Error;

/// Default number of random turns in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("{position} is out of range for a cube of size {size}")]
    OutOfRange { position: Position, size: usize },
    #[error("Invalid axis {axis}, expected 0 (Y), 1 (Z) or 2 (X)")]
    InvalidAxis { axis: usize },
    #[error("Slice data has the wrong length, expected {expected} cells but got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("Depth {depth} is a hollow ring and has no 2D shape on a cube of size {size}")]
    NotSupported { depth: usize, size: usize },
    #[error("A cube must have a side length of at least 2, got {size}")]
    InvalidSize { size: usize },
}

/// What was out of range in a [`CubeError::OutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// A component of the coordinate is not in `[0, size - 1]`.
    Coord(Coord),
    /// Every component is strictly inside the cube, so the cell is not stored.
    Interior(Coord),
    /// A slice depth is not in `[0, size - 1]`.
    Depth(usize),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Coord(coord) => write!(f, "Coordinate {coord}"),
            Position::Interior(coord) => write!(f, "Interior coordinate {coord}"),
            Position::Depth(depth) => write!(f, "Depth {depth}"),
        }
    }
}
