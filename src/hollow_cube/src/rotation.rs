//! Quarter-turn rotation of slice contents.
//!
//! A ring turns by shifting a whole side, `size - 1` cells, around the
//! sequence. A face turns as a square matrix: transpose then reverse each row
//! for clockwise, reverse each row then transpose for counter-clockwise.
//!
//! Input lengths are validated when the slice is read, so nothing here fails.

use crate::{SquareMatrix, slice::Direction, slice_view::SliceShape};

/// Rotate a clockwise-ordered ring of a cube of side length `size`.
#[must_use]
pub fn rotate_ring<T>(mut ring: Vec<T>, size: usize, direction: Direction) -> Vec<T> {
    let side = size - 1;
    debug_assert_eq!(ring.len(), 4 * side);
    match direction {
        // the last side moves to the front
        Direction::Clockwise => ring.rotate_right(side),
        Direction::CounterClockwise => ring.rotate_left(side),
    }
    ring
}

#[must_use]
pub fn rotate_face<T>(face: SquareMatrix<T>, direction: Direction) -> SquareMatrix<T> {
    match direction {
        Direction::Clockwise => face.transposed().reverse_rows(),
        Direction::CounterClockwise => face.reverse_rows().transposed(),
    }
}

#[must_use]
pub fn rotate<T>(shape: SliceShape<T>, size: usize, direction: Direction) -> SliceShape<T> {
    match shape {
        SliceShape::Ring(ring) => SliceShape::Ring(rotate_ring(ring, size, direction)),
        SliceShape::Face(face) => SliceShape::Face(rotate_face(face, direction)),
    }
}
