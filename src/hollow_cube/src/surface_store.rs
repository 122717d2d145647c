//! Sparse storage for the surface of a cube.
//!
//! A cube of side length `size` has `size³` cells, but only the ones with at
//! least one coordinate equal to `0` or `size - 1` are ever visible. The
//! store keeps those in a flat buffer of length `size³ - (size - 2)³` and maps
//! coordinates onto it with [`surface_index`].
//!
//! Buffer order is the naive row-major order (`y`, then `z`, then `x`) with
//! the interior cells left out.

use crate::{CubeError, Position, slice::Axis};
use std::fmt;

/// A cell address `(x, y, z)`, each component in `[0, size - 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Coord { x, y, z }
    }

    #[must_use]
    pub const fn get(self, axis: Axis) -> usize {
        match axis {
            Axis::Y => self.y,
            Axis::Z => self.z,
            Axis::X => self.x,
        }
    }

    #[must_use]
    pub const fn with(mut self, axis: Axis, value: usize) -> Self {
        match axis {
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
            Axis::X => self.x = value,
        }
        self
    }

    /// Whether at least one component lies on a face of a cube of side
    /// length `size`. Assumes every component is in range.
    #[must_use]
    pub const fn is_surface(self, size: usize) -> bool {
        !(is_interior(self.x, size) && is_interior(self.y, size) && is_interior(self.z, size))
    }
}

impl From<(usize, usize, usize)> for Coord {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Coord { x, y, z }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

const fn is_interior(value: usize, size: usize) -> bool {
    value != 0 && value + 1 != size
}

/// Number of surface cells on a cube of side length `size`.
#[must_use]
pub const fn surface_len(size: usize) -> usize {
    let interior = size.saturating_sub(2);
    size * size * size - interior * interior * interior
}

/// Maps a surface coordinate onto its buffer index.
///
/// Starts from the naive row-major index and subtracts every interior cell
/// that would have come before it: whole interior layers below `y`, interior
/// rows before `z` when `y` is an interior layer, and interior cells before
/// `x` when the row itself runs through the interior.
///
/// `coord` must already be a valid surface coordinate.
#[must_use]
pub const fn surface_index(size: usize, coord: Coord) -> usize {
    let interior = size.saturating_sub(2);
    let naive = coord.y * size * size + coord.z * size + coord.x;

    let mut skipped = interior_before(coord.y, interior) * interior * interior;
    if is_interior(coord.y, size) {
        skipped += interior_before(coord.z, interior) * interior;
        if is_interior(coord.z, size) {
            skipped += interior_before(coord.x, interior);
        }
    }

    naive - skipped
}

/// Count of interior values (`1..=interior`) strictly less than `value`.
const fn interior_before(value: usize, interior: usize) -> usize {
    let before = value.saturating_sub(1);
    if before < interior { before } else { interior }
}

pub(crate) fn check_depth(depth: usize, size: usize) -> Result<(), CubeError> {
    if depth < size {
        Ok(())
    } else {
        Err(CubeError::OutOfRange {
            position: Position::Depth(depth),
            size,
        })
    }
}

/// One value for every surface cell of a cube.
///
/// Cloning copies the buffer element by element; the index mapping depends
/// only on the size and is shared by construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceStore<T> {
    buf: Box<[T]>,
    size: usize,
}

impl<T> SurfaceStore<T> {
    /// Create a store by calling `f` once for every surface coordinate, in
    /// buffer order.
    ///
    /// # Errors
    ///
    /// If `size` is less than 2.
    pub fn from_fn(size: usize, f: impl FnMut(Coord) -> T) -> Result<Self, CubeError> {
        if size < 2 {
            return Err(CubeError::InvalidSize { size });
        }
        let buf: Box<[T]> = SurfaceCoords::new(size).map(f).collect();
        debug_assert_eq!(buf.len(), surface_len(size));
        Ok(SurfaceStore { buf, size })
    }

    /// Create a store of side length `size` filled with `T::default()`.
    ///
    /// # Errors
    ///
    /// If `size` is less than 2.
    pub fn new(size: usize) -> Result<Self, CubeError>
    where
        T: Default,
    {
        Self::from_fn(size, |_| T::default())
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Validate `coord` and return its buffer index.
    ///
    /// # Errors
    ///
    /// If any component is out of range or the cell is in the interior.
    pub fn index_of(&self, coord: Coord) -> Result<usize, CubeError> {
        let size = self.size;
        if coord.x >= size || coord.y >= size || coord.z >= size {
            return Err(CubeError::OutOfRange {
                position: Position::Coord(coord),
                size,
            });
        }
        if !coord.is_surface(size) {
            return Err(CubeError::OutOfRange {
                position: Position::Interior(coord),
                size,
            });
        }
        Ok(surface_index(size, coord))
    }

    /// # Errors
    ///
    /// See [`SurfaceStore::index_of`].
    pub fn get(&self, coord: Coord) -> Result<&T, CubeError> {
        let index = self.index_of(coord)?;
        Ok(&self.buf[index])
    }

    /// # Errors
    ///
    /// See [`SurfaceStore::index_of`].
    pub fn get_mut(&mut self, coord: Coord) -> Result<&mut T, CubeError> {
        let index = self.index_of(coord)?;
        Ok(&mut self.buf[index])
    }

    /// # Errors
    ///
    /// See [`SurfaceStore::index_of`].
    pub fn set(&mut self, coord: Coord, value: T) -> Result<(), CubeError> {
        *self.get_mut(coord)? = value;
        Ok(())
    }

    /// Every stored value in buffer order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// Every surface coordinate, in the same order as [`SurfaceStore::iter`].
    #[must_use]
    pub fn coords(&self) -> SurfaceCoords {
        SurfaceCoords::new(self.size)
    }

    /// Read the cells at pre-validated coordinates.
    pub(crate) fn gather(&self, coords: &[Coord]) -> Vec<T>
    where
        T: Clone,
    {
        coords
            .iter()
            .map(|&coord| self.buf[surface_index(self.size, coord)].clone())
            .collect()
    }

    /// Write `values` to pre-validated coordinates, pairwise.
    pub(crate) fn scatter(&mut self, coords: &[Coord], values: Vec<T>) {
        debug_assert_eq!(coords.len(), values.len());
        for (&coord, value) in coords.iter().zip(values) {
            self.buf[surface_index(self.size, coord)] = value;
        }
    }

    /// Access to a pre-validated coordinate.
    pub(crate) fn cell(&self, coord: Coord) -> &T {
        &self.buf[surface_index(self.size, coord)]
    }

    /// Mutable access to a pre-validated coordinate.
    pub(crate) fn cell_mut(&mut self, coord: Coord) -> &mut T {
        &mut self.buf[surface_index(self.size, coord)]
    }
}

impl<'a, T> IntoIterator for &'a SurfaceStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the surface coordinates of a cube in buffer order.
#[derive(Clone, Debug)]
pub struct SurfaceCoords {
    size: usize,
    next: Option<Coord>,
    remaining: usize,
}

impl SurfaceCoords {
    #[must_use]
    pub fn new(size: usize) -> Self {
        SurfaceCoords {
            size,
            next: (size > 0).then_some(Coord::new(0, 0, 0)),
            remaining: surface_len(size),
        }
    }

    fn advance(&self, Coord { x, y, z }: Coord) -> Option<Coord> {
        let size = self.size;

        // A row through the interior only has its two end cells
        if x == 0 && is_interior(y, size) && is_interior(z, size) {
            return Some(Coord::new(size - 1, y, z));
        }
        if x + 1 < size {
            return Some(Coord::new(x + 1, y, z));
        }
        if z + 1 < size {
            return Some(Coord::new(0, y, z + 1));
        }
        if y + 1 < size {
            return Some(Coord::new(0, y + 1, 0));
        }
        None
    }
}

impl Iterator for SurfaceCoords {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.next?;
        self.next = self.advance(current);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SurfaceCoords {}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn every_coord(size: usize) -> impl Iterator<Item = Coord> {
        (0..size)
            .cartesian_product(0..size)
            .cartesian_product(0..size)
            .map(move |((y, z), x)| Coord::new(x, y, z))
    }

    #[test]
    fn buffer_length() {
        assert_eq!(surface_len(2), 8);
        assert_eq!(surface_len(3), 26);
        assert_eq!(surface_len(4), 56);
        assert_eq!(surface_len(5), 98);
        for size in 2..8 {
            assert_eq!(SurfaceStore::<u8>::new(size).unwrap().len(), surface_len(size));
        }
    }

    #[test]
    fn index_is_a_bijection() {
        for size in 2..=7 {
            let indices = every_coord(size)
                .filter(|coord| coord.is_surface(size))
                .map(|coord| surface_index(size, coord))
                .collect_vec();
            assert_eq!(indices.len(), surface_len(size));
            // strictly increasing in naive order means no collisions and no gaps
            assert_eq!(indices, (0..surface_len(size)).collect_vec());
        }
    }

    #[test]
    fn coords_follow_buffer_order() {
        for size in 2..=7 {
            let coords = SurfaceCoords::new(size).collect_vec();
            assert_eq!(coords.len(), surface_len(size));
            for (i, &coord) in coords.iter().enumerate() {
                assert!(coord.is_surface(size));
                assert_eq!(surface_index(size, coord), i);
            }
        }
    }

    #[test]
    fn get_after_set() {
        for size in 2..=6 {
            let mut store = SurfaceStore::<usize>::new(size).unwrap();
            for (i, coord) in store.coords().enumerate() {
                store.set(coord, i * 7 + 1).unwrap();
            }
            for (i, coord) in store.coords().enumerate() {
                assert_eq!(*store.get(coord).unwrap(), i * 7 + 1);
            }
            assert_eq!(
                store.iter().copied().collect_vec(),
                (0..store.len()).map(|i| i * 7 + 1).collect_vec()
            );
        }
    }

    #[test]
    fn rejects_interior_and_out_of_bounds() {
        let mut store = SurfaceStore::<u8>::new(4).unwrap();
        let interior = Coord::new(1, 2, 1);
        assert_eq!(
            store.get(interior),
            Err(CubeError::OutOfRange {
                position: Position::Interior(interior),
                size: 4
            })
        );
        let outside = Coord::new(0, 4, 0);
        assert_eq!(
            store.set(outside, 1),
            Err(CubeError::OutOfRange {
                position: Position::Coord(outside),
                size: 4
            })
        );
        assert!(store.get(Coord::new(1, 2, 3)).is_ok());
    }

    #[test]
    fn small_sizes_are_rejected() {
        assert_eq!(
            SurfaceStore::<u8>::new(1),
            Err(CubeError::InvalidSize { size: 1 })
        );
        assert_eq!(
            SurfaceStore::<u8>::new(0),
            Err(CubeError::InvalidSize { size: 0 })
        );
    }

    #[test]
    fn clone_is_independent() {
        let mut store = SurfaceStore::from_fn(3, |coord| coord.x + coord.y + coord.z).unwrap();
        let copy = store.clone();
        store.set(Coord::new(0, 0, 0), 100).unwrap();
        assert_eq!(*copy.get(Coord::new(0, 0, 0)).unwrap(), 0);
        assert_eq!(*store.get(Coord::new(0, 0, 0)).unwrap(), 100);
    }

    #[test]
    fn enumeration_is_restartable() {
        let store = SurfaceStore::from_fn(4, surface_index_of_4).unwrap();
        let first = store.iter().copied().collect_vec();
        let second = (&store).into_iter().copied().collect_vec();
        assert_eq!(first, second);
        assert_eq!(first, (0..store.len()).collect_vec());
    }

    fn surface_index_of_4(coord: Coord) -> usize {
        surface_index(4, coord)
    }
}
