//! Ordered views of the planes of a [`SurfaceStore`].
//!
//! A slice at depth `0` or `size - 1` is a full face and is read row-major:
//! rows follow the first axis of [`Axis::plane`], columns the second. Any
//! other depth only meets the surface along its perimeter, so it is read as a
//! ring of `4 * (size - 1)` cells in clockwise order, starting at
//! `(row, col) = (0, 0)`. Each side of the ring contributes `size - 1` cells
//! and starts at its corner:
//!
//! ```text
//! (0, 0) ──▶ (0, n-2)   (0, n-1) ──▶ (n-2, n-1)
//! (n-1, n-1) ──▶ (n-1, 1)   (n-1, 0) ──▶ (1, 0)
//! ```
//!
//! Reads and writes share [`plane_coords`], so they can never disagree about
//! the ordering.

use crate::{
    CubeError, SquareMatrix,
    slice::Axis,
    surface_store::{Coord, SurfaceStore, check_depth},
};

/// The contents of a slice, shaped by whether the slice is a face or a ring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SliceShape<T> {
    /// A hollow slice, in clockwise order.
    Ring(Vec<T>),
    /// A full face, row-major.
    Face(SquareMatrix<T>),
}

impl<T> SliceShape<T> {
    /// Shape flat slice data according to `depth` alone.
    ///
    /// # Errors
    ///
    /// If `depth` is out of range, or `values` has the wrong length for it.
    pub fn from_flat(values: Vec<T>, depth: usize, size: usize) -> Result<Self, CubeError> {
        check_depth(depth, size)?;
        if is_face_depth(depth, size) {
            Ok(SliceShape::Face(SquareMatrix::from_flat(size, values)?))
        } else {
            check_len(&values, ring_len(size))?;
            Ok(SliceShape::Ring(values))
        }
    }

    #[must_use]
    pub fn into_flat(self) -> Vec<T> {
        match self {
            SliceShape::Ring(ring) => ring,
            SliceShape::Face(face) => face.into_flat(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            SliceShape::Ring(ring) => ring.len(),
            SliceShape::Face(face) => face.as_slice().len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[must_use]
pub const fn is_face_depth(depth: usize, size: usize) -> bool {
    depth == 0 || depth + 1 == size
}

#[must_use]
pub const fn ring_len(size: usize) -> usize {
    4 * (size - 1)
}

/// Number of cells in the slice at `depth`.
#[must_use]
pub const fn slice_len(depth: usize, size: usize) -> usize {
    if is_face_depth(depth, size) {
        size * size
    } else {
        ring_len(size)
    }
}

fn check_len<T>(values: &[T], expected: usize) -> Result<(), CubeError> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(CubeError::ShapeMismatch {
            expected,
            actual: values.len(),
        })
    }
}

/// `(row, col)` of the `i`th cell of a clockwise ring.
fn ring_position(i: usize, size: usize) -> (usize, usize) {
    let last = size - 1;
    let k = i % last;
    match i / last {
        0 => (0, k),
        1 => (k, last),
        2 => (last, last - k),
        _ => (last - k, 0),
    }
}

/// The coordinates of a slice in slice order. `depth` must be in range.
#[must_use]
pub fn plane_coords(depth: usize, axis: Axis, size: usize) -> Vec<Coord> {
    let (row_axis, col_axis) = axis.plane();
    let at = |row: usize, col: usize| {
        Coord::default()
            .with(axis, depth)
            .with(row_axis, row)
            .with(col_axis, col)
    };

    if is_face_depth(depth, size) {
        (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .map(|(row, col)| at(row, col))
            .collect()
    } else {
        (0..ring_len(size))
            .map(|i| ring_position(i, size))
            .map(|(row, col)| at(row, col))
            .collect()
    }
}

impl<T> SurfaceStore<T> {
    #[must_use]
    pub fn is_face_depth(&self, depth: usize) -> bool {
        is_face_depth(depth, self.size())
    }

    /// The coordinates of the slice at `depth` along `axis`, in the same order
    /// [`SurfaceStore::get_slice`] returns its values.
    ///
    /// # Errors
    ///
    /// If `depth` is out of range.
    pub fn slice_coords(&self, depth: usize, axis: Axis) -> Result<Vec<Coord>, CubeError> {
        check_depth(depth, self.size())?;
        Ok(plane_coords(depth, axis, self.size()))
    }

    /// Read a slice: a face row-major, a ring clockwise.
    ///
    /// # Errors
    ///
    /// If `depth` is out of range.
    pub fn get_slice(&self, depth: usize, axis: Axis) -> Result<Vec<T>, CubeError>
    where
        T: Clone,
    {
        let coords = self.slice_coords(depth, axis)?;
        Ok(self.gather(&coords))
    }

    /// Write a slice back in the order [`SurfaceStore::get_slice`] reads it.
    ///
    /// # Errors
    ///
    /// If `depth` is out of range or `values` does not have `size²` values for
    /// a face or `4 * (size - 1)` for a ring. Nothing is written on error.
    pub fn set_slice(&mut self, values: Vec<T>, depth: usize, axis: Axis) -> Result<(), CubeError> {
        check_depth(depth, self.size())?;
        check_len(&values, slice_len(depth, self.size()))?;
        let coords = plane_coords(depth, axis, self.size());
        self.scatter(&coords, values);
        Ok(())
    }

    /// Read a face as a matrix.
    ///
    /// # Errors
    ///
    /// If `depth` is out of range, or [`CubeError::NotSupported`] if it names a
    /// ring.
    pub fn get_2d_slice(&self, depth: usize, axis: Axis) -> Result<SquareMatrix<T>, CubeError>
    where
        T: Clone,
    {
        self.check_face(depth)?;
        SquareMatrix::from_flat(self.size(), self.get_slice(depth, axis)?)
    }

    /// Write a face from a matrix.
    ///
    /// # Errors
    ///
    /// As [`SurfaceStore::get_2d_slice`], plus [`CubeError::ShapeMismatch`]
    /// if the matrix is not `size` × `size`.
    pub fn set_2d_slice(
        &mut self,
        face: SquareMatrix<T>,
        depth: usize,
        axis: Axis,
    ) -> Result<(), CubeError> {
        self.check_face(depth)?;
        self.set_slice(face.into_flat(), depth, axis)
    }

    /// Read a slice as a face or a ring, decided by `depth`.
    ///
    /// # Errors
    ///
    /// If `depth` is out of range.
    pub fn slice_shape(&self, depth: usize, axis: Axis) -> Result<SliceShape<T>, CubeError>
    where
        T: Clone,
    {
        SliceShape::from_flat(self.get_slice(depth, axis)?, depth, self.size())
    }

    /// # Errors
    ///
    /// If `depth` is out of range, or the shape does not match the one
    /// `depth` calls for.
    pub fn set_slice_shape(
        &mut self,
        shape: SliceShape<T>,
        depth: usize,
        axis: Axis,
    ) -> Result<(), CubeError> {
        match shape {
            SliceShape::Face(face) => self.set_2d_slice(face, depth, axis),
            SliceShape::Ring(ring) => {
                check_depth(depth, self.size())?;
                if self.is_face_depth(depth) {
                    return Err(CubeError::ShapeMismatch {
                        expected: slice_len(depth, self.size()),
                        actual: ring.len(),
                    });
                }
                self.set_slice(ring, depth, axis)
            }
        }
    }

    fn check_face(&self, depth: usize) -> Result<(), CubeError> {
        check_depth(depth, self.size())?;
        if self.is_face_depth(depth) {
            Ok(())
        } else {
            Err(CubeError::NotSupported {
                depth,
                size: self.size(),
            })
        }
    }
}
