use crate::CubeError;
use std::ops::{Index, IndexMut};

/// A square matrix stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SquareMatrix<T> {
    size: usize,
    data: Vec<T>,
}

impl<T> SquareMatrix<T> {
    /// Reshape a flat row-major sequence into a `size` × `size` matrix.
    ///
    /// # Errors
    ///
    /// If `data` does not hold exactly `size * size` values.
    pub fn from_flat(size: usize, data: Vec<T>) -> Result<Self, CubeError> {
        if data.len() != size * size {
            return Err(CubeError::ShapeMismatch {
                expected: size * size,
                actual: data.len(),
            });
        }
        Ok(SquareMatrix { size, data })
    }

    /// `data` must hold exactly `size * size` values.
    pub(crate) fn from_flat_unchecked(size: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), size * size);
        SquareMatrix { size, data }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[must_use]
    pub fn into_flat(self) -> Vec<T> {
        self.data
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.data.get(row * self.size + col)
        } else {
            None
        }
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.size.max(1))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SquareMatrix<U> {
        SquareMatrix {
            size: self.size,
            data: self.data.into_iter().map(f).collect(),
        }
    }

    #[must_use]
    pub fn transposed(mut self) -> Self {
        let n = self.size;
        for row in 0..n {
            for col in row + 1..n {
                self.data.swap(row * n + col, col * n + row);
            }
        }
        self
    }

    /// Reverse the order of the items within each row.
    #[must_use]
    pub fn reverse_rows(mut self) -> Self {
        for row in self.data.chunks_exact_mut(self.size.max(1)) {
            row.reverse();
        }
        self
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.size && col < self.size);
        &self.data[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.size && col < self.size);
        &mut self.data[row * self.size + col]
    }
}
