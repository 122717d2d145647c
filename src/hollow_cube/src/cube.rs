use crate::{
    CubeError, SquareMatrix,
    cubelet::{Cubelet, Face},
    rotation,
    slice::{Axis, Direction, Slice},
    slice_view::{SliceShape, plane_coords},
    surface_store::{Coord, SurfaceStore, check_depth},
};
use itertools::Itertools;
use log::{debug, info, trace};

/// An N×N×N cube of [`Cubelet`]s.
///
/// Every turn is applied completely before the call returns. The cube keeps
/// the history of every turn made on it, and separately the turns made by
/// [`Cube::scramble`] so that [`Cube::solve`] can undo them.
#[derive(Clone, Debug)]
pub struct Cube {
    cubelets: SurfaceStore<Cubelet>,
    history: Vec<Slice>,
    scramble: Vec<Slice>,
}

impl Cube {
    /// Create a solved cube of side length `size`.
    ///
    /// # Errors
    ///
    /// If `size` is less than 2.
    pub fn new(size: usize) -> Result<Self, CubeError> {
        let mut cubelets = SurfaceStore::from_fn(size, Cubelet::new)?;
        for (coord, cubelet) in cubelets.coords().zip(cubelets.iter_mut()) {
            for face in Face::containing(coord, size) {
                cubelet.add_face(face);
            }
        }

        debug!(target: "cube", "Created cube: size={size} cubelets={}", cubelets.len());
        Ok(Cube {
            cubelets,
            history: Vec::new(),
            scramble: Vec::new(),
        })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cubelets.size()
    }

    #[must_use]
    pub fn cubelets(&self) -> &SurfaceStore<Cubelet> {
        &self.cubelets
    }

    /// # Errors
    ///
    /// If `coord` is out of range or in the interior of the cube.
    pub fn cubelet(&self, coord: impl Into<Coord>) -> Result<&Cubelet, CubeError> {
        self.cubelets.get(coord.into())
    }

    /// Every turn applied since creation or the last [`Cube::clear_history`].
    #[must_use]
    pub fn history(&self) -> &[Slice] {
        &self.history
    }

    /// The scramble turns that [`Cube::solve`] would undo.
    #[must_use]
    pub fn pending_scramble(&self) -> &[Slice] {
        &self.scramble
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Turn the slice perpendicular to `axis` at `depth` by a quarter turn.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidAxis`] if `axis` is not 0, 1 or 2, and
    /// [`CubeError::OutOfRange`] if `depth` is not less than the size. The
    /// cube is unchanged on error.
    pub fn turn(
        &mut self,
        axis: usize,
        direction: impl Into<Direction>,
        depth: usize,
    ) -> Result<(), CubeError> {
        let axis = Axis::try_from(axis)?;
        self.apply(Slice::new(axis, depth, direction.into()))
    }

    /// # Errors
    ///
    /// If the slice depth is out of range. The cube is unchanged on error.
    pub fn apply(&mut self, slice: Slice) -> Result<(), CubeError> {
        check_depth(slice.depth, self.size())?;
        self.apply_in_range(slice);
        Ok(())
    }

    /// Apply each slice in order.
    ///
    /// # Errors
    ///
    /// If any slice is out of range. Every slice is checked before the first
    /// one is applied.
    pub fn apply_all(&mut self, slices: &[Slice]) -> Result<(), CubeError> {
        for slice in slices {
            check_depth(slice.depth, self.size())?;
        }
        for &slice in slices {
            self.apply_in_range(slice);
        }
        Ok(())
    }

    fn apply_in_range(&mut self, slice: Slice) {
        let size = self.size();
        let coords = plane_coords(slice.depth, slice.axis, size);

        let contents = self.cubelets.gather(&coords);
        let shape = if slice.is_face(size) {
            SliceShape::Face(SquareMatrix::from_flat_unchecked(size, contents))
        } else {
            SliceShape::Ring(contents)
        };
        let rotated = rotation::rotate(shape, size, slice.direction).into_flat();
        self.cubelets.scatter(&coords, rotated);
        self.history.push(slice);

        // The coordinate set of a slice is the same before and after the turn
        for &coord in &coords {
            let cubelet = self.cubelets.cell_mut(coord);
            cubelet.rotate(slice.axis, slice.direction);
            trace!(target: "turn", "Relabelled cubelet: at={coord} home={}", cubelet.home());
        }

        debug!(
            target: "turn",
            "Turned {slice}: axis={:?} depth={} direction={:?} cells={}",
            slice.axis,
            slice.depth,
            slice.direction,
            coords.len(),
        );
    }

    /// Make `count` uniformly random turns using a fresh generator.
    pub fn scramble(&mut self, count: usize) -> Vec<Slice> {
        self.scramble_with(&mut fastrand::Rng::new(), count)
    }

    /// Make `count` uniformly random turns drawn from `rng` and remember them
    /// for [`Cube::solve`]. Returns the turns in the order they were made.
    pub fn scramble_with(&mut self, rng: &mut fastrand::Rng, count: usize) -> Vec<Slice> {
        let size = self.size();
        let turns: Vec<Slice> = (0..count)
            .map(|_| {
                Slice::new(
                    Axis::ALL[rng.usize(..Axis::ALL.len())],
                    rng.usize(..size),
                    rng.bool().into(),
                )
            })
            .collect();

        for &slice in &turns {
            self.apply_in_range(slice);
        }
        self.scramble.extend_from_slice(&turns);

        info!(target: "scramble", "Scrambled: turns={count}");
        turns
    }

    /// Undo the remembered scramble turns, most recent first, and forget them.
    /// Returns the turns that were applied.
    ///
    /// This inverts the scramble sequence only. Turns made in between a
    /// scramble and the solve are not undone, so the cube is only guaranteed
    /// to end up solved when nothing else has been turned since scrambling.
    pub fn solve(&mut self) -> Vec<Slice> {
        let solution: Vec<Slice> = self.scramble.drain(..).rev().map(Slice::inverse).collect();
        for &slice in &solution {
            self.apply_in_range(slice);
        }

        info!(target: "solve", "Applied solution: turns={}", solution.len());
        solution
    }

    /// Turn every slice along `axis`, reorienting the whole cube. Each slice
    /// is recorded in the history as a separate turn.
    ///
    /// # Errors
    ///
    /// If `axis` is not 0, 1 or 2.
    pub fn rotate_whole(
        &mut self,
        axis: usize,
        direction: impl Into<Direction>,
    ) -> Result<Vec<Slice>, CubeError> {
        let axis = Axis::try_from(axis)?;
        let direction = direction.into();
        let turns: Vec<Slice> = (0..self.size())
            .map(|depth| Slice::new(axis, depth, direction))
            .collect();
        for &slice in &turns {
            self.apply_in_range(slice);
        }
        Ok(turns)
    }

    /// The home coordinates of the cubelets in a slice, in slice order. This
    /// is what a renderer needs to animate a turn of that slice.
    ///
    /// # Errors
    ///
    /// If `axis` or `depth` is out of range.
    pub fn slice_identities(&self, axis: usize, depth: usize) -> Result<Vec<Coord>, CubeError> {
        let axis = Axis::try_from(axis)?;
        Ok(self
            .cubelets
            .get_slice(depth, axis)?
            .iter()
            .map(Cubelet::home)
            .collect())
    }

    /// Which label is visible at each cell of `face`, row-major in slice
    /// order.
    #[must_use]
    pub fn face_labels(&self, face: Face) -> SquareMatrix<Option<Face>> {
        let size = self.size();
        let coords = plane_coords(face.depth(size), face.axis, size);
        let labels = coords
            .iter()
            .map(|&coord| self.cubelets.cell(coord).label_facing(face))
            .collect();
        SquareMatrix::from_flat_unchecked(size, labels)
    }

    /// Whether every face shows a single label.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let labels = self.face_labels(face);
            let cells = labels.as_slice();
            cells[0].is_some() && cells.iter().all_equal()
        })
    }
}
