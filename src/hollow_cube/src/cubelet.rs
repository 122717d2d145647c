//! Per-cell sticker tracking.
//!
//! Every cell on the surface is a [`Cubelet`] carrying one sticker per cube
//! face it started on: corners have three, edges two, face centers one. A
//! sticker is identified by its home [`Face`] (its label) and records the
//! direction it currently points in (its orientation), which is also a
//! [`Face`]. Turning a slice moves cubelets around in the store and rotates
//! the orientations of the stickers on them; labels are never added or
//! removed after construction.

use crate::{
    slice::{Axis, Direction},
    surface_store::Coord,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Negative = 0,
    Positive = 1,
}

/// One of the six directed faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face {
    pub axis: Axis,
    pub sign: Sign,
}

impl Face {
    pub const Y_NEG: Face = Face::new(Axis::Y, Sign::Negative);
    pub const Y_POS: Face = Face::new(Axis::Y, Sign::Positive);
    pub const Z_NEG: Face = Face::new(Axis::Z, Sign::Negative);
    pub const Z_POS: Face = Face::new(Axis::Z, Sign::Positive);
    pub const X_NEG: Face = Face::new(Axis::X, Sign::Negative);
    pub const X_POS: Face = Face::new(Axis::X, Sign::Positive);

    /// All faces, ordered by [`Face::index`].
    pub const ALL: [Face; 6] = [
        Face::Y_NEG,
        Face::Y_POS,
        Face::Z_NEG,
        Face::Z_POS,
        Face::X_NEG,
        Face::X_POS,
    ];

    #[must_use]
    pub const fn new(axis: Axis, sign: Sign) -> Self {
        Face { axis, sign }
    }

    /// Face number in `0..6`: `Y=0`, `Y=size`, `Z=0`, `Z=size`, `X=0`, `X=size`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.axis.index() * 2 + self.sign as usize
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        let sign = match self.sign {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        };
        Face::new(self.axis, sign)
    }

    /// The depth of this face along its axis.
    #[must_use]
    pub const fn depth(self, size: usize) -> usize {
        match self.sign {
            Sign::Negative => 0,
            Sign::Positive => size - 1,
        }
    }

    /// Whether `coord` lies on this face.
    #[must_use]
    pub const fn contains(self, coord: Coord, size: usize) -> bool {
        coord.get(self.axis) == self.depth(size)
    }

    /// The faces that `coord` lies on.
    pub fn containing(coord: Coord, size: usize) -> impl Iterator<Item = Face> {
        Face::ALL
            .into_iter()
            .filter(move |face| face.contains(coord, size))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.sign {
            Sign::Negative => '-',
            Sign::Positive => '+',
        };
        write!(f, "{sign}{}", self.axis)
    }
}

/// Orientations in quarter-turn order. Skipping the two entries on a given
/// axis leaves the four directions perpendicular to it, in the order a
/// clockwise turn about that axis carries them.
const ORIENTATION_CYCLE: [Face; 6] = [
    Face::Z_POS,
    Face::Y_NEG,
    Face::X_POS,
    Face::Z_NEG,
    Face::Y_POS,
    Face::X_NEG,
];

/// Position of each face in `ORIENTATION_CYCLE`, by `Face::index`.
const CYCLE_POSITION: [usize; 6] = {
    let mut positions = [0; 6];
    let mut i = 0;
    while i < ORIENTATION_CYCLE.len() {
        positions[ORIENTATION_CYCLE[i].index()] = i;
        i += 1;
    }
    positions
};

/// Turn `orientation` a quarter turn about `axis`.
fn rotate_orientation(orientation: Face, axis: Axis, direction: Direction) -> Face {
    if orientation.axis == axis {
        return orientation;
    }

    let len = ORIENTATION_CYCLE.len();
    let mut position = CYCLE_POSITION[orientation.index()];
    loop {
        position = match direction {
            Direction::Clockwise => (position + 1) % len,
            Direction::CounterClockwise => (position + len - 1) % len,
        };
        if ORIENTATION_CYCLE[position].axis != axis {
            return ORIENTATION_CYCLE[position];
        }
    }
}

/// A single piece of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cubelet {
    home: Coord,
    /// Current orientation of each label, indexed by `Face::index`.
    faces: [Option<Face>; 6],
}

impl Cubelet {
    /// A cubelet with no labels yet, created at `home`.
    #[must_use]
    pub const fn new(home: Coord) -> Self {
        Cubelet {
            home,
            faces: [None; 6],
        }
    }

    /// Where this cubelet was created. Stable across turns, so it doubles as
    /// the cubelet's identity.
    #[must_use]
    pub const fn home(&self) -> Coord {
        self.home
    }

    /// Register `label`, initially pointing out of its own face.
    pub fn add_face(&mut self, label: Face) {
        self.faces[label.index()] = Some(label);
    }

    #[must_use]
    pub fn label_count(&self) -> usize {
        self.faces.iter().flatten().count()
    }

    /// Current orientation of `label`, if this cubelet carries it.
    #[must_use]
    pub fn orientation(&self, label: Face) -> Option<Face> {
        self.faces[label.index()]
    }

    /// `(label, orientation)` for every label on this cubelet.
    pub fn labels(&self) -> impl Iterator<Item = (Face, Face)> + '_ {
        Face::ALL
            .into_iter()
            .zip(self.faces)
            .filter_map(|(label, orientation)| Some((label, orientation?)))
    }

    /// The label currently pointing towards `direction`.
    #[must_use]
    pub fn label_facing(&self, direction: Face) -> Option<Face> {
        self.labels()
            .find_map(|(label, orientation)| (orientation == direction).then_some(label))
    }

    /// Whether every label points out of its own face.
    #[must_use]
    pub fn is_home_oriented(&self) -> bool {
        self.labels().all(|(label, orientation)| label == orientation)
    }

    /// Rotate every label a quarter turn about `axis`. Labels currently
    /// pointing along `axis` lie in the plane of the turn's face and do not
    /// change.
    pub fn rotate(&mut self, axis: Axis, direction: Direction) {
        for orientation in self.faces.iter_mut().flatten() {
            *orientation = rotate_orientation(*orientation, axis, direction);
        }
    }
}
