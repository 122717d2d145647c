//! Text notation for turns.
//!
//! A turn is written as its axis letter, an optional depth and an optional
//! `'` for counter-clockwise: `Y0`, `Z2'`, `X'`. A missing depth means the
//! face at depth 0. Sequences are separated by whitespace.

use crate::{
    CubeError,
    slice::{Axis, Direction, Slice},
    surface_store::check_depth,
};
use itertools::Itertools;
use std::{num::ParseIntError, str::FromStr};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Empty move")]
    Empty,
    #[error("Unknown axis `{letter}` in move `{token}`, expected one of Y, Z or X")]
    UnknownAxis { letter: char, token: String },
    #[error("Invalid depth in move `{token}`: {source}")]
    InvalidDepth {
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Invalid argument `{argument}` to `{keyword}`: {source}")]
    InvalidArgument {
        keyword: String,
        argument: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Unexpected argument `{argument}` after `{keyword}`")]
    UnexpectedArgument { keyword: String, argument: String },
    #[error("Move `{token}` does not fit the cube: {source}")]
    Cube {
        token: String,
        #[source]
        source: CubeError,
    },
}

impl FromStr for Slice {
    type Err = NotationError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let letter = chars.next().ok_or(NotationError::Empty)?;
        let axis = match letter.to_ascii_uppercase() {
            'Y' => Axis::Y,
            'Z' => Axis::Z,
            'X' => Axis::X,
            _ => {
                return Err(NotationError::UnknownAxis {
                    letter,
                    token: token.to_owned(),
                });
            }
        };

        let rest = chars.as_str();
        let (depth, direction) = match rest.strip_suffix('\'') {
            Some(depth) => (depth, Direction::CounterClockwise),
            None => (rest, Direction::Clockwise),
        };
        let depth = if depth.is_empty() {
            0
        } else {
            depth
                .parse::<usize>()
                .map_err(|source| NotationError::InvalidDepth {
                    token: token.to_owned(),
                    source,
                })?
        };

        Ok(Slice::new(axis, depth, direction))
    }
}

/// Parse a whitespace separated sequence of turns for a cube of side length
/// `size`.
///
/// # Errors
///
/// On the first token that does not parse, or whose depth is out of range.
pub fn parse_sequence(text: &str, size: usize) -> Result<Vec<Slice>, NotationError> {
    text.split_whitespace()
        .map(|token| {
            let slice = token.parse::<Slice>()?;
            check_depth(slice.depth, size).map_err(|source| NotationError::Cube {
                token: token.to_owned(),
                source,
            })?;
            Ok(slice)
        })
        .collect()
}

#[must_use]
pub fn format_sequence(slices: &[Slice]) -> String {
    slices.iter().join(" ")
}
