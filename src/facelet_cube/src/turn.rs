use std::fmt::{self, Display};

use itertools::Itertools;

use crate::face::Face;

/// How far a layer turns, as seen looking at the face it is named after.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Direction {
    pub const ALL: [Self; 3] = [
        Direction::Clockwise,
        Direction::CounterClockwise,
        Direction::Half,
    ];

    /// The number of clockwise quarter turns this direction amounts to.
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Direction::Clockwise => 1,
            Direction::Half => 2,
            Direction::CounterClockwise => 3,
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
            Direction::Half => Direction::Half,
        }
    }
}

/// A turn of the outer layer of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    pub face: Face,
    pub direction: Direction,
}

impl Turn {
    #[must_use]
    pub const fn new(face: Face, direction: Direction) -> Self {
        Turn { face, direction }
    }

    #[must_use]
    pub const fn clockwise(face: Face) -> Self {
        Turn::new(face, Direction::Clockwise)
    }

    #[must_use]
    pub const fn counterclockwise(face: Face) -> Self {
        Turn::new(face, Direction::CounterClockwise)
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        Turn::new(self.face, self.direction.inverse())
    }

    /// Every face turn, grouped by face.
    pub fn all() -> impl Iterator<Item = Turn> {
        Face::ALL
            .into_iter()
            .cartesian_product(Direction::ALL)
            .map(|(face, direction)| Turn::new(face, direction))
    }
}

impl Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        match self.direction {
            Direction::Clockwise => Ok(()),
            Direction::CounterClockwise => f.write_str("'"),
            Direction::Half => f.write_str("2"),
        }
    }
}

/// A middle layer of the cube.
///
/// On even sizes there is no true middle; the layer just past the center
/// (counting from the reference face) is used.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Slice {
    /// Between left and right, turning like the left face.
    Middle,
    /// Between up and down, turning like the down face.
    Equator,
    /// Between front and back, turning like the front face.
    Standing,
}

impl Slice {
    pub const ALL: [Self; 3] = [Slice::Middle, Slice::Equator, Slice::Standing];

    /// The face whose turning direction this slice follows.
    #[must_use]
    pub const fn reference_face(self) -> Face {
        match self {
            Slice::Middle => Face::Left,
            Slice::Equator => Face::Down,
            Slice::Standing => Face::Front,
        }
    }

    /// How many layers in from the reference face the slice sits on a cube
    /// of `size`.
    #[must_use]
    pub const fn depth(size: usize) -> usize {
        size / 2
    }
}
