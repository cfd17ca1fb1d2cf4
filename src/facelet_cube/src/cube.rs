use std::hash::Hash;

use fxhash::FxHashMap;
use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

use crate::{
    face::{Color, Face, FaceMap},
    grid::FaceGrid,
    strip::{Strip, clockwise_cycle},
    turn::{Direction, Slice, Turn},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Cube size must be at least 1, got {0}")]
    InvalidSize(usize),
    #[error("Layer {depth} does not exist on a cube of size {size}")]
    LayerOutOfRange { depth: usize, size: usize },
}

/// The stickers of an N×N×N cube.
///
/// Stickers default to [`Color`]; any `Clone` type works, which lets tests
/// give every sticker its own marker and follow it around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState<S = Color> {
    size: usize,
    faces: FaceMap<FaceGrid<S>>,
}

impl CubeState<Color> {
    /// Create a solved cube of the given size.
    ///
    /// # Errors
    ///
    /// If `size` is zero.
    pub fn new(size: usize) -> Result<Self, CubeError> {
        Self::from_fn(size, |face, _, _| face.color())
    }

    /// Whether every face shows only its own color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|(face, grid)| grid.iter().all(|&color| color == face.color()))
    }
}

impl<S> CubeState<S> {
    /// Create a cube whose stickers are given by `f(face, row, col)`.
    ///
    /// # Errors
    ///
    /// If `size` is zero.
    pub fn from_fn(
        size: usize,
        mut f: impl FnMut(Face, usize, usize) -> S,
    ) -> Result<Self, CubeError> {
        if size == 0 {
            return Err(CubeError::InvalidSize(size));
        }
        debug!("Creating a {size}x{size}x{size} cube");
        let faces = FaceMap::from_fn(|face| FaceGrid::from_fn(size, |row, col| f(face, row, col)));
        Ok(CubeState { size, faces })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &FaceGrid<S> {
        &self.faces[face]
    }

    #[must_use]
    pub fn faces(&self) -> &FaceMap<FaceGrid<S>> {
        &self.faces
    }

    /// Every sticker with its position, face by face in row-major order.
    pub fn stickers(&self) -> impl Iterator<Item = (Face, usize, usize, &S)> {
        let size = self.size;
        self.faces.iter().flat_map(move |(face, grid)| {
            grid.iter()
                .enumerate()
                .map(move |(i, sticker)| (face, i / size, i % size, sticker))
        })
    }

    /// How many times each distinct sticker appears on the cube.
    #[must_use]
    pub fn sticker_counts(&self) -> FxHashMap<S, usize>
    where
        S: Clone + Eq + Hash,
    {
        let mut counts = FxHashMap::default();
        for sticker in self.faces.values().flat_map(FaceGrid::iter) {
            *counts.entry(sticker.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Whether every face is a single color, whichever it is.
    #[must_use]
    pub fn is_uniform(&self) -> bool
    where
        S: PartialEq,
    {
        self.faces.values().all(FaceGrid::is_uniform)
    }
}

impl<S: Clone> CubeState<S> {
    /// Turn the front face a quarter turn clockwise.
    pub fn front(&mut self) {
        self.quarter_turn(Face::Front, 0);
    }

    /// Turn the back face a quarter turn clockwise, as seen from behind.
    pub fn back(&mut self) {
        self.quarter_turn(Face::Back, 0);
    }

    /// Turn the left face a quarter turn clockwise.
    pub fn left(&mut self) {
        self.quarter_turn(Face::Left, 0);
    }

    /// Turn the right face a quarter turn clockwise.
    pub fn right(&mut self) {
        self.quarter_turn(Face::Right, 0);
    }

    /// Turn the up face a quarter turn clockwise, as seen from above.
    pub fn up(&mut self) {
        self.quarter_turn(Face::Up, 0);
    }

    /// Turn the down face a quarter turn clockwise, as seen from below.
    pub fn down(&mut self) {
        self.quarter_turn(Face::Down, 0);
    }

    pub fn turn(&mut self, turn: Turn) {
        trace!("Turning {turn}");
        for _ in 0..turn.direction.quarter_turns() {
            self.quarter_turn(turn.face, 0);
        }
    }

    pub fn apply_turns(&mut self, turns: impl IntoIterator<Item = Turn>) {
        for turn in turns {
            self.turn(turn);
        }
    }

    /// Turn the layer `depth` steps in from `face`. Depth 0 is the face
    /// itself; depth `size - 1` is the opposite face, turned the way `face`
    /// would turn.
    ///
    /// # Errors
    ///
    /// If `depth` is not less than the cube's size.
    pub fn turn_layer(
        &mut self,
        face: Face,
        depth: usize,
        direction: Direction,
    ) -> Result<(), CubeError> {
        if depth >= self.size {
            return Err(CubeError::LayerOutOfRange {
                depth,
                size: self.size,
            });
        }
        trace!("Turning layer {depth} of {face} {direction:?}");
        for _ in 0..direction.quarter_turns() {
            self.quarter_turn(face, depth);
        }
        Ok(())
    }

    pub fn slice(&mut self, slice: Slice, direction: Direction) {
        trace!("Turning {slice:?} slice {direction:?}");
        let face = slice.reference_face();
        let depth = Slice::depth(self.size);
        for _ in 0..direction.quarter_turns() {
            self.quarter_turn(face, depth);
        }
    }

    /// A clockwise quarter turn of one layer. `depth` must be below `size`.
    fn quarter_turn(&mut self, face: Face, depth: usize) {
        if depth == 0 {
            self.faces[face] = self.faces[face].rotate_clockwise();
        }
        if depth == self.size - 1 {
            let opposite = face.opposite();
            self.faces[opposite] = self.faces[opposite].rotate_counterclockwise();
        }

        let cycle = clockwise_cycle(face);
        let taken = cycle
            .iter()
            .map(|transfer| self.read_strip(transfer.from, depth))
            .collect_vec();
        for (transfer, stickers) in cycle.iter().zip(taken) {
            self.write_strip(transfer.to, depth, stickers);
        }
    }

    fn read_strip(&self, strip: Strip, depth: usize) -> Vec<S> {
        let grid = &self.faces[strip.face];
        strip
            .cells(self.size, depth)
            .map(|cell| grid[cell].clone())
            .collect()
    }

    fn write_strip(&mut self, strip: Strip, depth: usize, stickers: Vec<S>) {
        let grid = &mut self.faces[strip.face];
        for (cell, sticker) in strip.cells(self.size, depth).zip(stickers) {
            grid[cell] = sticker;
        }
    }
}
