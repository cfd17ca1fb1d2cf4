//! Which rows and columns of the neighboring faces a layer turn carries
//! around.
//!
//! A turn of the layer `depth` steps in from some face moves one strip on
//! each of the four faces bordering it. Every strip is a full row or column
//! of its face, counted `depth` steps in from one of that face's edges. The
//! stickers of a strip are read in row/column order, or back to front when
//! the strip is reversed, because neighboring faces do not agree on which
//! way their axes run along a shared edge.
//!
//! The tables below list, for a clockwise quarter turn, where each target
//! strip takes its stickers from. Sticker `k` of the source lands on sticker
//! `k` of the target.

use crate::face::Face;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Line {
    Row,
    Column,
}

/// Which edge of the face the strip's index is counted from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Edge {
    /// Row or column 0.
    Start,
    /// Row or column N-1.
    End,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Strip {
    pub face: Face,
    pub line: Line,
    pub edge: Edge,
    pub reversed: bool,
}

impl Strip {
    const fn row(face: Face, edge: Edge) -> Self {
        Strip {
            face,
            line: Line::Row,
            edge,
            reversed: false,
        }
    }

    const fn column(face: Face, edge: Edge) -> Self {
        Strip {
            face,
            line: Line::Column,
            edge,
            reversed: false,
        }
    }

    const fn rev(self) -> Self {
        Strip {
            reversed: !self.reversed,
            ..self
        }
    }

    /// The `(row, col)` cells of this strip on a face of `size`, in strip
    /// order, for the layer `depth` steps in. `depth` must be below `size`.
    pub fn cells(self, size: usize, depth: usize) -> impl Iterator<Item = (usize, usize)> {
        let index = match self.edge {
            Edge::Start => depth,
            Edge::End => size - 1 - depth,
        };
        (0..size).map(move |k| {
            let along = if self.reversed { size - 1 - k } else { k };
            match self.line {
                Line::Row => (index, along),
                Line::Column => (along, index),
            }
        })
    }
}

/// One leg of the four-way strip cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Transfer {
    pub to: Strip,
    pub from: Strip,
}

const fn transfer(to: Strip, from: Strip) -> Transfer {
    Transfer { to, from }
}

/// The strip cycle for a clockwise quarter turn of a layer parallel to
/// `face`, as seen looking at `face`.
pub(crate) const fn clockwise_cycle(face: Face) -> [Transfer; 4] {
    use Edge::{End, Start};
    use Face::{Back, Down, Front, Left, Right, Up};

    match face {
        Front => [
            transfer(Strip::row(Up, End), Strip::column(Left, End).rev()),
            transfer(Strip::column(Left, End), Strip::row(Down, Start)),
            transfer(Strip::row(Down, Start), Strip::column(Right, Start).rev()),
            transfer(Strip::column(Right, Start), Strip::row(Up, End)),
        ],
        Back => [
            transfer(Strip::row(Up, Start), Strip::column(Right, End).rev()),
            transfer(Strip::column(Right, End), Strip::row(Down, End)),
            transfer(Strip::row(Down, End), Strip::column(Left, Start).rev()),
            transfer(Strip::column(Left, Start), Strip::row(Up, Start)),
        ],
        Left => [
            transfer(Strip::column(Up, Start), Strip::column(Back, End).rev()),
            transfer(Strip::column(Back, End), Strip::column(Down, Start).rev()),
            transfer(Strip::column(Down, Start), Strip::column(Front, Start)),
            transfer(Strip::column(Front, Start), Strip::column(Up, Start)),
        ],
        Right => [
            transfer(Strip::column(Up, End), Strip::column(Front, End)),
            transfer(Strip::column(Front, End), Strip::column(Down, End)),
            transfer(Strip::column(Down, End), Strip::column(Back, Start).rev()),
            transfer(Strip::column(Back, Start), Strip::column(Up, End).rev()),
        ],
        Up => [
            transfer(Strip::row(Front, Start), Strip::row(Right, Start)),
            transfer(Strip::row(Right, Start), Strip::row(Back, Start)),
            transfer(Strip::row(Back, Start), Strip::row(Left, Start)),
            transfer(Strip::row(Left, Start), Strip::row(Front, Start)),
        ],
        Down => [
            transfer(Strip::row(Front, End), Strip::row(Left, End)),
            transfer(Strip::row(Left, End), Strip::row(Back, End)),
            transfer(Strip::row(Back, End), Strip::row(Right, End)),
            transfer(Strip::row(Right, End), Strip::row(Front, End)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn same_line(a: Strip, b: Strip) -> bool {
        a.face == b.face && a.line == b.line && a.edge == b.edge
    }

    #[test]
    fn test_cycles_touch_the_four_neighbors() {
        for face in Face::ALL {
            let cycle = clockwise_cycle(face);
            let targets = cycle.iter().map(|t| t.to.face).sorted().collect_vec();
            let expected = Face::ALL
                .into_iter()
                .filter(|&f| f != face && f != face.opposite())
                .sorted()
                .collect_vec();
            assert_eq!(targets, expected, "{face}");
        }
    }

    #[test]
    fn test_every_target_is_read_exactly_once() {
        for face in Face::ALL {
            let cycle = clockwise_cycle(face);
            for transfer in &cycle {
                let readers = cycle
                    .iter()
                    .filter(|other| same_line(other.from, transfer.to))
                    .count();
                assert_eq!(readers, 1, "{face}: {transfer:?}");
            }
        }
    }

    #[test]
    fn test_cycle_reversals_cancel() {
        // Going all the way around must bring every sticker back in order
        for face in Face::ALL {
            let flips = clockwise_cycle(face)
                .iter()
                .filter(|t| t.from.reversed != t.to.reversed)
                .count();
            assert_eq!(flips % 2, 0, "{face}");
        }
    }

    #[test]
    fn test_cells() {
        let strip = Strip::column(Face::Left, Edge::End);
        assert_eq!(strip.cells(3, 0).collect_vec(), vec![(0, 2), (1, 2), (2, 2)]);
        assert_eq!(strip.cells(3, 1).collect_vec(), vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(
            strip.rev().cells(3, 0).collect_vec(),
            vec![(2, 2), (1, 2), (0, 2)]
        );
        assert_eq!(
            Strip::row(Face::Up, Edge::Start).cells(2, 1).collect_vec(),
            vec![(1, 0), (1, 1)]
        );
    }
}
