use std::ops::{Index, IndexMut};

use itertools::Itertools;

/// A square grid of stickers, stored row-major.
///
/// Row 0 is the top row and column 0 the leftmost column as the face is
/// viewed head-on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid<S> {
    size: usize,
    cells: Box<[S]>,
}

impl<S> FaceGrid<S> {
    /// Build a `size`×`size` grid from a function of `(row, col)`.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> S) -> Self {
        let cells = (0..size)
            .cartesian_product(0..size)
            .map(|(row, col)| f(row, col))
            .collect();
        FaceGrid { size, cells }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&S> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col)
        } else {
            None
        }
    }

    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[S] {
        assert!(row < self.size, "row {row} out of bounds for size {}", self.size);
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &S> {
        assert!(col < self.size, "column {col} out of bounds for size {}", self.size);
        self.cells.iter().skip(col).step_by(self.size)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[S]> {
        // `chunks_exact` rejects a zero chunk size
        self.cells.chunks_exact(self.size.max(1))
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.cells.iter()
    }

    /// The grid turned a quarter turn clockwise: `(i, j)` moves to
    /// `(j, N-1-i)`.
    #[must_use]
    pub fn rotate_clockwise(&self) -> Self
    where
        S: Clone,
    {
        let n = self.size;
        FaceGrid::from_fn(n, |row, col| self[(n - 1 - col, row)].clone())
    }

    /// The grid turned a quarter turn counter-clockwise: `(i, j)` moves to
    /// `(N-1-j, i)`.
    #[must_use]
    pub fn rotate_counterclockwise(&self) -> Self
    where
        S: Clone,
    {
        let n = self.size;
        FaceGrid::from_fn(n, |row, col| self[(col, n - 1 - row)].clone())
    }

    /// Whether every sticker equals every other.
    #[must_use]
    pub fn is_uniform(&self) -> bool
    where
        S: PartialEq,
    {
        self.cells.iter().all_equal()
    }
}

impl<S: Clone> FaceGrid<S> {
    pub fn filled(size: usize, sticker: S) -> Self {
        FaceGrid {
            size,
            cells: vec![sticker; size * size].into_boxed_slice(),
        }
    }
}

impl<S> Index<(usize, usize)> for FaceGrid<S> {
    type Output = S;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.size && col < self.size,
            "({row}, {col}) out of bounds for size {}",
            self.size
        );
        &self.cells[row * self.size + col]
    }
}

impl<S> IndexMut<(usize, usize)> for FaceGrid<S> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.size && col < self.size,
            "({row}, {col}) out of bounds for size {}",
            self.size
        );
        &mut self.cells[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(n: usize) -> FaceGrid<usize> {
        FaceGrid::from_fn(n, |row, col| row * n + col)
    }

    #[test]
    fn test_rotate_clockwise_3x3() {
        let rotated = labeled(3).rotate_clockwise();
        let rows = rotated.rows().map(<[usize]>::to_vec).collect_vec();
        assert_eq!(rows, vec![vec![6, 3, 0], vec![7, 4, 1], vec![8, 5, 2]]);
    }

    #[test]
    fn test_rotate_index_law() {
        for n in 1..=6 {
            let grid = labeled(n);
            let rotated = grid.rotate_clockwise();
            for i in 0..n {
                for j in 0..n {
                    assert_eq!(rotated[(j, n - 1 - i)], grid[(i, j)]);
                }
            }
            // the top-left corner lands in the top-right
            assert_eq!(rotated[(0, n - 1)], grid[(0, 0)]);
        }
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for n in 1..=6 {
            let grid = labeled(n);
            let mut rotated = grid.clone();
            for turns in 1..=4 {
                rotated = rotated.rotate_clockwise();
                assert_eq!(rotated == grid, turns == 4 || n == 1, "n = {n}, turns = {turns}");
            }
        }
    }

    #[test]
    fn test_counterclockwise_inverts_clockwise() {
        for n in 1..=5 {
            let grid = labeled(n);
            assert_eq!(grid.rotate_clockwise().rotate_counterclockwise(), grid);
            assert_eq!(
                grid.rotate_counterclockwise(),
                grid.rotate_clockwise().rotate_clockwise().rotate_clockwise()
            );
        }
    }

    #[test]
    fn test_rows_and_columns() {
        let grid = labeled(3);
        assert_eq!(grid.row(1), &[3, 4, 5]);
        assert_eq!(grid.column(2).copied().collect_vec(), vec![2, 5, 8]);
        assert_eq!(grid.get(2, 0), Some(&6));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_uniform() {
        assert!(FaceGrid::filled(4, 'x').is_uniform());
        assert!(labeled(1).is_uniform());
        assert!(!labeled(2).is_uniform());
    }
}
