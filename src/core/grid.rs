//! Fixed-size puzzle grids and word placements
//!
//! Grids are stored row-major and addressed by `(row, col)`.

use std::fmt;

/// A position in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orientation of a placed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
}

impl Direction {
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Position `offset` cells from `origin` along this direction
    #[inline]
    #[must_use]
    pub const fn step(self, origin: Pos, offset: usize) -> Pos {
        match self {
            Self::Horizontal => Pos::new(origin.row, origin.col + offset),
            Self::Vertical => Pos::new(origin.row + offset, origin.col),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "across",
            Self::Vertical => "down",
        }
    }
}

/// Content of a letter-grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Blank,
    Letter(char),
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Blank => None,
            Self::Letter(c) => Some(c),
        }
    }
}

/// A word recorded at a grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl PlacedWord {
    #[must_use]
    pub const fn origin(&self) -> Pos {
        Pos::new(self.row, self.col)
    }

    /// Positions covered by the word, in reading order
    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let origin = self.origin();
        (0..self.word.len()).map(move |i| self.direction.step(origin, i))
    }
}

/// A `rows x cols` grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }

    #[must_use]
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }
}

impl<T> Grid<T> {
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Get a cell, or `None` when out of bounds
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            self.cells.get(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        if self.contains(pos) {
            self.cells.get_mut(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Overwrite a cell; out-of-bounds writes are ignored
    #[inline]
    pub fn set(&mut self, pos: Pos, value: T) {
        if let Some(cell) = self.get_mut(pos) {
            *cell = value;
        }
    }

    /// Iterate rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Iterate `(position, cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Pos::new(i / cols, i % cols), cell))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Pos, &mut T)> {
        let cols = self.cols.max(1);
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, cell)| (Pos::new(i / cols, i % cols), cell))
    }

    /// In-bounds orthogonal neighbors of `pos`
    #[must_use]
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        let mut out = Vec::with_capacity(4);
        if pos.row > 0 {
            out.push(Pos::new(pos.row - 1, pos.col));
        }
        if pos.row + 1 < self.rows {
            out.push(Pos::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            out.push(Pos::new(pos.row, pos.col - 1));
        }
        if pos.col + 1 < self.cols {
            out.push(Pos::new(pos.row, pos.col + 1));
        }
        out
    }
}

impl Grid<Cell> {
    /// Letter at `pos`, if any
    #[must_use]
    pub fn letter_at(&self, pos: Pos) -> Option<char> {
        self.get(pos).and_then(|cell| cell.letter())
    }

    /// Read `len` letters from `origin` along `direction`
    ///
    /// Blank cells read as `'.'`; returns `None` when the span leaves the grid.
    #[must_use]
    pub fn read(&self, origin: Pos, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| {
                self.get(direction.step(origin, i))
                    .map(|cell| cell.letter().unwrap_or('.'))
            })
            .collect()
    }

    /// Each row rendered as a string, blanks as `'.'`
    #[must_use]
    pub fn row_strings(&self) -> Vec<String> {
        self.iter_rows()
            .map(|row| row.iter().map(|c| c.letter().unwrap_or('.')).collect())
            .collect()
    }

    /// Each column rendered top-to-bottom as a string, blanks as `'.'`
    #[must_use]
    pub fn column_strings(&self) -> Vec<String> {
        (0..self.cols)
            .map(|col| {
                (0..self.rows)
                    .map(|row| self.letter_at(Pos::new(row, col)).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid<Cell> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_strings() {
            let spaced: Vec<String> = row.chars().map(|c| c.to_string()).collect();
            writeln!(f, "{}", spaced.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_starts_blank() {
        let grid: Grid<Cell> = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert!(grid.iter().all(|(_, c)| c.is_blank()));
    }

    #[test]
    fn grid_get_out_of_bounds() {
        let grid: Grid<Cell> = Grid::square(2);
        assert!(grid.get(Pos::new(1, 1)).is_some());
        assert!(grid.get(Pos::new(2, 0)).is_none());
        assert!(grid.get(Pos::new(0, 2)).is_none());
    }

    #[test]
    fn grid_read_spans() {
        let mut grid: Grid<Cell> = Grid::square(3);
        for (i, c) in "cat".chars().enumerate() {
            grid.set(Pos::new(0, i), Cell::Letter(c));
        }
        grid.set(Pos::new(1, 0), Cell::Letter('o'));

        assert_eq!(
            grid.read(Pos::new(0, 0), Direction::Horizontal, 3).as_deref(),
            Some("cat")
        );
        assert_eq!(
            grid.read(Pos::new(0, 0), Direction::Vertical, 3).as_deref(),
            Some("co.")
        );
        assert!(grid.read(Pos::new(0, 1), Direction::Horizontal, 3).is_none());
    }

    #[test]
    fn grid_row_and_column_strings() {
        let mut grid: Grid<Cell> = Grid::square(2);
        grid.set(Pos::new(0, 1), Cell::Letter('a'));
        assert_eq!(grid.row_strings(), vec![".a", ".."]);
        assert_eq!(grid.column_strings(), vec!["..", "a."]);
    }

    #[test]
    fn neighbors_at_corner_and_center() {
        let grid: Grid<Cell> = Grid::square(3);
        assert_eq!(grid.neighbors(Pos::new(0, 0)).len(), 2);
        assert_eq!(grid.neighbors(Pos::new(1, 1)).len(), 4);
    }

    #[test]
    fn placed_word_cells() {
        let placed = PlacedWord {
            word: "dog".to_string(),
            row: 1,
            col: 2,
            direction: Direction::Vertical,
        };
        let cells: Vec<Pos> = placed.cells().collect();
        assert_eq!(cells, vec![Pos::new(1, 2), Pos::new(2, 2), Pos::new(3, 2)]);
    }
}
