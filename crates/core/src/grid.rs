//! Grid module - the frozen cells of the playfield
//!
//! The grid is a `width x height` matrix stored as a flat, row-major vector.
//! Its size is fixed when it is built. Coordinates are `(row, col)` with row 0
//! at the top. Only frozen pieces live here; the falling piece is overlaid by
//! the snapshot projection.
//!
//! Direct cell access outside the grid is a caller bug and panics. Placement
//! queries take signed anchors and simply answer `false` for anything outside.

use crate::shapes::Shape;
use crate::types::{Anchor, Cell, PieceKind, MAX_BOARD_SIDE, MIN_BOARD_SIDE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Panics if either side is outside `MIN_BOARD_SIDE..=MAX_BOARD_SIDE`;
    /// placement math uses signed 16-bit coordinates.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(
            width >= MIN_BOARD_SIDE && height >= MIN_BOARD_SIDE,
            "grid {}x{} is smaller than {}x{}",
            width,
            height,
            MIN_BOARD_SIDE,
            MIN_BOARD_SIDE
        );
        assert!(
            width <= MAX_BOARD_SIDE && height <= MAX_BOARD_SIDE,
            "grid {}x{} is larger than {}x{}",
            width,
            height,
            MAX_BOARD_SIDE,
            MAX_BOARD_SIDE
        );
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height as usize && col < self.width as usize,
            "cell ({}, {}) outside {}x{} grid",
            row,
            col,
            self.width,
            self.height
        );
        row * self.width as usize + col
    }

    /// Cell at `(row, col)`
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Replace the cell at `(row, col)`
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Check whether `shape` fits with its box at `anchor`.
    ///
    /// Every occupied cell must land inside the grid (rows above 0 count as
    /// outside) on a cell that is not frozen. Empty parts of the box may hang
    /// off any edge.
    pub fn can_place(&self, shape: &Shape, anchor: Anchor) -> bool {
        shape.occupied().iter().all(|&(dr, dc)| {
            let row = anchor.row + dr as i16;
            let col = anchor.col + dc as i16;
            row >= 0
                && col >= 0
                && row < self.height as i16
                && col < self.width as i16
                && !self.cell_at(row as usize, col as usize).is_frozen()
        })
    }

    /// Mark every occupied cell of `shape` at `anchor` as frozen with `kind`.
    ///
    /// The caller must have checked the placement with [`Grid::can_place`].
    pub fn freeze(&mut self, shape: &Shape, anchor: Anchor, kind: PieceKind) {
        debug_assert!(self.can_place(shape, anchor), "freezing a piece that does not fit");
        for &(dr, dc) in shape.occupied().iter() {
            let row = anchor.row + dr as i16;
            let col = anchor.col + dc as i16;
            assert!(row >= 0 && col >= 0, "freezing above or left of the grid");
            self.set_cell(row as usize, col as usize, Cell::Frozen(kind));
        }
    }

    /// Check if a row is completely frozen
    pub fn is_row_complete(&self, row: usize) -> bool {
        let start = self.index(row, 0);
        self.cells[start..start + self.width as usize]
            .iter()
            .all(Cell::is_frozen)
    }

    /// Remove every complete row and return how many were removed.
    ///
    /// Scans bottom to top. A complete row is deleted, everything above it
    /// moves down one row, a fresh empty row appears at the top, and the same
    /// row index is checked again before the scan continues upward. Remaining
    /// rows keep their relative order and the row count never changes.
    pub fn clear_completed_lines(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = self.height as usize;
        while row > 0 {
            if self.is_row_complete(row - 1) {
                self.remove_row(row - 1);
                cleared += 1;
            } else {
                row -= 1;
            }
        }
        cleared
    }

    /// Delete `row`, shift the rows above it down and empty the top row.
    fn remove_row(&mut self, row: usize) {
        let width = self.width as usize;
        // copy_within handles the overlapping ranges.
        self.cells.copy_within(0..row * width, width);
        self.cells[..width].fill(Cell::Empty);
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of frozen cells on the board
    pub fn frozen_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_frozen()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::get_shape;

    fn fill_row(grid: &mut Grid, row: usize, kind: PieceKind) {
        for col in 0..grid.width() as usize {
            grid.set_cell(row, col, Cell::Frozen(kind));
        }
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.cells().len(), 200);
        assert_eq!(grid.frozen_count(), 0);
        assert_eq!(grid.rows().count(), 20);
        assert!(grid.rows().all(|r| r.len() == 10));
    }

    #[test]
    #[should_panic]
    fn grid_smaller_than_piece_box_panics() {
        let _ = Grid::new(3, 20);
    }

    #[test]
    #[should_panic(expected = "larger than")]
    fn grid_wider_than_max_side_panics() {
        let _ = Grid::new(40_000, 4);
    }

    #[test]
    fn grid_at_max_side_accepts_pieces() {
        let grid = Grid::new(MAX_BOARD_SIDE, MAX_BOARD_SIDE);
        let o = get_shape(PieceKind::O);
        assert!(grid.can_place(&o, Anchor::new(0, 0)));
        assert!(grid.can_place(&o, Anchor::new(253, 253)));
    }

    #[test]
    #[should_panic]
    fn cell_access_out_of_range_panics() {
        let grid = Grid::new(10, 20);
        let _ = grid.cell_at(20, 0);
    }

    #[test]
    fn can_place_ignores_empty_box_cells_off_the_edge() {
        let grid = Grid::new(10, 20);
        // The catalog I occupies only column 0 of its 4x4 box.
        let i = get_shape(PieceKind::I);
        assert!(grid.can_place(&i, Anchor::new(0, 9)));
        assert!(!grid.can_place(&i, Anchor::new(0, 10)));
        assert!(!grid.can_place(&i, Anchor::new(17, 0)));
        assert!(grid.can_place(&i, Anchor::new(16, 0)));
    }

    #[test]
    fn can_place_rejects_negative_rows_for_occupied_cells() {
        let grid = Grid::new(10, 20);
        let o = get_shape(PieceKind::O);
        assert!(!grid.can_place(&o, Anchor::new(-1, 0)));
        // The T box's bottom row is empty, so it may sit one row lower.
        let t = get_shape(PieceKind::T);
        assert!(grid.can_place(&t, Anchor::new(18, 0)));
    }

    #[test]
    fn freeze_marks_only_occupied_cells() {
        let mut grid = Grid::new(10, 20);
        let t = get_shape(PieceKind::T);
        grid.freeze(&t, Anchor::new(5, 2), PieceKind::T);
        assert_eq!(grid.frozen_count(), 4);
        assert_eq!(grid.cell_at(5, 2), Cell::Frozen(PieceKind::T));
        assert_eq!(grid.cell_at(5, 4), Cell::Frozen(PieceKind::T));
        assert_eq!(grid.cell_at(6, 3), Cell::Frozen(PieceKind::T));
        assert_eq!(grid.cell_at(6, 2), Cell::Empty);
    }

    #[test]
    fn clearing_adjacent_lines_rechecks_same_index() {
        let mut grid = Grid::new(4, 6);
        fill_row(&mut grid, 5, PieceKind::I);
        fill_row(&mut grid, 4, PieceKind::O);
        grid.set_cell(3, 1, Cell::Frozen(PieceKind::S));

        assert_eq!(grid.clear_completed_lines(), 2);
        assert_eq!(grid.cell_at(5, 1), Cell::Frozen(PieceKind::S));
        assert_eq!(grid.frozen_count(), 1);
    }

    #[test]
    fn clearing_preserves_order_of_remaining_rows() {
        let mut grid = Grid::new(4, 6);
        grid.set_cell(1, 0, Cell::Frozen(PieceKind::L));
        fill_row(&mut grid, 2, PieceKind::I);
        grid.set_cell(3, 3, Cell::Frozen(PieceKind::J));
        fill_row(&mut grid, 4, PieceKind::I);
        grid.set_cell(5, 2, Cell::Frozen(PieceKind::Z));

        assert_eq!(grid.clear_completed_lines(), 2);
        assert_eq!(grid.cell_at(3, 0), Cell::Frozen(PieceKind::L));
        assert_eq!(grid.cell_at(4, 3), Cell::Frozen(PieceKind::J));
        assert_eq!(grid.cell_at(5, 2), Cell::Frozen(PieceKind::Z));
        assert_eq!(grid.frozen_count(), 3);
        assert!(grid.rows().take(3).all(|r| r.iter().all(|c| *c == Cell::Empty)));
    }

    #[test]
    fn clearing_without_complete_rows_is_a_no_op() {
        let mut grid = Grid::new(10, 20);
        grid.set_cell(19, 0, Cell::Frozen(PieceKind::T));
        let before = grid.clone();
        assert_eq!(grid.clear_completed_lines(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn clearing_a_full_board_empties_it() {
        let mut grid = Grid::new(4, 4);
        for row in 0..4 {
            fill_row(&mut grid, row, PieceKind::O);
        }
        assert_eq!(grid.clear_completed_lines(), 4);
        assert_eq!(grid.frozen_count(), 0);
    }
}
