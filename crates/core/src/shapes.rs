//! Shapes module - the piece catalog and the rotation transform
//!
//! Every piece is a square occupancy matrix (2x2, 3x3 or 4x4). Rotation is a
//! pure transform of that matrix around its own box: it never moves the
//! anchor and never consults the board.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, PIECE_KIND_COUNT};

/// Side of the largest bounding box in the catalog
pub const MAX_SHAPE_SIZE: usize = 4;

/// Occupied `(row, col)` offsets of a shape, relative to its anchor
pub type Occupied = ArrayVec<(u8, u8), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Square occupancy matrix of one piece orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Panics if the rows are not square or larger than [`MAX_SHAPE_SIZE`].
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        assert!(
            (1..=MAX_SHAPE_SIZE).contains(&size),
            "shape side {} out of range",
            size
        );
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "shape rows must be square");
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Self {
            size: size as u8,
            cells,
        }
    }

    const fn from_grid<const N: usize>(rows: [[u8; N]; N]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Side length of the bounding box
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Occupancy at `(row, col)` inside the box
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.size() && col < self.size(),
            "({}, {}) outside {}x{} shape",
            row,
            col,
            self.size,
            self.size
        );
        self.cells[row][col]
    }

    /// Occupied offsets in row-major order
    pub fn occupied(&self) -> Occupied {
        let mut out = Occupied::new();
        for r in 0..self.size() {
            for c in 0..self.size() {
                if self.cells[r][c] {
                    out.push((r as u8, c as u8));
                }
            }
        }
        out
    }

    /// Copy of this shape turned `steps` quarter turns clockwise
    pub fn rotated(&self, steps: u32) -> Shape {
        rotate(self, steps)
    }
}

/// Rotate `shape` clockwise by `steps` quarter turns (normalized mod 4).
///
/// With `n` the last index of the box:
/// - 1 step: `out[i][j] = in[n - j][i]`
/// - 2 steps: `out[i][j] = in[n - i][n - j]`
/// - 3 steps: `out[i][j] = in[j][n - i]`
pub fn rotate(shape: &Shape, steps: u32) -> Shape {
    let steps = steps % 4;
    if steps == 0 {
        return *shape;
    }

    let size = shape.size();
    let n = size - 1;
    let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    for (i, row) in cells.iter_mut().enumerate().take(size) {
        for (j, cell) in row.iter_mut().enumerate().take(size) {
            *cell = match steps {
                1 => shape.cells[n - j][i],
                2 => shape.cells[n - i][n - j],
                _ => shape.cells[j][n - i],
            };
        }
    }

    Shape {
        size: shape.size,
        cells,
    }
}

const CATALOG: [Shape; PIECE_KIND_COUNT] = [
    // L
    Shape::from_grid([[1, 0, 0], [1, 0, 0], [1, 1, 0]]),
    // I
    Shape::from_grid([[1, 0, 0, 0], [1, 0, 0, 0], [1, 0, 0, 0], [1, 0, 0, 0]]),
    // J
    Shape::from_grid([[0, 1, 0], [0, 1, 0], [1, 1, 0]]),
    // O
    Shape::from_grid([[1, 1], [1, 1]]),
    // S
    Shape::from_grid([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
    // T
    Shape::from_grid([[1, 1, 1], [0, 1, 0], [0, 0, 0]]),
    // Z
    Shape::from_grid([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
];

/// Catalog (unrotated) shape of a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    CATALOG[kind.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_box_sizes() {
        assert_eq!(get_shape(PieceKind::I).size(), 4);
        assert_eq!(get_shape(PieceKind::O).size(), 2);
        for kind in [
            PieceKind::L,
            PieceKind::J,
            PieceKind::S,
            PieceKind::T,
            PieceKind::Z,
        ] {
            assert_eq!(get_shape(kind).size(), 3, "{:?}", kind);
        }
    }

    #[test]
    fn every_catalog_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).occupied().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn quarter_turn_of_t() {
        let t = get_shape(PieceKind::T);
        let expected = Shape::from_rows(&[&[0, 0, 1], &[0, 1, 1], &[0, 0, 1]]);
        assert_eq!(rotate(&t, 1), expected);
    }

    #[test]
    fn half_turn_of_l() {
        let l = get_shape(PieceKind::L);
        let expected = Shape::from_rows(&[&[0, 1, 1], &[0, 0, 1], &[0, 0, 1]]);
        assert_eq!(rotate(&l, 2), expected);
    }

    #[test]
    fn three_steps_equal_counter_clockwise_turn() {
        let s = get_shape(PieceKind::S);
        let ccw = Shape::from_rows(&[&[1, 0, 0], &[1, 1, 0], &[0, 1, 0]]);
        assert_eq!(rotate(&s, 3), ccw);
        assert_eq!(rotate(&rotate(&s, 1), 1), rotate(&s, 2));
    }

    #[test]
    fn zero_and_full_turns_are_identity() {
        for kind in PieceKind::ALL {
            let shape = get_shape(kind);
            assert_eq!(rotate(&shape, 0), shape);
            assert_eq!(rotate(&shape, 4), shape);
            assert_eq!(rotate(&shape, 5), rotate(&shape, 1));
        }
    }

    #[test]
    fn square_is_rotation_invariant() {
        let o = get_shape(PieceKind::O);
        for steps in 0..4 {
            assert_eq!(o.rotated(steps), o);
        }
    }

    #[test]
    fn occupied_lists_row_major_offsets() {
        let z = get_shape(PieceKind::Z);
        assert_eq!(z.occupied().as_slice(), &[(0, 0), (0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    #[should_panic]
    fn non_square_rows_panic() {
        let _ = Shape::from_rows(&[&[1, 1], &[1]]);
    }
}
