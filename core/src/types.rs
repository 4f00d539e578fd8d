/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for answer counts and total-cell counts.
pub type CellCount = u16;

/// Row-major position of a cell, `row * cols + col`.
pub type CellIndex = u16;

/// Two-dimensional coordinates `(col, row)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

/// Masks are stored as `[row, col]` so that their logical iteration order matches [`CellIndex`].
impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}
