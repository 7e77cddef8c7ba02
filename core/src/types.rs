use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for per-board cell totals.
pub type CellCount = u16;

/// Accumulated session score; not bounded by the board size.
pub type Score = u32;

/// Opaque variant selector stored by the engine and never consulted by the
/// core rules.
pub type Strategy = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// The eight straight-line scan directions as `(row delta, col delta)`:
/// left, right, up, down, then the four diagonals.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

pub trait RayIterExt {
    fn iter_ray(&self, origin: Coord2, delta: (isize, isize)) -> RayIter;
}

impl<T> RayIterExt for Array2<T> {
    fn iter_ray(&self, origin: Coord2, delta: (isize, isize)) -> RayIter {
        let dim = self.dim();
        let bounds = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        RayIter::new(origin, delta, bounds)
    }
}

/// Walks outward from an origin cell along one fixed direction, yielding
/// successive in-bounds coordinates. The origin itself is not yielded.
#[derive(Debug)]
pub struct RayIter {
    cursor: Coord2,
    delta: (isize, isize),
    bounds: Coord2,
}

impl RayIter {
    fn new(origin: Coord2, delta: (isize, isize), bounds: Coord2) -> Self {
        Self {
            cursor: origin,
            delta,
            bounds,
        }
    }
}

impl Iterator for RayIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let next = apply_delta(self.cursor, self.delta, self.bounds)?;
        self.cursor = next;
        Some(next)
    }
}
