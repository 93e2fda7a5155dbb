use std::ops::Range;

use super::board::Coord;

/// Length of a winning line.
pub const WINDOW: usize = 4;

/// The four line directions a window can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// top-left to bottom-right, `\`
    DiagonalDown,
    /// bottom-left to top-right, `/`
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// (row, col) offset between consecutive cells of a window
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (-1, 1),
        }
    }

    /// Row and column ranges of valid window starts. Empty when the board is
    /// too small along this axis.
    pub fn starts(self, rows: usize, cols: usize) -> (Range<usize>, Range<usize>) {
        let span = WINDOW - 1;
        let full_rows = 0..rows;
        let full_cols = 0..cols;
        let short_rows = 0..(rows + 1).saturating_sub(WINDOW);
        let short_cols = 0..(cols + 1).saturating_sub(WINDOW);
        match self {
            Axis::Horizontal => (full_rows, short_cols),
            Axis::Vertical => (short_rows, full_cols),
            Axis::DiagonalDown => (short_rows, short_cols),
            Axis::DiagonalUp => (span.min(rows)..rows, short_cols),
        }
    }

    /// The `WINDOW` cells starting at `(row, col)`. The start must come from
    /// [`Axis::starts`].
    pub fn window_at(self, row: usize, col: usize) -> [Coord; WINDOW] {
        let (dr, dc) = self.step();
        std::array::from_fn(|i| {
            let i = i as isize;
            Coord::new(
                (row as isize + dr * i) as usize,
                (col as isize + dc * i) as usize,
            )
        })
    }
}

/// Every length-`WINDOW` line on a `rows x cols` board, axis by axis.
pub fn windows(rows: usize, cols: usize) -> impl Iterator<Item = [Coord; WINDOW]> {
    Axis::ALL.into_iter().flat_map(move |axis| {
        let (row_range, col_range) = axis.starts(rows, cols);
        row_range.flat_map(move |row| {
            col_range
                .clone()
                .map(move |col| axis.window_at(row, col))
        })
    })
}
