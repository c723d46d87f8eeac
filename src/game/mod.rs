// Board representation and win detection

use std::fmt;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// [`Board::winner`] scans these in order and the first complete line wins,
/// so the order here is part of the rules.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the 9 board positions: empty, or occupied by a mark.
pub type Cell = Option<Mark>;

/// A complete winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub mark: Mark,
    pub line: [usize; 3],
}

impl Win {
    /// Whether `cell` is part of the winning line.
    pub fn contains(&self, cell: usize) -> bool {
        self.line.contains(&cell)
    }
}

/// A 3x3 board, indexed 0-8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    pub fn new() -> Self {
        Board { cells: [None; 9] }
    }

    pub fn get(&self, cell: usize) -> Cell {
        self.cells[cell]
    }

    /// A copy of this board with `mark` placed at `cell`.
    ///
    /// Boards are immutable snapshots; placing a mark produces the next
    /// snapshot rather than mutating the current one.
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[cell] = Some(mark);
        next
    }

    /// Scan the 8 lines in fixed order and return the first one whose three
    /// cells hold the same mark.
    pub fn winner(&self) -> Option<Win> {
        for line in LINES {
            let [a, b, c] = line;
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return Some(Win { mark, line });
                }
            }
        }
        None
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled() == 9
    }
}

/// 1-based column of a cell index.
pub fn column_of(cell: usize) -> usize {
    cell % 3 + 1
}

/// 1-based row of a cell index.
pub fn row_of(cell: usize) -> usize {
    cell / 3 + 1
}
