// Move history management for time-travel navigation

use crate::game::{column_of, row_of, Board, Mark, Win};

/// A move as it was played, captured at apply time.
///
/// The 1-based (column, row) pair is stored here rather than re-derived from
/// the move number at render time, so the move list always labels the cell
/// that was actually played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub cell: usize,
    pub mark: Mark,
    pub column: usize,
    pub row: usize,
}

/// A board snapshot plus the move that produced it.
///
/// The initial entry has no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    pub last_move: Option<MoveRecord>,
}

/// Display order for the move list. Does not affect the history itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Outcome of the currently displayed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Win),
    Draw,
    NextPlayer(Mark),
}

/// The game controller: owns the snapshot history and all state transitions.
///
/// History is append-only until a jump followed by a new move truncates the
/// tail. Every operation is total; invalid input (occupied cell, move after
/// game over, out-of-range step) is silently ignored.
#[derive(Debug)]
pub struct Game {
    history: Vec<HistoryEntry>,
    step: usize,
    next_mark: Mark,
    filled: usize,
    sort_order: SortOrder,
}

impl Game {
    pub fn new() -> Self {
        Game {
            history: vec![HistoryEntry {
                board: Board::new(),
                last_move: None,
            }],
            step: 0,
            next_mark: Mark::X,
            filled: 0,
            sort_order: SortOrder::Ascending,
        }
    }

    /// The snapshot at the step pointer.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    pub fn filled(&self) -> usize {
        self.filled
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Place the next player's mark at `cell`.
    ///
    /// No-op if the current snapshot already has a winner or the cell is
    /// occupied. Otherwise truncates any entries beyond the step pointer,
    /// appends the new snapshot, advances the pointer, and toggles the next
    /// player. Playing a move forces the move list back to ascending order.
    pub fn apply_move(&mut self, cell: usize) {
        if cell >= 9 {
            return;
        }
        let current = self.current();
        if current.board.winner().is_some() || current.board.get(cell).is_some() {
            return;
        }

        let board = current.board.with_mark(cell, self.next_mark);
        self.history.truncate(self.step + 1);
        self.history.push(HistoryEntry {
            board,
            last_move: Some(MoveRecord {
                cell,
                mark: self.next_mark,
                column: column_of(cell),
                row: row_of(cell),
            }),
        });
        self.step = self.history.len() - 1;
        self.next_mark = self.next_mark.other();
        self.filled += 1;
        self.sort_order = SortOrder::Ascending;
    }

    /// Move the step pointer to `step` without touching the history.
    ///
    /// The next player follows from step parity (X opens, so even steps are
    /// X's turn), and the filled count from the step itself: every move
    /// fills exactly one cell, so entry `n` has `n` occupied cells.
    pub fn jump_to(&mut self, step: usize) {
        if step >= self.history.len() {
            return;
        }
        self.step = step;
        self.next_mark = if step % 2 == 0 { Mark::X } else { Mark::O };
        self.filled = step;
    }

    /// Flip the move list display order. History and step are untouched.
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Winner, draw, or whose turn is next, for the current snapshot.
    ///
    /// Draw detection is external to the win evaluator: a snapshot with all
    /// 9 cells filled and no winning line is a draw.
    pub fn status(&self) -> Status {
        if let Some(win) = self.current().board.winner() {
            Status::Winner(win)
        } else if self.filled == 9 {
            Status::Draw
        } else {
            Status::NextPlayer(self.next_mark)
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
