//! Main TUI application state and logic

use crate::game::{column_of, row_of};
use crate::history::{Game, SortOrder};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Board,
    Moves,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Board => FocusedPane::Moves,
            FocusedPane::Moves => FocusedPane::Board,
        }
    }
}

/// The main application state
pub struct App {
    /// The game controller
    pub game: Game,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Keyboard cursor on the board (cell index 0-8)
    pub cursor: usize,

    /// Keyboard selection in the move list (a history step)
    pub selected_step: usize,

    /// Scroll offset for the move list
    pub moves_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Cell rects from the last render, for mouse hit-testing
    cell_rects: [Rect; 9],

    /// Sort toggle rect from the last render
    sort_rect: Rect,

    /// Visible move rows from the last render, paired with their steps
    move_row_hits: Vec<(Rect, usize)>,
}

impl App {
    /// Create a new app around the given game
    pub fn new(game: Game) -> Self {
        App {
            game,
            focused_pane: FocusedPane::Board,
            cursor: 4,
            selected_step: 0,
            moves_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            cell_rects: [Rect::default(); 9],
            sort_rect: Rect::default(),
            move_row_hits: Vec::new(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_event(mouse);
                    }
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Board on the left, move list on the right, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        super::panes::render_board_pane(
            frame,
            columns[0],
            &self.game,
            self.cursor,
            self.focused_pane == FocusedPane::Board,
            &mut self.cell_rects,
        );

        super::panes::render_moves_pane(
            frame,
            columns[1],
            &self.game,
            self.selected_step,
            self.focused_pane == FocusedPane::Moves,
            &mut self.moves_scroll,
            &mut self.sort_rect,
            &mut self.move_row_hits,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.game.step(),
            self.game.history().len(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.toggle_sort();
            }
            KeyCode::Home => {
                self.jump_to_step(0);
            }
            KeyCode::End => {
                self.jump_to_step(self.game.history().len() - 1);
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Board => {
                    if self.cursor >= 3 {
                        self.cursor -= 3;
                    }
                }
                FocusedPane::Moves => self.move_selection(-1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Board => {
                    if self.cursor + 3 < 9 {
                        self.cursor += 3;
                    }
                }
                FocusedPane::Moves => self.move_selection(1),
            },
            KeyCode::Left => match self.focused_pane {
                FocusedPane::Board => {
                    if self.cursor % 3 > 0 {
                        self.cursor -= 1;
                    }
                }
                FocusedPane::Moves => {
                    // Step backward through history
                    if self.game.step() > 0 {
                        self.jump_to_step(self.game.step() - 1);
                    }
                }
            },
            KeyCode::Right => match self.focused_pane {
                FocusedPane::Board => {
                    if self.cursor % 3 < 2 {
                        self.cursor += 1;
                    }
                }
                FocusedPane::Moves => {
                    // Step forward through history
                    if self.game.step() + 1 < self.game.history().len() {
                        self.jump_to_step(self.game.step() + 1);
                    }
                }
            },
            KeyCode::Enter | KeyCode::Char(' ') => match self.focused_pane {
                FocusedPane::Board => self.place_at(self.cursor),
                FocusedPane::Moves => self.jump_to_step(self.selected_step),
            },
            _ => {}
        }
    }

    /// Handle mouse events: board cells, move rows, and the sort toggle are
    /// all clickable
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let pos = Position::new(mouse.column, mouse.row);

        if let Some(cell) = (0..9).find(|&i| self.cell_rects[i].contains(pos)) {
            self.focused_pane = FocusedPane::Board;
            self.cursor = cell;
            self.place_at(cell);
            return;
        }

        if self.sort_rect.contains(pos) {
            self.toggle_sort();
            return;
        }

        let hit = self
            .move_row_hits
            .iter()
            .find(|(rect, _)| rect.contains(pos))
            .map(|&(_, step)| step);
        if let Some(step) = hit {
            self.focused_pane = FocusedPane::Moves;
            self.jump_to_step(step);
        }
    }

    /// Try to place the next player's mark at `cell`
    fn place_at(&mut self, cell: usize) {
        let board = self.game.current().board;
        if board.winner().is_some() {
            self.status_message = "Game is already over".to_string();
            return;
        }
        if board.get(cell).is_some() {
            self.status_message =
                format!("Cell ({}, {}) is occupied", column_of(cell), row_of(cell));
            return;
        }

        let mark = self.game.next_mark();
        self.game.apply_move(cell);
        self.selected_step = self.game.step();
        self.status_message = format!("Placed {} at ({}, {})", mark, column_of(cell), row_of(cell));
    }

    /// Jump to a history step
    fn jump_to_step(&mut self, step: usize) {
        self.game.jump_to(step);
        self.selected_step = self.game.step();
        self.status_message = if step == 0 {
            "Jumped to game start".to_string()
        } else {
            format!("Jumped to move #{}", step)
        };
    }

    /// Flip the move list sort order
    fn toggle_sort(&mut self) {
        self.game.toggle_sort_order();
        self.status_message = match self.game.sort_order() {
            SortOrder::Ascending => "Move list sorted ascending".to_string(),
            SortOrder::Descending => "Move list sorted descending".to_string(),
        };
    }

    /// Move the move-list selection by one visual row
    fn move_selection(&mut self, delta: isize) {
        let total = self.game.history().len();
        // In descending order the list is reversed, so a visual step down
        // moves to an older entry
        let delta = match self.game.sort_order() {
            SortOrder::Ascending => delta,
            SortOrder::Descending => -delta,
        };
        let next = self.selected_step as isize + delta;
        if next >= 0 && (next as usize) < total {
            self.selected_step = next as usize;
        }
    }
}
