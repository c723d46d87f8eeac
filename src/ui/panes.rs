//! Rendering logic for each TUI pane

use crate::game::{Mark, Win};
use crate::history::{Game, SortOrder, Status};
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width and height of a single board cell, borders included.
const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => DEFAULT_THEME.primary,
        Mark::O => DEFAULT_THEME.secondary,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Lay out the 3x3 grid of cell rects, centered in `inner`.
fn board_grid(inner: Rect) -> [Rect; 9] {
    let grid_w = CELL_WIDTH * 3;
    let grid_h = CELL_HEIGHT * 3;
    let gx = inner.x + inner.width.saturating_sub(grid_w) / 2;
    let gy = inner.y + inner.height.saturating_sub(grid_h) / 2;

    let mut rects = [Rect::default(); 9];
    for (i, rect) in rects.iter_mut().enumerate() {
        let col = (i % 3) as u16;
        let row = (i / 3) as u16;
        *rect = Rect::new(
            gx + col * CELL_WIDTH,
            gy + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(inner);
    }
    rects
}

/// Render the board pane: a 3x3 grid of bordered cells.
///
/// The winning triple (if any) is highlighted, and the keyboard cursor is
/// shown when the pane is focused. Each cell's rect is written to
/// `cell_rects` for mouse hit-testing.
pub fn render_board_pane(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    cursor: usize,
    is_focused: bool,
    cell_rects: &mut [Rect; 9],
) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board = game.current().board;
    let win: Option<Win> = board.winner();
    let grid = board_grid(inner);

    for (i, rect) in grid.iter().enumerate() {
        cell_rects[i] = *rect;
        if rect.width == 0 || rect.height == 0 {
            continue;
        }

        let is_winning = win.map(|w| w.contains(i)).unwrap_or(false);
        let is_cursor = is_focused && i == cursor;

        let cell_border = if is_winning {
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD)
        } else if is_cursor {
            Style::default().fg(DEFAULT_THEME.border_focused)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        };

        let span = match board.get(i) {
            Some(mark) if is_winning => Span::styled(
                mark.as_str(),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(mark) => Span::styled(mark.as_str(), mark_style(mark)),
            None => Span::raw(" "),
        };

        let mut cell = Paragraph::new(Line::from(span))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(cell_border),
            );
        if is_cursor {
            cell = cell.style(Style::default().bg(DEFAULT_THEME.cursor_bg));
        }
        frame.render_widget(cell, *rect);
    }
}

fn status_line(game: &Game) -> Line<'static> {
    match game.status() {
        Status::Winner(win) => Line::from(vec![
            Span::styled("Winner: ", Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(
                win.mark.as_str(),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Status::Draw => Line::from(Span::styled(
            "The Result Is A Draw",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        Status::NextPlayer(mark) => Line::from(vec![
            Span::styled("Next player: ", Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(mark.as_str(), mark_style(mark)),
        ]),
    }
}

/// Render the moves pane: status line, sort toggle, and the move list.
///
/// The sort toggle's rect and each visible move row's rect (paired with its
/// history step) are written out for mouse hit-testing. `scroll` is adjusted
/// so the keyboard selection stays visible.
pub fn render_moves_pane(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    selected: usize,
    is_focused: bool,
    scroll: &mut usize,
    sort_rect: &mut Rect,
    row_hits: &mut Vec<(Rect, usize)>,
) {
    let block = Block::default()
        .title(" Moves ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status
            Constraint::Length(1), // sort toggle
            Constraint::Length(1), // spacer
            Constraint::Min(0),    // move list
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(status_line(game)), rows[0]);

    let (sort_label, toggle_text) = match game.sort_order() {
        SortOrder::Ascending => ("Sorted Ascending By Age", "[ Sort Descending ]"),
        SortOrder::Descending => ("Sorted Descending By Age", "[ Sort Ascending ]"),
    };
    let sort_line = Line::from(vec![
        Span::styled(sort_label, Style::default().fg(DEFAULT_THEME.comment)),
        Span::raw("  "),
        Span::styled(
            toggle_text,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(sort_line), rows[1]);
    *sort_rect = rows[1];

    let list_area = rows[3];
    let visible_height = list_area.height as usize;
    row_hits.clear();
    if visible_height == 0 {
        return;
    }

    // Steps in display order.
    let total = game.history().len();
    let order: Vec<usize> = match game.sort_order() {
        SortOrder::Ascending => (0..total).collect(),
        SortOrder::Descending => (0..total).rev().collect(),
    };

    // Keep the keyboard selection in view.
    let selected_pos = order.iter().position(|&s| s == selected).unwrap_or(0);
    if selected_pos < *scroll {
        *scroll = selected_pos;
    } else if selected_pos >= *scroll + visible_height {
        *scroll = selected_pos + 1 - visible_height;
    }
    *scroll = (*scroll).min(total.saturating_sub(visible_height));

    let mut lines = Vec::new();
    for (row, &step) in order.iter().skip(*scroll).take(visible_height).enumerate() {
        let entry = &game.history()[step];
        let desc = match entry.last_move {
            Some(m) => format!("Go to move #{} ({}, {})", step, m.column, m.row),
            None => "Go to game start".to_string(),
        };

        let is_current = step == game.step();
        let is_selected = is_focused && step == selected;

        let mut style = if is_current {
            Style::default()
                .fg(DEFAULT_THEME.current_step)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        if is_selected {
            style = style.bg(DEFAULT_THEME.cursor_bg);
        }

        let marker = if is_current { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(format!("{}{}", marker, desc), style)));

        let rect = Rect::new(list_area.x, list_area.y + row as u16, list_area.width, 1);
        row_hits.push((rect, step));
    }

    frame.render_widget(Paragraph::new(lines), list_area);
}

/// Render the bottom status bar with the latest message and keybinds.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    total_steps: usize,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            format!(" Move {}/{} ", current_step, total_steps.saturating_sub(1)),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.cursor_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.cursor_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];
    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.cursor_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.cursor_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.cursor_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" ↑↓←→ ", key_style),
        Span::styled(" move ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⏎ ", key_style),
        Span::styled(" place/jump ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" s ", key_style),
        Span::styled(" sort ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];
    let right = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.cursor_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
