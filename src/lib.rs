//! # Introduction
//!
//! tictty is a local, turn-based tic-tac-toe played in the terminal, with
//! time-travel move history.  Every move captures a snapshot of the board;
//! the snapshot history is navigated through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui), and jumping to a past snapshot lets
//! play branch from there.
//!
//! ## Pipeline
//!
//! ```text
//! Input event → Game controller → History snapshots → TUI
//! ```
//!
//! 1. [`game`] — the pure rules: [`game::Board`], [`game::Mark`], and win
//!    detection over the 8 fixed lines.
//! 2. [`history`] — the [`history::Game`] controller: snapshot history with
//!    truncate-on-branch, step pointer, turn order, and the sortable move
//!    list state.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Rules
//!
//! X opens and turns alternate.  A line of three equal marks wins; a full
//! board with no winning line is a draw.  Jumping to an earlier snapshot and
//! playing a move discards the snapshots beyond it.

pub mod game;
pub mod history;
pub mod ui;
