//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, event loop, keyboard and mouse handling,
//!   pane focus
//! - **[`panes`]** — stateless render functions for each visible pane (board,
//!   move list, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Game`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Game`]: crate::history::Game
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
