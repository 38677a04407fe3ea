//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus, expression editing
//! - **[`panes`]** — stateless render functions for each visible pane (input, chart,
//!   table, log, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Formula`] and a
//! [`Config`] and call [`App::run`] to start the event loop.
//!
//! [`Formula`]: crate::formula::Formula
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
