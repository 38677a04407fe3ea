//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`input`]: Expression editor with syntax highlighting and error marker
//! - [`chart`]: Plot of the sampled formula
//! - [`table`]: Scrollable x / f(x) table
//! - [`logs`]: Captured log messages
//! - [`status`]: Status bar with keybindings and the current interval
//!
//! Each pane module exports a `render_*` function that draws from borrowed
//! state; scroll offsets are passed by `&mut` so the renderer can clamp them
//! to the visible area.

pub mod chart;
pub mod input;
pub mod logs;
pub mod status;
pub mod table;

// Re-export render functions for convenience
pub use chart::render_chart_pane;
pub use input::render_input_pane;
pub use logs::render_log_pane;
pub use status::render_status_bar;
pub use table::render_table_pane;
