//! # TUI Components
//!
//! All widgets for the terminal interface. Each one is props-based: it is
//! built per frame from plain values and knows nothing about `Game`.
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── board_view.rs      (the 4×4 grid)
//! ├── status_bar.rs      (moves and largest tile)
//! └── confirm_dialog.rs  (yes/no exit modal)
//! ```

pub mod board_view;
pub mod confirm_dialog;
pub mod status_bar;

pub use board_view::BoardView;
pub use confirm_dialog::ConfirmDialog;
pub use status_bar::StatusBar;
