//! # Core Game Logic
//!
//! This module contains the game itself.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board (engine)       │
//!                    │  • Game  (state)        │
//!                    │  • Action / update()    │
//!                    │  • run() (controller)   │
//!                    │                         │
//!                    │  No terminal. Pure.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                  KeySource ────┼──── Renderer
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: the 4×4 grid and every move/merge/spawn rule
//! - [`state`]: the `Game` struct, one live board plus its phase
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`controller`]: the blocking read → update → draw loop
//! - [`config`]: settings file, env and CLI resolution

pub mod action;
pub mod board;
pub mod config;
pub mod controller;
pub mod state;
