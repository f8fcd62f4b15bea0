//! UI Module
//!
//! Front ends implementing the session's `Dialog` trait:
//!
//! - `app`: modal dialog state and the ratatui event loop (`TuiDialog`)
//! - `views`: rendering for the modal dialog and status bar
//! - `console`: plain line-oriented prompts over any reader/writer

mod app;
mod console;
mod views;

pub use app::TuiDialog;
pub use console::ConsoleDialog;
