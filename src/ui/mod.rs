//! UI rendering module for memegen
//!
//! This module contains all the rendering logic for the terminal user interface,
//! using the ratatui library for TUI components.

pub mod editor;
pub mod help_overlay;

pub use editor::render as render_editor;
pub use help_overlay::render as render_help_overlay;
