//! memegen library
//!
//! Exposes the editor state, the meme list client and cache, and the UI so
//! the binary and the integration tests share one implementation.

pub mod app;
pub mod cache;
pub mod captions;
pub mod cli;
pub mod data;
pub mod feedback;
pub mod logging;
pub mod page;
pub mod render;
pub mod ui;
