//! In-memory cache for the meme template list
//!
//! The list is kept for the lifetime of the process and refetched once it is
//! older than the configured threshold (24 hours by default). Nothing is
//! written to disk.

mod gate;

pub use gate::{should_refetch, MemeListCache, DEFAULT_REFRESH_HOURS};
