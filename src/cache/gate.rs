//! Freshness check and storage for the fetched meme list

use chrono::{DateTime, Duration, Utc};

use crate::data::MemeRecord;

/// Default age in hours after which the meme list is fetched again
pub const DEFAULT_REFRESH_HOURS: u64 = 24;

/// Decides whether the meme list must be fetched again
///
/// Returns `true` if there has been no fetch yet, or if at least `threshold`
/// has elapsed since `last_fetch`.
pub fn should_refetch(
    last_fetch: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    threshold: Duration,
) -> bool {
    match last_fetch {
        None => true,
        Some(last) => now - last >= threshold,
    }
}

/// The most recently fetched meme list and when it was fetched
#[derive(Debug, Clone)]
pub struct MemeListCache {
    memes: Option<Vec<MemeRecord>>,
    fetched_at: Option<DateTime<Utc>>,
    threshold: Duration,
}

impl Default for MemeListCache {
    fn default() -> Self {
        Self::new(Duration::hours(DEFAULT_REFRESH_HOURS as i64))
    }
}

impl MemeListCache {
    /// Creates an empty cache that goes stale after `threshold`
    pub fn new(threshold: Duration) -> Self {
        Self {
            memes: None,
            fetched_at: None,
            threshold,
        }
    }

    /// Whether a fetch is needed before a meme can be picked
    ///
    /// An absent list always needs a fetch, even inside the threshold.
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        self.memes.is_none() || should_refetch(self.fetched_at, now, self.threshold)
    }

    /// Stores the result of a successful fetch
    ///
    /// `memes` may be `None` when the response envelope carried no list; the
    /// timestamp is still recorded.
    pub fn replace(&mut self, memes: Option<Vec<MemeRecord>>, now: DateTime<Utc>) {
        self.memes = memes;
        self.fetched_at = Some(now);
    }

    /// The cached list, if present and non-empty
    pub fn memes(&self) -> Option<&[MemeRecord]> {
        self.memes.as_deref().filter(|list| !list.is_empty())
    }

    /// When the list was last replaced
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Time elapsed since the last fetch
    pub fn age(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.fetched_at.map(|at| now - at)
    }
}
