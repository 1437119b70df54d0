//! In-memory registry of live scoreboards.
//!
//! This module provides the `ScoreboardRegistry` shared between the gateway event
//! handlers and the update scheduler. It mirrors the persisted rows and adds the
//! transient state of each scoreboard: the page currently displayed and the statistics
//! of the last successful fetch. Locks are only held for in-memory reads and writes,
//! never across network I/O.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::{
    model::{scoreboard::Scoreboard, stats::MatchStats},
    service::scoreboard::embed::{clamp_page, total_pages},
};

/// A scoreboard together with its display state.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveScoreboard {
    pub scoreboard: Scoreboard,
    /// Page currently displayed, starting at 1.
    pub page: usize,
    /// Statistics of the last successful fetch, if any.
    pub stats: Option<MatchStats>,
}

impl LiveScoreboard {
    pub fn new(scoreboard: Scoreboard) -> Self {
        Self {
            scoreboard,
            page: 1,
            stats: None,
        }
    }
}

/// Shared list of live scoreboards.
///
/// Cloning is cheap; all clones share the same list.
#[derive(Clone, Default)]
pub struct ScoreboardRegistry {
    /// Live scoreboards in registration order.
    inner: Arc<RwLock<Vec<LiveScoreboard>>>,
    /// Set once the list has been loaded from the database.
    loaded: Arc<AtomicBool>,
    /// Held for the duration of an update pass.
    update_lock: Arc<Mutex<()>>,
}

impl ScoreboardRegistry {
    /// Creates an empty registry.
    ///
    /// # Returns
    /// - `ScoreboardRegistry` - Registry with no scoreboards that has not been loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the registry as loaded.
    ///
    /// The gateway fires `ready` again after a reconnect; only the first call should
    /// load the scoreboards from the database.
    ///
    /// # Returns
    /// - `true` - This call marked the registry as loaded
    /// - `false` - The registry was already loaded
    pub fn mark_loaded(&self) -> bool {
        !self.loaded.swap(true, Ordering::SeqCst)
    }

    /// Reverts `mark_loaded` so a later `ready` retries loading.
    pub fn unmark_loaded(&self) {
        self.loaded.store(false, Ordering::SeqCst);
    }

    /// Tries to start an update pass.
    ///
    /// # Returns
    /// - `Some(guard)` - No other pass is running; the pass lasts while the guard lives
    /// - `None` - Another pass is still running
    pub fn try_begin_update(&self) -> Option<OwnedMutexGuard<()>> {
        self.update_lock.clone().try_lock_owned().ok()
    }

    /// Adds a scoreboard, replacing any live entry that uses the same message.
    pub async fn insert(&self, scoreboard: Scoreboard) {
        let mut scoreboards = self.inner.write().await;

        match scoreboards
            .iter_mut()
            .find(|live| live.scoreboard.message_id == scoreboard.message_id)
        {
            Some(live) => *live = LiveScoreboard::new(scoreboard),
            None => scoreboards.push(LiveScoreboard::new(scoreboard)),
        }
    }

    /// Replaces the scoreboard of the entry currently keyed by `message_id`.
    ///
    /// Used after the configuration changed or the message was reposted. The page and
    /// cached statistics are kept.
    ///
    /// # Returns
    /// - `true` - Entry found and replaced
    /// - `false` - No entry uses `message_id`
    pub async fn replace(&self, message_id: u64, scoreboard: Scoreboard) -> bool {
        let mut scoreboards = self.inner.write().await;

        match scoreboards
            .iter_mut()
            .find(|live| live.scoreboard.message_id == message_id)
        {
            Some(live) => {
                live.scoreboard = scoreboard;
                true
            }
            None => false,
        }
    }

    /// Removes the entry keyed by `message_id`.
    pub async fn remove(&self, message_id: u64) -> Option<LiveScoreboard> {
        let mut scoreboards = self.inner.write().await;

        let position = scoreboards
            .iter()
            .position(|live| live.scoreboard.message_id == message_id)?;

        Some(scoreboards.remove(position))
    }

    /// Gets a copy of the entry keyed by `message_id`.
    pub async fn get(&self, message_id: u64) -> Option<LiveScoreboard> {
        self.inner
            .read()
            .await
            .iter()
            .find(|live| live.scoreboard.message_id == message_id)
            .cloned()
    }

    pub async fn contains(&self, message_id: u64) -> bool {
        self.inner
            .read()
            .await
            .iter()
            .any(|live| live.scoreboard.message_id == message_id)
    }

    /// Message ids of all entries in registration order.
    pub async fn message_ids(&self) -> Vec<u64> {
        self.inner
            .read()
            .await
            .iter()
            .map(|live| live.scoreboard.message_id)
            .collect()
    }

    /// Scoreboards of one guild in registration order.
    pub async fn by_guild(&self, guild_id: u64) -> Vec<Scoreboard> {
        self.inner
            .read()
            .await
            .iter()
            .filter(|live| live.scoreboard.guild_id == guild_id)
            .map(|live| live.scoreboard.clone())
            .collect()
    }

    /// Caches freshly fetched statistics and returns the page to render.
    ///
    /// The page is read at this point rather than before the fetch, so a page picked
    /// while the fetch was running is kept. It is clamped to the pages of `stats`.
    ///
    /// # Returns
    /// - `Some(usize)` - Page to render
    /// - `None` - The entry was removed or re-keyed during the fetch
    pub async fn store_stats(&self, message_id: u64, stats: MatchStats) -> Option<usize> {
        let mut scoreboards = self.inner.write().await;

        let live = scoreboards
            .iter_mut()
            .find(|live| live.scoreboard.message_id == message_id)?;

        live.page = clamp_page(live.page, total_pages(stats.players.len()));
        live.stats = Some(stats);

        Some(live.page)
    }

    /// Switches the page of an entry that has cached statistics.
    ///
    /// The requested page is clamped to the pages of the cached statistics.
    ///
    /// # Returns
    /// - `Some(LiveScoreboard)` - The page changed; copy of the entry after the change
    /// - `None` - No entry uses `message_id`, nothing was fetched yet, or the page is
    ///   already shown
    pub async fn select_page(&self, message_id: u64, page: usize) -> Option<LiveScoreboard> {
        let mut scoreboards = self.inner.write().await;

        let live = scoreboards
            .iter_mut()
            .find(|live| live.scoreboard.message_id == message_id)?;
        let players = live.stats.as_ref()?.players.len();

        let page = clamp_page(page, total_pages(players));
        if live.page == page {
            return None;
        }

        live.page = page;
        Some(live.clone())
    }
}
