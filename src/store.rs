use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::*;
use crate::core::db::SessionBackend;
use crate::core::helpers::{Clock, SystemClock};
use crate::core::seed::{default_accounts, default_posts};
use crate::models::models::{Account, LikedSet, Post};

/// Typed view over the session container.
///
/// Every collection is read and written whole: callers read, modify and write
/// back the full list.
pub struct SessionStore<B: SessionBackend> {
    backend: B,
    clock: Box<dyn Clock>,
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_clock(backend, SystemClock)
    }

    pub fn with_clock(backend: B, clock: impl Clock + 'static) -> Self {
        Self { backend, clock: Box::new(clock) }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Seeds accounts and posts when their keys are absent. Safe to call on
    /// every page load.
    pub fn initialize(&mut self) -> anyhow::Result<()> {
        if !self.backend.contains_key(ACCOUNTS_KEY)? {
            debug!("seeding accounts");
            self.set_accounts(&default_accounts())?;
        }
        if !self.backend.contains_key(POSTS_KEY)? {
            debug!("seeding posts");
            let posts = default_posts(self.now());
            self.set_posts(&posts)?;
        }
        Ok(())
    }

    /// Stored accounts, or the seed accounts if none are stored. Does not
    /// persist the seed.
    pub fn accounts(&self) -> anyhow::Result<Vec<Account>> {
        Ok(self
            .backend
            .get_json(ACCOUNTS_KEY)?
            .unwrap_or_else(default_accounts))
    }

    pub fn set_accounts(&mut self, accounts: &[Account]) -> anyhow::Result<()> {
        debug!(count = accounts.len(), "writing accounts");
        self.backend.set_json(ACCOUNTS_KEY, accounts)
    }

    /// Stored posts with timestamps revived, or the seed posts if none are
    /// stored.
    pub fn posts(&self) -> anyhow::Result<Vec<Post>> {
        match self.backend.get_json(POSTS_KEY)? {
            Some(posts) => Ok(posts),
            None => Ok(default_posts(self.now())),
        }
    }

    pub fn set_posts(&mut self, posts: &[Post]) -> anyhow::Result<()> {
        debug!(count = posts.len(), "writing posts");
        self.backend.set_json(POSTS_KEY, posts)
    }

    pub fn current_user(&self) -> anyhow::Result<Option<Account>> {
        self.backend.get_json(CURRENT_USER_KEY)
    }

    /// `None` removes the key, so "logged in" is exactly "key present".
    pub fn set_current_user(&mut self, user: Option<&Account>) -> anyhow::Result<()> {
        match user {
            Some(account) => {
                debug!(user_id = account.id, "setting current user");
                self.backend.set_json(CURRENT_USER_KEY, account)
            }
            None => {
                debug!("clearing current user");
                self.backend.remove_item(CURRENT_USER_KEY)
            }
        }
    }

    pub fn is_logged_in(&self) -> anyhow::Result<bool> {
        self.backend.contains_key(CURRENT_USER_KEY)
    }

    pub fn liked_posts(&self) -> anyhow::Result<LikedSet> {
        let ids: Vec<u64> = self.backend.get_json(LIKED_POSTS_KEY)?.unwrap_or_default();
        Ok(ids.into_iter().collect())
    }

    pub fn set_liked_posts(&mut self, liked: &LikedSet) -> anyhow::Result<()> {
        let ids: Vec<u64> = liked.iter().copied().collect();
        self.backend.set_json(LIKED_POSTS_KEY, &ids)
    }

    /// Drops every collection, as when the session ends.
    pub fn clear(&mut self) -> anyhow::Result<()> {
        for key in [ACCOUNTS_KEY, POSTS_KEY, CURRENT_USER_KEY, LIKED_POSTS_KEY] {
            self.backend.remove_item(key)?;
        }
        Ok(())
    }
}
