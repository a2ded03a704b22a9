//! Thread-blocking wrappers over [`crate::Client`].
//!
//! Each call runs the async client to completion on a private current-thread
//! runtime, so results and errors are exactly those of the async API. Like
//! `reqwest::blocking`, these must not be called from inside an async
//! runtime.

use std::sync::Arc;

use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

use crate::error::{Error, Result};
use crate::paginator::Direction;
use crate::params::MatchFilter;
use crate::types::{Match, Player, Status};

fn runtime() -> Result<Arc<Runtime>> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map(Arc::new)
        .map_err(Error::Runtime)
}

#[derive(Clone, Debug)]
pub struct Client {
    inner: crate::Client,
    runtime: Arc<Runtime>,
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_async(crate::Client::new(api_key)?)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_async(crate::Client::from_env()?)
    }

    /// Wraps an async client built with [`crate::ClientBuilder`].
    pub fn from_async(inner: crate::Client) -> Result<Self> {
        Ok(Self {
            inner,
            runtime: runtime()?,
        })
    }

    pub fn status(&self) -> Result<Status> {
        self.runtime.block_on(self.inner.status())
    }

    pub fn match_by_id(&self, match_id: &str, region: &str) -> Result<Match> {
        self.runtime.block_on(self.inner.match_by_id(match_id, region))
    }

    pub fn matches(&self, filter: &MatchFilter, region: &str) -> Result<MatchPaginator> {
        let inner = self.runtime.block_on(self.inner.matches(filter, region))?;
        Ok(MatchPaginator {
            inner,
            runtime: self.runtime.clone(),
        })
    }

    pub fn player_by_id(&self, player_id: &str, region: &str) -> Result<Player> {
        self.runtime.block_on(self.inner.player_by_id(player_id, region))
    }

    pub fn players(
        &self,
        region: &str,
        player_ids: Option<&[String]>,
        usernames: Option<&[String]>,
    ) -> Result<Vec<Player>> {
        self.runtime
            .block_on(self.inner.players(region, player_ids, usernames))
    }

    pub fn player_by_name(&self, username: &str, region: &str) -> Result<Player> {
        self.runtime.block_on(self.inner.player_by_name(username, region))
    }

    pub fn telemetry(&self, m: &Match) -> Result<Value> {
        self.runtime.block_on(self.inner.telemetry(m))
    }
}

#[derive(Debug)]
pub struct MatchPaginator {
    inner: crate::MatchPaginator,
    runtime: Arc<Runtime>,
}

impl MatchPaginator {
    pub fn matches(&self) -> &[Match] {
        self.inner.matches()
    }

    pub fn into_matches(self) -> Vec<Match> {
        self.inner.into_matches()
    }

    pub fn offset(&self) -> u32 {
        self.inner.offset()
    }

    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    pub fn has_prev(&self) -> bool {
        self.inner.has_prev()
    }

    pub fn advance(&mut self, direction: Direction) -> Result<&[Match]> {
        self.runtime.block_on(self.inner.advance(direction))
    }

    pub fn next(&mut self) -> Result<&[Match]> {
        self.advance(Direction::Next)
    }

    pub fn prev(&mut self) -> Result<&[Match]> {
        self.advance(Direction::Prev)
    }

    pub fn first(&mut self) -> Result<&[Match]> {
        self.advance(Direction::First)
    }
}
