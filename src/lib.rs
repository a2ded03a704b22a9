//! Client for the Gamelocker (Vainglory) match and player API.
//!
//! Responses arrive as JSON:API envelopes; this crate resolves the
//! `included` sideload into a typed graph of [`Match`] → [`Roster`] →
//! [`Participant`] → [`Player`] and pages through match listings with
//! [`MatchPaginator`].
//!
//! ```no_run
//! use gamelocker::{Client, MatchFilter};
//!
//! #[tokio::main]
//! async fn main() -> gamelocker::Result<()> {
//!     let client = Client::from_env()?;
//!
//!     let filter = MatchFilter::new().player_names(["Alpha"]).limit(5);
//!     let mut page = client.matches(&filter, "na").await?;
//!     for m in &page {
//!         println!("{} {} {}s", m.id, m.game_mode.label, m.duration);
//!     }
//!     if page.has_next() {
//!         page.next().await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`blocking::Client`] offers the same operations without async.

pub mod blocking;
mod client;
pub mod consts;
mod dispatch;
mod error;
mod paginator;
mod params;
pub mod resolve;
mod transport;
mod types;
pub mod wire;

#[cfg(test)]
mod fixtures;

pub use client::{Client, ClientBuilder, API_KEY_VAR, DEFAULT_HOST, HOST_VAR};
pub use consts::{GameMode, Lookup, Region};
pub use dispatch::classify;
pub use error::{EnvVarError, Error, IOError, JSONError, RequestError, Result, TransportError};
pub use paginator::{Direction, MatchPaginator};
pub use params::{match_params, player_params, MatchFilter, QueryParams, TimeBound};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use types::{
    CurrentElo, GamesPlayed, Karma, Match, Participant, Player, PlayerProfile, Roster, Status,
};
