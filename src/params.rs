//! Query parameters for the `/matches` and `/players` endpoints.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::consts::GameMode;
use crate::error::{Error, Result};

pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Max ids or names accepted by a single `/players` request.
pub const MAX_PLAYERS: usize = 6;

pub type QueryParams = BTreeMap<&'static str, String>;

/// A `createdAt` bound, either already formatted or as a timestamp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimeBound {
    Iso(String),
    At(DateTime<Utc>),
}

impl From<&str> for TimeBound {
    fn from(s: &str) -> Self {
        TimeBound::Iso(s.to_string())
    }
}

impl From<String> for TimeBound {
    fn from(s: String) -> Self {
        TimeBound::Iso(s)
    }
}

impl From<DateTime<Utc>> for TimeBound {
    fn from(t: DateTime<Utc>) -> Self {
        TimeBound::At(t)
    }
}

/// Filters for listing matches. Every field is optional; only the set ones
/// end up in the query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub after: Option<TimeBound>,
    pub before: Option<TimeBound>,
    pub player_ids: Option<Vec<String>>,
    pub player_names: Option<Vec<String>>,
    pub game_modes: Option<Vec<String>>,
}

impl MatchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn after(mut self, after: impl Into<TimeBound>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub fn before(mut self, before: impl Into<TimeBound>) -> Self {
        self.before = Some(before.into());
        self
    }

    pub fn player_ids<I: ToString>(mut self, ids: impl IntoIterator<Item = I>) -> Self {
        self.player_ids = Some(ids.into_iter().map(|id| id.to_string()).collect());
        self
    }

    pub fn player_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.player_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn game_modes<S: Into<String>>(mut self, modes: impl IntoIterator<Item = S>) -> Self {
        self.game_modes = Some(modes.into_iter().map(Into::into).collect());
        self
    }
}

fn parse_iso(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, ISO_FORMAT)
        .ok()
        .map(|t| t.and_utc())
}

fn not_iso(name: &str) -> Error {
    Error::filter(format!(
        "'{name}', if a string, should follow the iso8601 format '{ISO_FORMAT}'"
    ))
}

fn not_ordered() -> Error {
    Error::filter("'after' must occur at a time before 'before'")
}

/// Validates a lone bound and renders it for the wire.
fn single_bound(name: &str, bound: &TimeBound) -> Result<String> {
    match bound {
        TimeBound::At(t) => Ok(t.format(ISO_FORMAT).to_string()),
        TimeBound::Iso(s) => match parse_iso(s) {
            Some(_) => Ok(s.clone()),
            None => Err(not_iso(name)),
        },
    }
}

/// Validates a pair of bounds. The type check runs first: a mixed pair is
/// rejected before either side's format is looked at.
fn bound_pair(after: &TimeBound, before: &TimeBound) -> Result<(String, String)> {
    match (after, before) {
        (TimeBound::At(a), TimeBound::At(b)) => {
            if b <= a {
                return Err(not_ordered());
            }
            Ok((
                a.format(ISO_FORMAT).to_string(),
                b.format(ISO_FORMAT).to_string(),
            ))
        }
        (TimeBound::Iso(a), TimeBound::Iso(b)) => {
            let (Some(ta), Some(tb)) = (parse_iso(a), parse_iso(b)) else {
                return Err(Error::filter(format!(
                    "'after' and 'before', if strings, should follow the iso8601 format '{ISO_FORMAT}'"
                )));
            };
            if tb <= ta {
                return Err(not_ordered());
            }
            Ok((a.clone(), b.clone()))
        }
        _ => Err(Error::filter(
            "'after' and 'before' should both be either strings or timestamps",
        )),
    }
}

/// An empty list filters nothing, so it counts as not supplied.
fn non_empty(list: Option<&[String]>) -> Option<&[String]> {
    list.filter(|items| !items.is_empty())
}

pub fn match_params(filter: &MatchFilter) -> Result<QueryParams> {
    let (after, before) = match (&filter.after, &filter.before) {
        (Some(a), Some(b)) => {
            let (a, b) = bound_pair(a, b)?;
            (Some(a), Some(b))
        }
        (Some(a), None) => (Some(single_bound("after", a)?), None),
        (None, Some(b)) => (None, Some(single_bound("before", b)?)),
        (None, None) => (None, None),
    };

    let game_modes = non_empty(filter.game_modes.as_deref())
        .map(|modes| {
            modes
                .iter()
                .map(|m| GameMode::parse(m).map(|mode| mode.code))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;

    let mut params = QueryParams::new();
    if let Some(offset) = filter.offset {
        params.insert("page[offset]", offset.to_string());
    }
    if let Some(limit) = filter.limit {
        params.insert("page[limit]", limit.to_string());
    }
    if let Some(after) = after {
        params.insert("filter[createdAt-start]", after);
    }
    if let Some(before) = before {
        params.insert("filter[createdAt-end]", before);
    }
    if let Some(names) = non_empty(filter.player_names.as_deref()) {
        params.insert("filter[playerNames]", names.join(","));
    }
    if let Some(ids) = non_empty(filter.player_ids.as_deref()) {
        params.insert("filter[playerIds]", ids.join(","));
    }
    if let Some(modes) = game_modes {
        params.insert("filter[gameModes]", modes.join(","));
    }
    Ok(params)
}

pub fn player_params(player_ids: Option<&[String]>, usernames: Option<&[String]>) -> Result<QueryParams> {
    let player_ids = non_empty(player_ids);
    let usernames = non_empty(usernames);
    if player_ids.is_none() && usernames.is_none() {
        return Err(Error::filter(
            "One of the filters 'playerids' and 'usernames' is required.",
        ));
    }
    if player_ids.is_some_and(|ids| ids.len() > MAX_PLAYERS) {
        return Err(Error::filter(format!(
            "Only a maximum of {MAX_PLAYERS} playerIDs are allowed for a single request of get_players."
        )));
    }
    if usernames.is_some_and(|names| names.len() > MAX_PLAYERS) {
        return Err(Error::filter(format!(
            "Only a maximum of {MAX_PLAYERS} usernames are allowed for a single request of get_players."
        )));
    }

    let mut params = QueryParams::new();
    if let Some(ids) = player_ids {
        params.insert("filter[playerIds]", ids.join(","));
    }
    if let Some(names) = usernames {
        params.insert("filter[playerNames]", names.join(","));
    }
    Ok(params)
}
