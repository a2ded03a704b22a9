use std::fmt;
use std::ops::Index;

use reqwest::Url;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::types::Match;
use crate::wire::Links;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
    First,
}

impl Direction {
    fn boundary(self) -> &'static str {
        match self {
            Direction::Next => "This is the last page",
            Direction::Prev | Direction::First => "This is the first page",
        }
    }
}

/// One resolved page of a listing and the links around it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Page {
    matches: Vec<Match>,
    offset: u32,
    links: Links,
}

impl Page {
    pub(crate) fn new(matches: Vec<Match>, links: Links) -> Self {
        let offset = links
            .this
            .as_deref()
            .and_then(|link| Url::parse(link).ok())
            .and_then(|url| {
                url.query_pairs()
                    .find(|(k, _)| k == "page[offset]")
                    .and_then(|(_, v)| v.parse().ok())
            })
            .unwrap_or(0);
        Self {
            matches,
            offset,
            links,
        }
    }

    fn link(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Next => self.links.next.as_deref(),
            Direction::Prev => self.links.prev.as_deref(),
            Direction::First => self.links.first.as_deref(),
        }
    }
}

/// A page of matches from [`Client::matches`].
///
/// Moving to another page swaps in a freshly resolved page as a whole; a
/// failed move leaves the current page untouched. Advancing needs `&mut self`,
/// so a page cannot change while it is borrowed.
pub struct MatchPaginator {
    client: Client,
    page: Page,
}

impl MatchPaginator {
    pub(crate) fn new(client: Client, page: Page) -> Self {
        Self { client, page }
    }

    pub fn matches(&self) -> &[Match] {
        &self.page.matches
    }

    pub fn into_matches(self) -> Vec<Match> {
        self.page.matches
    }

    /// `page[offset]` of the current page's self link, 0 when absent.
    pub fn offset(&self) -> u32 {
        self.page.offset
    }

    pub fn has_next(&self) -> bool {
        self.page.links.next.is_some()
    }

    pub fn has_prev(&self) -> bool {
        self.page.links.prev.is_some()
    }

    pub fn len(&self) -> usize {
        self.page.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.page.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.page.matches.iter()
    }

    pub async fn advance(&mut self, direction: Direction) -> Result<&[Match]> {
        let url = self
            .page
            .link(direction)
            .ok_or_else(|| Error::Pagination(direction.boundary().into()))?
            .to_string();

        self.page = self.client.fetch_page(&url, &Default::default()).await?;
        Ok(&self.page.matches)
    }

    pub async fn next(&mut self) -> Result<&[Match]> {
        self.advance(Direction::Next).await
    }

    pub async fn prev(&mut self) -> Result<&[Match]> {
        self.advance(Direction::Prev).await
    }

    pub async fn first(&mut self) -> Result<&[Match]> {
        self.advance(Direction::First).await
    }
}

impl fmt::Debug for MatchPaginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchPaginator")
            .field("offset", &self.page.offset)
            .field("matches", &self.page.matches.len())
            .field("next", &self.has_next())
            .field("prev", &self.has_prev())
            .finish()
    }
}

impl Index<usize> for MatchPaginator {
    type Output = Match;

    fn index(&self, index: usize) -> &Match {
        &self.page.matches[index]
    }
}

impl<'a> IntoIterator for &'a MatchPaginator {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
