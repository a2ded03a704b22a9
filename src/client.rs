use std::env;
use std::fmt;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;
use tracing::instrument;

use crate::consts::{Lookup, Region};
use crate::dispatch;
use crate::error::{EnvVarError, Error, Result};
use crate::paginator::{MatchPaginator, Page};
use crate::params::{self, MatchFilter, QueryParams};
use crate::resolve;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{Match, Player, Status};
use crate::wire::{OneOrMany, Resource};

pub const DEFAULT_HOST: &str = "https://api.dc01.gamelockerapp.com";
pub const API_KEY_VAR: &str = "GAMELOCKER_API_KEY";
pub const HOST_VAR: &str = "GAMELOCKER_HOST";

struct Inner {
    transport: Box<dyn Transport>,
    headers: HeaderMap,
    host: String,
    lookup: Lookup,
}

/// Async client for the Gamelocker API.
///
/// Cheap to clone; clones share one transport and its connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

pub struct ClientBuilder {
    api_key: String,
    host: String,
    transport: Option<Box<dyn Transport>>,
    lookup: Lookup,
}

impl ClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.into(),
            transport: None,
            lookup: Lookup::builtin(),
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Item and skin names used when resolving participants. The default,
    /// [`Lookup::builtin`], only knows a handful of codes; load the full
    /// `items.json` and `skins.json` tables with [`Lookup::from_files`].
    pub fn lookup(mut self, lookup: Lookup) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Client {
            inner: Arc::new(Inner {
                transport: self
                    .transport
                    .unwrap_or_else(|| Box::new(ReqwestTransport::new())),
                headers,
                host: self.host.trim_end_matches('/').to_string(),
                lookup: self.lookup,
            }),
        })
    }
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// requires GAMELOCKER_API_KEY, GAMELOCKER_HOST is optional
    /// can use dotenv
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        let api_key = env::var(API_KEY_VAR).map_err(|e| EnvVarError::new(API_KEY_VAR, e))?;
        let mut builder = ClientBuilder::new(api_key);
        if let Ok(host) = env::var(HOST_VAR) {
            builder = builder.host(host);
        }
        builder.build()
    }

    pub fn lookup(&self) -> &Lookup {
        &self.inner.lookup
    }

    fn shard_url(&self, region: &str, path: &str) -> Result<String> {
        let region = Region::parse(region)?;
        Ok(format!("{}/shards/{}/{path}", self.inner.host, region.code))
    }

    async fn get(&self, url: &str, query: &QueryParams) -> Result<Value> {
        dispatch::get(self.inner.transport.as_ref(), url, &self.inner.headers, query).await
    }

    pub(crate) async fn fetch_page(&self, url: &str, query: &QueryParams) -> Result<Page> {
        let doc = resolve::parse_document::<Vec<Resource>>(self.get(url, query).await?)?;
        let matches = resolve::matches_from_document(&doc, &self.inner.lookup)?;
        Ok(Page::new(matches, doc.links))
    }

    /// Release date and version of the running API.
    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<Status> {
        let url = format!("{}/status", self.inner.host);
        let doc = resolve::parse_document(self.get(&url, &QueryParams::new()).await?)?;
        resolve::build_status(&doc)
    }

    #[instrument(skip(self))]
    pub async fn match_by_id(&self, match_id: &str, region: &str) -> Result<Match> {
        let url = self.shard_url(region, &format!("matches/{match_id}"))?;
        let doc = resolve::parse_document(self.get(&url, &QueryParams::new()).await?)?;
        resolve::match_from_document(&doc, &self.inner.lookup)
    }

    /// First page of matches for `filter`. Step through further pages with
    /// the returned [`MatchPaginator`].
    #[instrument(skip(self))]
    pub async fn matches(&self, filter: &MatchFilter, region: &str) -> Result<MatchPaginator> {
        let url = self.shard_url(region, "matches")?;
        let query = params::match_params(filter)?;
        let page = self.fetch_page(&url, &query).await?;
        Ok(MatchPaginator::new(self.clone(), page))
    }

    #[instrument(skip(self))]
    pub async fn player_by_id(&self, player_id: &str, region: &str) -> Result<Player> {
        let url = self.shard_url(region, &format!("players/{player_id}"))?;
        let doc = resolve::parse_document::<OneOrMany<Resource>>(
            self.get(&url, &QueryParams::new()).await?,
        )?;
        let player = doc.data.as_slice().first().ok_or_else(|| {
            Error::EmptyResult(format!("No Player with the id '{player_id}' was found."))
        })?;
        resolve::build_player(player)
    }

    /// Up to six players at once, by id and/or name.
    #[instrument(skip(self))]
    pub async fn players(
        &self,
        region: &str,
        player_ids: Option<&[String]>,
        usernames: Option<&[String]>,
    ) -> Result<Vec<Player>> {
        let url = self.shard_url(region, "players")?;
        let query = params::player_params(player_ids, usernames)?;
        let doc = resolve::parse_document::<Vec<Resource>>(self.get(&url, &query).await?)?;
        if doc.data.is_empty() {
            return Err(Error::EmptyResult(
                "No Players with the specified criteria were found.".into(),
            ));
        }
        doc.data.iter().map(resolve::build_player).collect()
    }

    pub async fn player_by_name(&self, username: &str, region: &str) -> Result<Player> {
        let names = [username.to_string()];
        let mut players = self.players(region, None, Some(&names)).await?;
        Ok(players.swap_remove(0))
    }

    /// Raw telemetry of a match. The telemetry host is public, so only the
    /// `Accept` header is sent.
    #[instrument(skip(self, m), fields(match_id = %m.id))]
    pub async fn telemetry(&self, m: &Match) -> Result<Value> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        dispatch::get(
            self.inner.transport.as_ref(),
            &m.telemetry_url,
            &headers,
            &QueryParams::new(),
        )
        .await
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("host", &self.inner.host)
            .finish()
    }
}
