//! Rebuilds the match graph from an envelope by following relationship
//! references into `included`.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::consts::{GameMode, Lookup, Region};
use crate::error::{Error, Result};
use crate::types::{
    CurrentElo, GamesPlayed, Karma, Match, Participant, Player, PlayerProfile, Roster, Status,
};
use crate::wire::{
    AssetAttributes, Document, MatchAttributes, ParticipantAttributes, PlayerAttributes,
    PlayerStats, Reference, Resource, RosterAttributes, StatusAttributes,
};

/// `included`, indexed by id.
pub struct Included<'a> {
    by_id: HashMap<&'a str, &'a Resource>,
}

impl<'a> Included<'a> {
    pub fn new(resources: &'a [Resource]) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(resources.len());
        for resource in resources {
            if by_id.insert(resource.id.as_str(), resource).is_some() {
                return Err(Error::integrity(format!(
                    "'{}' appears more than once in included",
                    resource.id
                )));
            }
        }
        Ok(Self { by_id })
    }

    pub fn get(&self, id: &str) -> Option<&'a Resource> {
        self.by_id.get(id).copied()
    }

    pub fn resolve(&self, id: &str) -> Result<&'a Resource> {
        self.get(id)
            .ok_or_else(|| Error::integrity(format!("'{id}' is referenced but not included")))
    }
}

pub fn parse_document<D: DeserializeOwned>(body: Value) -> Result<Document<D>> {
    serde_json::from_value(body).map_err(|e| Error::integrity(format!("envelope: {e}")))
}

fn attributes<T: DeserializeOwned>(resource: &Resource) -> Result<T> {
    let attrs = resource.attributes.as_ref().ok_or_else(|| {
        Error::integrity(format!("{} '{}' has no attributes", resource.kind, resource.id))
    })?;
    T::deserialize(attrs)
        .map_err(|e| Error::integrity(format!("{} '{}': {e}", resource.kind, resource.id)))
}

fn related<'r>(resource: &'r Resource, name: &str) -> Result<&'r [Reference]> {
    resource.related(name).ok_or_else(|| {
        Error::integrity(format!(
            "{} '{}' has no '{name}' relationship",
            resource.kind, resource.id
        ))
    })
}

fn region(code: &str) -> Result<Region> {
    Region::from_code(code).ok_or_else(|| Error::integrity(format!("unknown region '{code}'")))
}

fn game_mode(code: &str) -> Result<GameMode> {
    GameMode::from_code(code)
        .ok_or_else(|| Error::integrity(format!("unknown game mode '{code}'")))
}

pub fn build_status(doc: &Document<Resource>) -> Result<Status> {
    let attrs: StatusAttributes = attributes(&doc.data)?;
    Ok(Status {
        released_at: attrs.released_at,
        version: attrs.version,
    })
}

/// A resource without `attributes` is a stub; anything else must carry a
/// full stat block.
pub fn build_player(resource: &Resource) -> Result<Player> {
    if resource.attributes.is_none() {
        return Ok(Player::Stub {
            id: resource.id.clone(),
        });
    }
    Ok(Player::Full(Box::new(profile(resource)?)))
}

fn profile(resource: &Resource) -> Result<PlayerProfile> {
    let attrs: PlayerAttributes = attributes(resource)?;
    let stats = attrs.stats;

    let games_played = games_played(&stats)
        .ok_or_else(|| Error::integrity(format!("player '{}' has no games played", resource.id)))?;

    let elo_history = BTreeMap::from([
        (4, stats.elo_earned_season_4),
        (5, stats.elo_earned_season_5),
        (6, stats.elo_earned_season_6),
        (7, stats.elo_earned_season_7),
        (8, stats.elo_earned_season_8),
        (9, stats.elo_earned_season_9),
    ]);

    Ok(PlayerProfile {
        id: resource.id.clone(),
        name: attrs.name,
        region: region(&attrs.shard_id)?,
        elo_history,
        karma: Karma::from(stats.karma_level),
        account_level: stats.level,
        lifetime_gold: stats.lifetime_gold,
        games_played,
        skill_tier: stats.skill_tier,
        win_streak: stats.win_streak,
        wins: stats.wins,
        xp: stats.xp,
        guild_tag: stats.guild_tag,
        current_elo: stats.rank_points.map(|p| CurrentElo {
            blitz: p.blitz,
            ranked: p.ranked,
        }),
    })
}

fn games_played(stats: &PlayerStats) -> Option<GamesPlayed> {
    if let Some(g) = &stats.games_played {
        return Some(GamesPlayed {
            battle_royale: g.aral,
            blitz: g.blitz,
            casual: g.casual,
            ranked: g.ranked,
            onslaught: Some(g.blitz_rounds),
        });
    }
    Some(GamesPlayed {
        battle_royale: stats.played_aral?,
        blitz: stats.played_blitz?,
        casual: stats.played_casual?,
        ranked: stats.played_ranked?,
        onslaught: stats.played_blitz_rounds,
    })
}

/// Players are the one reference allowed to dangle: an id missing from
/// `included` is a stub, not an error. Match sideloads usually carry only part
/// of a profile, and anything short of the full `/players` stat block is a
/// stub as well.
fn player_ref(reference: &Reference, included: &Included) -> Player {
    let sideloaded = included
        .get(&reference.id)
        .filter(|resource| resource.attributes.is_some());
    match sideloaded.map(profile) {
        Some(Ok(profile)) => Player::Full(Box::new(profile)),
        Some(Err(e)) => {
            debug!(player = %reference.id, error = %e, "partial player sideload");
            Player::Stub {
                id: reference.id.clone(),
            }
        }
        None => Player::Stub {
            id: reference.id.clone(),
        },
    }
}

fn translate_items(items: BTreeMap<String, u32>, lookup: &Lookup) -> BTreeMap<String, u32> {
    let mut named = BTreeMap::new();
    for (code, quantity) in items {
        *named.entry(lookup.item(&code)).or_insert(0) += quantity;
    }
    named
}

pub fn build_participant(
    reference: &Reference,
    included: &Included,
    lookup: &Lookup,
) -> Result<Participant> {
    let resource = included.resolve(&reference.id)?;
    let attrs: ParticipantAttributes = attributes(resource)?;
    let stats = attrs.stats;

    let player = match related(resource, "player")?.first() {
        Some(player) => player_ref(player, included),
        None => {
            return Err(Error::integrity(format!(
                "participant '{}' has no player",
                resource.id
            )))
        }
    };

    Ok(Participant {
        id: resource.id.clone(),
        actor: attrs.actor,
        region: region(&attrs.shard_id)?,
        assists: stats.assists,
        crystal_mines_captured: stats.crystal_mine_captures,
        deaths: stats.deaths,
        farm: stats.farm,
        first_time_afk: stats.first_afk_time == 1.0,
        went_afk: stats.went_afk,
        gold: stats.gold,
        gold_mines_captured: stats.gold_mine_captures,
        items_bought: translate_items(stats.item_grants, lookup),
        items_sold: translate_items(stats.item_sells, lookup),
        items_used: translate_items(stats.item_uses, lookup),
        final_build: stats.items,
        jungle_kills: stats.jungle_kills,
        kills: stats.kills,
        krakens_captured: stats.kraken_captures,
        minion_kills: stats.minion_kills,
        skin: lookup.skin(&stats.skin_key),
        turrets_captured: stats.turret_captures,
        winner: stats.winner,
        player,
    })
}

pub fn build_roster(reference: &Reference, included: &Included, lookup: &Lookup) -> Result<Roster> {
    let resource = included.resolve(&reference.id)?;
    let attrs: RosterAttributes = attributes(resource)?;
    let stats = attrs.stats;

    let participants = related(resource, "participants")?
        .iter()
        .map(|p| build_participant(p, included, lookup))
        .collect::<Result<Vec<_>>>()?;

    Ok(Roster {
        id: resource.id.clone(),
        region: region(&attrs.shard_id)?,
        aces: stats.aces_earned,
        gold: stats.gold,
        hero_kills: stats.hero_kills,
        krakens_captured: stats.kraken_captures,
        side: stats.side,
        turret_kills: stats.turret_kills,
        turrets_remaining: stats.turrets_remaining,
        won: attrs.won.as_str() == Some("true"),
        participants,
    })
}

/// Builds one match record against an already indexed `included`, as found
/// in each row of a `/matches` listing.
pub fn build_match(record: &Resource, included: &Included, lookup: &Lookup) -> Result<Match> {
    let attrs: MatchAttributes = attributes(record)?;

    let created_at = DateTime::parse_from_rfc3339(&attrs.created_at)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::integrity(format!("match '{}' createdAt: {e}", record.id)))?;

    let rosters = related(record, "rosters")?
        .iter()
        .map(|r| build_roster(r, included, lookup))
        .collect::<Result<Vec<_>>>()?;

    let spectators = record
        .related("spectators")
        .unwrap_or_default()
        .iter()
        .map(|p| build_participant(p, included, lookup))
        .collect::<Result<Vec<_>>>()?;

    let asset = related(record, "assets")?
        .first()
        .ok_or_else(|| Error::integrity(format!("match '{}' has no assets", record.id)))?;
    let telemetry: AssetAttributes = attributes(included.resolve(&asset.id)?)?;

    Ok(Match {
        id: record.id.clone(),
        created_at,
        duration: attrs.duration,
        game_mode: game_mode(&attrs.game_mode)?,
        patch: attrs.patch_version,
        region: region(&attrs.shard_id)?,
        end_reason: attrs.stats.end_game_reason,
        rosters,
        spectators,
        telemetry_url: telemetry.url,
    })
}

/// Builds the match of a `{data, included}` envelope, as returned for a
/// single match.
pub fn match_from_document(doc: &Document<Resource>, lookup: &Lookup) -> Result<Match> {
    let included = Included::new(&doc.included)?;
    build_match(&doc.data, &included, lookup)
}

/// Builds every match of a listing, in response order.
pub fn matches_from_document(doc: &Document<Vec<Resource>>, lookup: &Lookup) -> Result<Vec<Match>> {
    let included = Included::new(&doc.included)?;
    doc.data
        .iter()
        .map(|record| build_match(record, &included, lookup))
        .collect()
}
