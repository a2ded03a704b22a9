//! Serde shapes of the JSON:API envelope as the API sends it.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, Deserialize)]
pub struct Document<D> {
    pub data: D,
    #[serde(default)]
    pub included: Vec<Resource>,
    #[serde(default)]
    pub links: Links,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub this: Option<String>,
    pub next: Option<String>,
    pub prev: Option<String>,
    pub first: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(t) => std::slice::from_ref(t),
            OneOrMany::Many(v) => v,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Reference {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<OneOrMany<Reference>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub attributes: Option<Value>,
    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,
}

impl Resource {
    /// References under `relationships.<name>.data`, `None` when the
    /// relationship is missing altogether.
    pub fn related(&self, name: &str) -> Option<&[Reference]> {
        let rel = self.relationships.get(name)?;
        Some(rel.data.as_ref().map_or(&[][..], OneOrMany::as_slice))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusAttributes {
    pub released_at: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchAttributes {
    pub created_at: String,
    pub duration: u32,
    pub game_mode: String,
    pub patch_version: String,
    pub shard_id: String,
    pub stats: MatchStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub end_game_reason: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterAttributes {
    pub shard_id: String,
    pub stats: RosterStats,
    #[serde(default)]
    pub won: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    pub aces_earned: u32,
    pub gold: u32,
    pub hero_kills: u32,
    pub kraken_captures: u32,
    pub side: String,
    pub turret_kills: u32,
    pub turrets_remaining: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantAttributes {
    pub actor: String,
    pub shard_id: String,
    pub stats: ParticipantStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStats {
    pub assists: u32,
    pub crystal_mine_captures: u32,
    pub deaths: u32,
    pub farm: f64,
    pub first_afk_time: f64,
    pub gold: f64,
    pub gold_mine_captures: u32,
    #[serde(default)]
    pub item_grants: BTreeMap<String, u32>,
    #[serde(default)]
    pub item_sells: BTreeMap<String, u32>,
    #[serde(default)]
    pub item_uses: BTreeMap<String, u32>,
    #[serde(default)]
    pub items: Vec<String>,
    pub jungle_kills: u32,
    pub kills: u32,
    pub kraken_captures: u32,
    pub minion_kills: u32,
    pub skin_key: String,
    pub turret_captures: u32,
    pub went_afk: bool,
    pub winner: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAttributes {
    pub name: String,
    pub shard_id: String,
    pub stats: PlayerStats,
}

/// Player stats mix snake and camel case keys, and carry games played in
/// either a flat legacy layout or a nested `gamesPlayed` object.
#[derive(Debug, Deserialize)]
pub struct PlayerStats {
    pub elo_earned_season_4: f64,
    pub elo_earned_season_5: f64,
    pub elo_earned_season_6: f64,
    pub elo_earned_season_7: f64,
    pub elo_earned_season_8: f64,
    pub elo_earned_season_9: f64,
    #[serde(rename = "karmaLevel")]
    pub karma_level: i64,
    pub level: u32,
    #[serde(rename = "lifetimeGold")]
    pub lifetime_gold: f64,
    #[serde(rename = "gamesPlayed")]
    pub games_played: Option<GamesPlayedStats>,
    pub played_aral: Option<u32>,
    pub played_blitz: Option<u32>,
    pub played_casual: Option<u32>,
    pub played_ranked: Option<u32>,
    pub played_blitz_rounds: Option<u32>,
    #[serde(rename = "skillTier")]
    pub skill_tier: i32,
    #[serde(rename = "winStreak")]
    pub win_streak: i32,
    pub wins: u32,
    pub xp: u32,
    #[serde(rename = "guildTag")]
    pub guild_tag: Option<String>,
    #[serde(rename = "rankPoints")]
    pub rank_points: Option<RankPoints>,
}

#[derive(Debug, Deserialize)]
pub struct GamesPlayedStats {
    pub aral: u32,
    pub blitz: u32,
    pub casual: u32,
    pub ranked: u32,
    pub blitz_rounds: u32,
}

#[derive(Debug, Deserialize)]
pub struct RankPoints {
    pub blitz: f64,
    pub ranked: f64,
}

#[derive(Debug, Deserialize)]
pub struct AssetAttributes {
    #[serde(rename = "URL")]
    pub url: String,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn relationship_data_may_be_one_many_or_null() {
        let resource: Resource = serde_json::from_value(json!({
            "type": "participant",
            "id": "p1",
            "relationships": {
                "player": {"data": {"type": "player", "id": "pl1"}},
                "rosters": {"data": [{"type": "roster", "id": "r1"}, {"type": "roster", "id": "r2"}]},
                "spectators": {"data": null}
            }
        }))
        .unwrap();

        assert_eq!(resource.related("player").unwrap()[0].id, "pl1");
        assert_eq!(resource.related("rosters").unwrap().len(), 2);
        assert!(resource.related("spectators").unwrap().is_empty());
        assert!(resource.related("assets").is_none());
        assert!(resource.attributes.is_none());
    }

    #[test]
    fn links_default_to_none() {
        let doc: Document<Vec<Resource>> = serde_json::from_value(json!({"data": []})).unwrap();
        assert_eq!(doc.links, Links::default());
        assert!(doc.included.is_empty());
    }
}
