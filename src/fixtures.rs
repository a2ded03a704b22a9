//! Response bodies shaped like the live API, shared by the tests.

use serde_json::{json, Value};

pub(crate) fn player(id: &str, name: &str) -> Value {
    json!({
        "type": "player",
        "id": id,
        "attributes": {
            "name": name,
            "shardId": "na",
            "stats": {
                "elo_earned_season_4": 1400.0,
                "elo_earned_season_5": 1500.0,
                "elo_earned_season_6": 1600.0,
                "elo_earned_season_7": 1700.0,
                "elo_earned_season_8": 1800.0,
                "elo_earned_season_9": 1900.0,
                "karmaLevel": 2,
                "level": 30,
                "lifetimeGold": 125000.5,
                "gamesPlayed": {
                    "aral": 11,
                    "blitz": 22,
                    "casual": 33,
                    "ranked": 44,
                    "blitz_rounds": 5
                },
                "skillTier": 21,
                "winStreak": 3,
                "wins": 120,
                "xp": 98000,
                "guildTag": "VG",
                "rankPoints": {"blitz": 1200.0, "ranked": 1850.5}
            }
        }
    })
}

pub(crate) fn legacy_player(id: &str, name: &str) -> Value {
    json!({
        "type": "player",
        "id": id,
        "attributes": {
            "name": name,
            "shardId": "eu",
            "stats": {
                "elo_earned_season_4": 0.0,
                "elo_earned_season_5": 0.0,
                "elo_earned_season_6": 1100.0,
                "elo_earned_season_7": 1150.0,
                "elo_earned_season_8": 1200.0,
                "elo_earned_season_9": 1250.0,
                "karmaLevel": 0,
                "level": 12,
                "lifetimeGold": 5000.0,
                "played_aral": 10,
                "played_blitz": 20,
                "played_casual": 30,
                "played_ranked": 40,
                "skillTier": -1,
                "winStreak": 0,
                "wins": 45,
                "xp": 1200
            }
        }
    })
}

/// The trimmed player a match sideloads: no elo, karma or games played.
pub(crate) fn partial_player(id: &str, name: &str) -> Value {
    json!({
        "type": "player",
        "id": id,
        "attributes": {
            "name": name,
            "shardId": "na",
            "stats": {
                "level": 30,
                "lifetimeGold": 125000.5,
                "wins": 120,
                "xp": 98000,
                "skillTier": 21,
                "winStreak": 3
            }
        }
    })
}

fn participant(id: &str, player_id: &str, actor: &str, skin: &str) -> Value {
    json!({
        "type": "participant",
        "id": id,
        "attributes": {
            "actor": actor,
            "shardId": "na",
            "stats": {
                "assists": 4,
                "crystalMineCaptures": 1,
                "deaths": 2,
                "farm": 40.0,
                "firstAfkTime": -1,
                "gold": 9000,
                "goldMineCaptures": 0,
                "itemGrants": {},
                "itemSells": {},
                "itemUses": {},
                "items": [],
                "jungleKills": 12,
                "kills": 3,
                "krakenCaptures": 0,
                "minionKills": 80,
                "skinKey": skin,
                "turretCaptures": 1,
                "wentAfk": false,
                "winner": false
            }
        },
        "relationships": {
            "player": {"data": {"type": "player", "id": player_id}}
        }
    })
}

fn roster(id: &str, won: &str, side: &str, participants: &[String]) -> Value {
    let refs: Vec<Value> = participants
        .iter()
        .map(|p| json!({"type": "participant", "id": p}))
        .collect();
    json!({
        "type": "roster",
        "id": id,
        "attributes": {
            "shardId": "na",
            "stats": {
                "acesEarned": 1,
                "gold": 30000,
                "heroKills": 15,
                "krakenCaptures": 1,
                "side": side,
                "turretKills": 5,
                "turretsRemaining": 2
            },
            "won": won
        },
        "relationships": {
            "participants": {"data": refs}
        }
    })
}

/// One match record and everything it references.
///
/// Roster `-r1` has three participants: two sideloaded players and one
/// `-bot` player that is not in `included`. Roster `-r2` has one participant
/// whose player is sideloaded without attributes. One spectator.
pub(crate) fn match_parts(id: &str) -> (Value, Vec<Value>) {
    let p = |n: &str| format!("{id}-{n}");

    let record = json!({
        "type": "match",
        "id": id,
        "attributes": {
            "createdAt": "2017-03-01T10:00:00Z",
            "duration": 1540,
            "gameMode": "ranked",
            "patchVersion": "2.2",
            "shardId": "na",
            "stats": {"endGameReason": "victory", "queue": "ranked"}
        },
        "relationships": {
            "rosters": {"data": [
                {"type": "roster", "id": p("r1")},
                {"type": "roster", "id": p("r2")}
            ]},
            "spectators": {"data": [{"type": "participant", "id": p("spec")}]},
            "assets": {"data": [{"type": "asset", "id": p("asset")}]}
        }
    });

    let mut star = participant(&p("p1"), &p("pl1"), "*Ringo*", "Ringo_DefaultSkin");
    let stats = &mut star["attributes"]["stats"];
    stats["itemGrants"] = json!({"*Item_WeaponBlade*": 3, "*Item_Unreleased*": 1});
    stats["itemUses"] = json!({"*Item_HalcyonPotion*": 2});
    stats["items"] = json!(["Sorrowblade", "Travel Boots"]);
    stats["kills"] = json!(7);
    stats["farm"] = json!(88.5);
    stats["firstAfkTime"] = json!(1);
    stats["winner"] = json!(true);

    let included = vec![
        roster(&p("r1"), "true", "left/blue", &[p("p1"), p("p2"), p("p3")]),
        roster(&p("r2"), "false", "right/red", &[p("p4")]),
        star,
        participant(&p("p2"), &p("pl2"), "*Adagio*", "Adagio_Skin_Unknown"),
        participant(&p("p3"), &p("bot"), "*Glaive*", "Glaive_DefaultSkin"),
        participant(&p("p4"), &p("pl4"), "*Koshka*", "Koshka_DefaultSkin"),
        participant(&p("spec"), &p("watcher"), "*Spectator*", "none"),
        player(&p("pl1"), "Alpha"),
        player(&p("pl2"), "Beta"),
        json!({"type": "player", "id": p("pl4")}),
        json!({
            "type": "asset",
            "id": p("asset"),
            "attributes": {
                "URL": format!("https://telemetry.example/{id}.json"),
                "contentType": "application/json",
                "name": "telemetry"
            }
        }),
    ];

    (record, included)
}

pub(crate) fn match_document(id: &str) -> Value {
    let (record, included) = match_parts(id);
    json!({"data": record, "included": included})
}

pub(crate) fn match_list(ids: &[&str], links: Value) -> Value {
    let mut data = Vec::new();
    let mut included = Vec::new();
    for id in ids {
        let (record, inc) = match_parts(id);
        data.push(record);
        included.extend(inc);
    }
    json!({"data": data, "included": included, "links": links})
}
