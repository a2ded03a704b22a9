//! Static lookup tables for the codes the API uses.
//!
//! Regions and game modes form closed sets: an unknown code coming from a
//! caller is a [`Error::Filter`], an unknown code coming from a response is an
//! [`Error::Integrity`]. Item and skin names are open-ended and translate with
//! a fallback to the raw code, see [`Lookup`].

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, IOError, JSONError, Result};

const REGIONS: [(&str, &str); 5] = [
    ("na", "North America"),
    ("eu", "Europe"),
    ("sa", "South America"),
    ("ea", "East Asia"),
    ("sg", "Southeast Asia"),
];

const GAME_MODES: [(&str, &str); 9] = [
    ("blitz_pvp_ranked", "Blitz"),
    ("blitz_rounds_pvp_casual", "Onslaught"),
    ("ranked", "Ranked"),
    ("casual", "Casual"),
    ("private_party_blitz_match", "Private Blitz"),
    ("casual_aral", "Battle Royale"),
    ("private", "Private"),
    ("private_party_draft_match", "Private Draft"),
    ("private_party_aral_match", "Private Battle Royale"),
];

/// A region shard, e.g. `na` / "North America".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Region {
    pub code: &'static str,
    pub label: &'static str,
}

impl Region {
    pub fn from_code(code: &str) -> Option<Self> {
        REGIONS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(code, label)| Self { code, label })
    }

    /// Validates a caller supplied region code.
    pub fn parse(code: &str) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| {
            Error::filter(format!(
                "'{code}' is not an accepted region code, check the docs for accepted regions."
            ))
        })
    }

    pub fn all() -> impl Iterator<Item = Region> {
        REGIONS.iter().map(|&(code, label)| Self { code, label })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GameMode {
    pub code: &'static str,
    pub label: &'static str,
}

impl GameMode {
    pub fn from_code(code: &str) -> Option<Self> {
        GAME_MODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(code, label)| Self { code, label })
    }

    /// Case-insensitive match, used when validating filters.
    pub fn parse(code: &str) -> Result<Self> {
        GAME_MODES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|&(code, label)| Self { code, label })
            .ok_or_else(|| {
                Error::filter(format!(
                    "'{code}' is not an accepted gamemode, check the docs for accepted gamemodes."
                ))
            })
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Item code and skin key display names.
///
/// Never fails a lookup: codes missing from the table come back verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lookup {
    items: HashMap<String, String>,
    skins: HashMap<String, String>,
}

impl Lookup {
    pub fn new(items: HashMap<String, String>, skins: HashMap<String, String>) -> Self {
        Self { items, skins }
    }

    /// A small table covering the common starter items and default skins.
    /// Codes outside it pass through untranslated; see [`Lookup::from_files`]
    /// for the complete tables.
    pub fn builtin() -> Self {
        let items = [
            ("Item_WeaponBlade", "Weapon Blade"),
            ("Item_CrystalBit", "Crystal Bit"),
            ("Item_OakHeart", "Oakheart"),
            ("Item_SwiftShooter", "Swift Shooter"),
            ("Item_HalcyonPotion", "Halcyon Potion"),
            ("Item_TravelBoots", "Travel Boots"),
            ("Item_SorrowbladeItem", "Sorrowblade"),
            ("Item_ShatterglassItem", "Shatterglass"),
            ("Item_Flare", "Flare"),
            ("Item_ScoutTrap", "Scout Trap"),
        ];
        let skins = [
            ("Ringo_DefaultSkin", "Ringo"),
            ("Adagio_DefaultSkin", "Adagio"),
            ("Catherine_DefaultSkin", "Catherine"),
            ("Glaive_DefaultSkin", "Glaive"),
            ("Koshka_DefaultSkin", "Koshka"),
        ];
        Self {
            items: owned(&items),
            skins: owned(&skins),
        }
    }

    /// Loads both tables from JSON objects mapping code to display name.
    pub fn from_files(items: impl AsRef<Path>, skins: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            items: read_table(items.as_ref())?,
            skins: read_table(skins.as_ref())?,
        })
    }

    /// Item display name. `*` markers around the code are ignored for the
    /// lookup but kept in the fallback.
    pub fn item(&self, code: &str) -> String {
        self.items
            .get(code.trim_matches('*'))
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    pub fn skin(&self, key: &str) -> String {
        self.skins
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

fn owned(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn read_table(path: &Path) -> Result<HashMap<String, String>> {
    let raw = fs::read_to_string(path).map_err(|e| IOError::new(path, e))?;
    Ok(serde_json::from_str(&raw).map_err(|e| JSONError::new(Some(path.into()), e))?)
}
