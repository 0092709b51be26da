use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pokemon species with its display attributes
///
/// Type tags live in a separate `TypeIndex` so the row can be passed
/// through ranking untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pokemon {
    #[serde(rename = "pokedexNumber")]
    pub pokedex_number: i32,
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub hp: i32,
    #[serde(rename = "spAttack")]
    pub sp_attack: i32,
    #[serde(rename = "spDefense")]
    pub sp_defense: i32,
    pub speed: i32,
    #[serde(default)]
    pub weight: Option<f64>,
    pub generation: i32,
    #[serde(rename = "isLegendary", default)]
    pub is_legendary: bool,
}

/// A login account. The password never leaves the data provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// A trainer, identified by name within a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Trainer {
    pub name: String,
    pub region: String,
    #[serde(rename = "gymName", default)]
    pub gym_name: Option<String>,
    #[serde(rename = "gymType", default)]
    pub gym_type: Option<String>,
}

/// A gym of a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Gym {
    pub name: String,
    #[serde(rename = "type")]
    pub gym_type: String,
    #[serde(rename = "badgeName")]
    pub badge_name: String,
    pub region: String,
}

impl Gym {
    /// Gym type with its first letter upper-cased, for display
    pub fn display_type(&self) -> String {
        let mut chars = self.gym_type.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// A candidate with its net type-advantage score against a roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPokemon {
    #[serde(flatten)]
    pub pokemon: Pokemon,
    pub score: i32,
}

/// Which pokemon make up the candidate pool for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolSource {
    /// Pokemon the user owns
    #[default]
    Owned,
    /// Every pokemon
    All,
    /// Every pokemon the user does not own yet
    Unowned,
}

impl fmt::Display for PoolSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PoolSource::Owned => "owned",
            PoolSource::All => "all",
            PoolSource::Unowned => "unowned",
        };
        f.write_str(name)
    }
}

impl FromStr for PoolSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owned" => Ok(PoolSource::Owned),
            "all" => Ok(PoolSource::All),
            "unowned" => Ok(PoolSource::Unowned),
            other => Err(format!("Pool must be one of: owned, all, unowned (got '{}')", other)),
        }
    }
}
