use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Bug,
    Dark,
    Dragon,
    Electric,
    Fairy,
    Fighting,
    Fire,
    Flying,
    Ghost,
    Grass,
    Ground,
    Ice,
    Normal,
    Poison,
    Psychic,
    Rock,
    Steel,
    Water,
}

impl PokemonType {
    pub const ALL: [PokemonType; 18] = [
        PokemonType::Bug,
        PokemonType::Dark,
        PokemonType::Dragon,
        PokemonType::Electric,
        PokemonType::Fairy,
        PokemonType::Fighting,
        PokemonType::Fire,
        PokemonType::Flying,
        PokemonType::Ghost,
        PokemonType::Grass,
        PokemonType::Ground,
        PokemonType::Ice,
        PokemonType::Normal,
        PokemonType::Poison,
        PokemonType::Psychic,
        PokemonType::Rock,
        PokemonType::Steel,
        PokemonType::Water,
    ];

    /// Lowercase name as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            PokemonType::Bug => "bug",
            PokemonType::Dark => "dark",
            PokemonType::Dragon => "dragon",
            PokemonType::Electric => "electric",
            PokemonType::Fairy => "fairy",
            PokemonType::Fighting => "fighting",
            PokemonType::Fire => "fire",
            PokemonType::Flying => "flying",
            PokemonType::Ghost => "ghost",
            PokemonType::Grass => "grass",
            PokemonType::Ground => "ground",
            PokemonType::Ice => "ice",
            PokemonType::Normal => "normal",
            PokemonType::Poison => "poison",
            PokemonType::Psychic => "psychic",
            PokemonType::Rock => "rock",
            PokemonType::Steel => "steel",
            PokemonType::Water => "water",
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a type name is not one of the 18 known types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pokemon type: {0}")]
pub struct UnknownTypeName(pub String);

impl FromStr for PokemonType {
    type Err = UnknownTypeName;

    /// Parse a type name (case-insensitive, surrounding whitespace ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        PokemonType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == name)
            .ok_or_else(|| UnknownTypeName(s.to_string()))
    }
}

/// Materialized type lookup: pokedex number -> ordered type tags
///
/// Built once per request by the data provider so that ranking never
/// queries per pairing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeIndex {
    types: HashMap<i32, Vec<PokemonType>>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a type to a pokemon's tag list, keeping slot order
    pub fn insert(&mut self, pokedex_number: i32, pokemon_type: PokemonType) {
        let tags = self.types.entry(pokedex_number).or_default();
        if !tags.contains(&pokemon_type) {
            tags.push(pokemon_type);
        }
    }

    /// Types of a pokemon; empty when nothing is recorded
    pub fn types_of(&self, pokedex_number: i32) -> &[PokemonType] {
        self.types
            .get(&pokedex_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<(i32, PokemonType)> for TypeIndex {
    fn from_iter<I: IntoIterator<Item = (i32, PokemonType)>>(iter: I) -> Self {
        let mut index = TypeIndex::new();
        for (pokedex_number, pokemon_type) in iter {
            index.insert(pokedex_number, pokemon_type);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_names() {
        assert_eq!("fire".parse::<PokemonType>(), Ok(PokemonType::Fire));
        assert_eq!(" Water ".parse::<PokemonType>(), Ok(PokemonType::Water));
        assert_eq!("PSYCHIC".parse::<PokemonType>(), Ok(PokemonType::Psychic));
        assert!("sound".parse::<PokemonType>().is_err());
    }

    #[test]
    fn test_display_round_trips_every_type() {
        for t in PokemonType::ALL {
            assert_eq!(t.to_string().parse::<PokemonType>(), Ok(t));
        }
    }

    #[test]
    fn test_type_index_keeps_slot_order() {
        let index: TypeIndex = vec![
            (6, PokemonType::Fire),
            (6, PokemonType::Flying),
            (6, PokemonType::Fire),
        ]
        .into_iter()
        .collect();

        assert_eq!(index.types_of(6), &[PokemonType::Fire, PokemonType::Flying]);
        assert!(index.types_of(151).is_empty());
        assert_eq!(index.len(), 1);
    }
}
