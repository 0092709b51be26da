use super::types::PokemonType;
use std::collections::{HashMap, HashSet};

/// Matchup class of a single attack-type vs defend-type multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effectiveness {
    Immune,
    Resisted,
    Neutral,
    SuperEffective,
}

impl Effectiveness {
    /// Classify a raw multiplier. Anything outside {0, 0.5, 1, 2} is neutral.
    pub fn from_multiplier(multiplier: f64) -> Self {
        const TOLERANCE: f64 = 1e-9;

        if multiplier.abs() < TOLERANCE {
            Effectiveness::Immune
        } else if (multiplier - 0.5).abs() < TOLERANCE {
            Effectiveness::Resisted
        } else if (multiplier - 2.0).abs() < TOLERANCE {
            Effectiveness::SuperEffective
        } else {
            Effectiveness::Neutral
        }
    }
}

/// Attack/defense multiplier table between types
///
/// The key set is every type that appears as attacker or defender in any
/// entry. Pairs between known types with no stored entry are neutral, which
/// lets the table be loaded from rows holding only non-neutral matchups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectivenessMatrix {
    multipliers: HashMap<(PokemonType, PokemonType), f64>,
    known: HashSet<PokemonType>,
}

impl EffectivenessMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the multiplier of `attack` hitting `defend`
    pub fn insert(&mut self, attack: PokemonType, defend: PokemonType, multiplier: f64) {
        self.known.insert(attack);
        self.known.insert(defend);
        self.multipliers.insert((attack, defend), multiplier);
    }

    /// Whether a type belongs to the matrix key set
    #[inline]
    pub fn contains(&self, pokemon_type: PokemonType) -> bool {
        self.known.contains(&pokemon_type)
    }

    /// Multiplier for a pair, or None if either type is outside the key set
    #[inline]
    pub fn multiplier(&self, attack: PokemonType, defend: PokemonType) -> Option<f64> {
        if !self.contains(attack) || !self.contains(defend) {
            return None;
        }
        Some(self.multipliers.get(&(attack, defend)).copied().unwrap_or(1.0))
    }

    pub fn type_count(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// The Gen 6+ type chart
    pub fn standard() -> Self {
        use PokemonType::*;

        // (attacker, super effective against, resisted by, no effect on)
        let rows: [(PokemonType, &[PokemonType], &[PokemonType], &[PokemonType]); 18] = [
            (Normal, &[], &[Rock, Steel], &[Ghost]),
            (Fire, &[Grass, Ice, Bug, Steel], &[Fire, Water, Rock, Dragon], &[]),
            (Water, &[Fire, Ground, Rock], &[Water, Grass, Dragon], &[]),
            (Electric, &[Water, Flying], &[Electric, Grass, Dragon], &[Ground]),
            (Grass, &[Water, Ground, Rock], &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel], &[]),
            (Ice, &[Grass, Ground, Flying, Dragon], &[Fire, Water, Ice, Steel], &[]),
            (Fighting, &[Normal, Ice, Rock, Dark, Steel], &[Poison, Flying, Psychic, Bug, Fairy], &[Ghost]),
            (Poison, &[Grass, Fairy], &[Poison, Ground, Rock, Ghost], &[Steel]),
            (Ground, &[Fire, Electric, Poison, Rock, Steel], &[Grass, Bug], &[Flying]),
            (Flying, &[Grass, Fighting, Bug], &[Electric, Rock, Steel], &[]),
            (Psychic, &[Fighting, Poison], &[Psychic, Steel], &[Dark]),
            (Bug, &[Grass, Psychic, Dark], &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy], &[]),
            (Rock, &[Fire, Ice, Flying, Bug], &[Fighting, Ground, Steel], &[]),
            (Ghost, &[Psychic, Ghost], &[Dark], &[Normal]),
            (Dragon, &[Dragon], &[Steel], &[Fairy]),
            (Dark, &[Psychic, Ghost], &[Fighting, Dark, Fairy], &[]),
            (Steel, &[Ice, Rock, Fairy], &[Fire, Water, Electric, Steel], &[]),
            (Fairy, &[Fighting, Dragon, Dark], &[Fire, Poison, Steel], &[]),
        ];

        let mut matrix = Self::new();
        for attack in PokemonType::ALL {
            for defend in PokemonType::ALL {
                matrix.insert(attack, defend, 1.0);
            }
        }
        for (attack, strong, weak, immune) in rows {
            for &defend in strong {
                matrix.insert(attack, defend, 2.0);
            }
            for &defend in weak {
                matrix.insert(attack, defend, 0.5);
            }
            for &defend in immune {
                matrix.insert(attack, defend, 0.0);
            }
        }
        matrix
    }
}

impl FromIterator<(PokemonType, PokemonType, f64)> for EffectivenessMatrix {
    fn from_iter<I: IntoIterator<Item = (PokemonType, PokemonType, f64)>>(iter: I) -> Self {
        let mut matrix = Self::new();
        for (attack, defend, multiplier) in iter {
            matrix.insert(attack, defend, multiplier);
        }
        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PokemonType::*;

    #[test]
    fn test_classify_multipliers() {
        assert_eq!(Effectiveness::from_multiplier(0.0), Effectiveness::Immune);
        assert_eq!(Effectiveness::from_multiplier(0.5), Effectiveness::Resisted);
        assert_eq!(Effectiveness::from_multiplier(1.0), Effectiveness::Neutral);
        assert_eq!(Effectiveness::from_multiplier(2.0), Effectiveness::SuperEffective);
    }

    #[test]
    fn test_unrecognized_multiplier_is_neutral() {
        assert_eq!(Effectiveness::from_multiplier(4.0), Effectiveness::Neutral);
        assert_eq!(Effectiveness::from_multiplier(0.25), Effectiveness::Neutral);
        assert_eq!(Effectiveness::from_multiplier(-1.0), Effectiveness::Neutral);
        assert_eq!(Effectiveness::from_multiplier(f64::NAN), Effectiveness::Neutral);
    }

    #[test]
    fn test_standard_chart() {
        let chart = EffectivenessMatrix::standard();

        assert_eq!(chart.type_count(), 18);
        assert_eq!(chart.multiplier(Fire, Grass), Some(2.0));
        assert_eq!(chart.multiplier(Fire, Water), Some(0.5));
        assert_eq!(chart.multiplier(Grass, Water), Some(2.0));
        assert_eq!(chart.multiplier(Electric, Water), Some(2.0));
        assert_eq!(chart.multiplier(Electric, Ground), Some(0.0));
        assert_eq!(chart.multiplier(Normal, Fire), Some(1.0));
        // attack and defense are distinct roles
        assert_eq!(chart.multiplier(Water, Fire), Some(2.0));
        assert_eq!(chart.multiplier(Dragon, Fairy), Some(0.0));
        assert_eq!(chart.multiplier(Fairy, Dragon), Some(2.0));
    }

    #[test]
    fn test_sparse_matrix_defaults_to_neutral() {
        let matrix: EffectivenessMatrix = vec![(Fire, Water, 0.5), (Grass, Fire, 0.5)]
            .into_iter()
            .collect();

        assert_eq!(matrix.multiplier(Water, Grass), Some(1.0));
        assert_eq!(matrix.multiplier(Fire, Water), Some(0.5));
    }

    #[test]
    fn test_type_outside_key_set() {
        let matrix: EffectivenessMatrix = vec![(Fire, Water, 0.5)].into_iter().collect();

        assert!(!matrix.contains(Ghost));
        assert_eq!(matrix.multiplier(Ghost, Water), None);
        assert_eq!(matrix.multiplier(Fire, Ghost), None);
    }
}
