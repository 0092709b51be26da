use crate::core::chart::{Effectiveness, EffectivenessMatrix};
use crate::core::error::RankError;
use crate::core::types::{PokemonType, TypeIndex};
use crate::models::Pokemon;

/// Score contribution of one attack-type vs defend-type comparison
#[inline]
pub fn score_delta(multiplier: f64) -> i32 {
    match Effectiveness::from_multiplier(multiplier) {
        Effectiveness::SuperEffective => 1,
        Effectiveness::Resisted => -1,
        Effectiveness::Immune | Effectiveness::Neutral => 0,
    }
}

/// Look up a pair, failing if either side is outside the matrix key set
#[inline]
fn lookup(
    matrix: &EffectivenessMatrix,
    attack: PokemonType,
    attacker: i32,
    defend: PokemonType,
    defender: i32,
) -> Result<f64, RankError> {
    if !matrix.contains(attack) {
        return Err(RankError::MissingType {
            pokedex_number: attacker,
            pokemon_type: attack,
        });
    }
    matrix.multiplier(attack, defend).ok_or(RankError::MissingType {
        pokedex_number: defender,
        pokemon_type: defend,
    })
}

/// Net type advantage of a candidate against a roster
///
/// Every (attack type, defend type) pair across every roster member counts
/// on its own: super effective adds one, resisted subtracts one. A dual-type
/// candidate against a dual-type member makes four comparisons. Scores are
/// not normalized by the number of types.
pub fn score_candidate(
    candidate: &Pokemon,
    roster: &[Pokemon],
    matrix: &EffectivenessMatrix,
    types_of: &TypeIndex,
) -> Result<i32, RankError> {
    let attack_types = types_of.types_of(candidate.pokedex_number);
    let mut score = 0;

    for member in roster {
        let defend_types = types_of.types_of(member.pokedex_number);
        for &attack in attack_types {
            for &defend in defend_types {
                let multiplier = lookup(
                    matrix,
                    attack,
                    candidate.pokedex_number,
                    defend,
                    member.pokedex_number,
                )?;
                score += score_delta(multiplier);
            }
        }
    }

    Ok(score)
}
