//! Pokerank - trainer and pokemon database service
//!
//! Exposes accounts, regions, gyms, trainers and pokemon ownership over a
//! JSON API, and ranks a user's pokemon against a trainer's team by type
//! effectiveness.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{rank, rank_scored, EffectivenessMatrix, PokemonType, RankError, Ranker, TypeIndex};
pub use crate::models::{Pokemon, PoolSource, ScoredPokemon};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matrix = EffectivenessMatrix::standard();
        assert_eq!(matrix.multiplier(PokemonType::Water, PokemonType::Fire), Some(2.0));
        assert!(rank(vec![], &[], &matrix, &TypeIndex::new()).unwrap().is_empty());
    }
}
