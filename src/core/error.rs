use super::types::PokemonType;
use thiserror::Error;

/// Errors raised by the ranking engine
///
/// Empty rosters and empty pools are valid inputs and never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// A pokemon carries a type the effectiveness matrix knows nothing about
    #[error("data integrity error: pokemon #{pokedex_number} has type '{pokemon_type}' missing from the effectiveness matrix")]
    MissingType {
        pokedex_number: i32,
        pokemon_type: PokemonType,
    },
}
