use crate::models::{Pokemon, PoolSource};
use std::collections::HashSet;

/// Build the candidate pool for a user from the full species list
///
/// Keeps the order of `all_pokemon` (or of `owned` for `PoolSource::Owned`).
pub fn select_pool(
    source: PoolSource,
    all_pokemon: Vec<Pokemon>,
    owned: Vec<Pokemon>,
) -> Vec<Pokemon> {
    match source {
        PoolSource::Owned => owned,
        PoolSource::All => all_pokemon,
        PoolSource::Unowned => {
            let owned_ids: HashSet<i32> = owned.iter().map(|p| p.pokedex_number).collect();
            all_pokemon
                .into_iter()
                .filter(|p| !owned_ids.contains(&p.pokedex_number))
                .collect()
        }
    }
}

/// Check if a candidate passes the legendary filter
#[inline]
pub fn passes_legendary_filter(pokemon: &Pokemon, include_legendary: bool) -> bool {
    include_legendary || !pokemon.is_legendary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pokemon(pokedex_number: i32, is_legendary: bool) -> Pokemon {
        Pokemon {
            pokedex_number,
            name: format!("Pokemon {}", pokedex_number),
            attack: 50,
            defense: 50,
            hp: 50,
            sp_attack: 50,
            sp_defense: 50,
            speed: 50,
            weight: None,
            generation: 1,
            is_legendary,
        }
    }

    fn ids(pool: &[Pokemon]) -> Vec<i32> {
        pool.iter().map(|p| p.pokedex_number).collect()
    }

    #[test]
    fn test_select_owned_pool() {
        let all = vec![create_pokemon(1, false), create_pokemon(4, false), create_pokemon(7, false)];
        let owned = vec![create_pokemon(7, false), create_pokemon(1, false)];

        let pool = select_pool(PoolSource::Owned, all, owned);
        assert_eq!(ids(&pool), vec![7, 1]);
    }

    #[test]
    fn test_select_unowned_pool_keeps_order() {
        let all = vec![create_pokemon(1, false), create_pokemon(4, false), create_pokemon(7, false)];
        let owned = vec![create_pokemon(4, false)];

        let pool = select_pool(PoolSource::Unowned, all, owned);
        assert_eq!(ids(&pool), vec![1, 7]);
    }

    #[test]
    fn test_select_all_pool() {
        let all = vec![create_pokemon(1, false), create_pokemon(4, false)];

        let pool = select_pool(PoolSource::All, all, vec![create_pokemon(4, false)]);
        assert_eq!(ids(&pool), vec![1, 4]);
    }

    #[test]
    fn test_legendary_filter() {
        let mewtwo = create_pokemon(150, true);
        let bulbasaur = create_pokemon(1, false);

        assert!(passes_legendary_filter(&mewtwo, true));
        assert!(!passes_legendary_filter(&mewtwo, false));
        assert!(passes_legendary_filter(&bulbasaur, false));
    }
}
