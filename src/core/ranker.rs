use crate::core::{
    chart::EffectivenessMatrix,
    error::RankError,
    filters::passes_legendary_filter,
    scoring::score_candidate,
    types::TypeIndex,
};
use crate::models::{Pokemon, ScoredPokemon};
use std::cmp::Reverse;

/// Score every candidate against the roster and sort by score, best first
///
/// The sort is stable: candidates with equal scores keep their input order.
/// An empty roster scores everything 0 and so returns the pool as given.
pub fn rank_scored(
    pool: Vec<Pokemon>,
    roster: &[Pokemon],
    matrix: &EffectivenessMatrix,
    types_of: &TypeIndex,
) -> Result<Vec<ScoredPokemon>, RankError> {
    let mut scored = pool
        .into_iter()
        .map(|pokemon| {
            let score = score_candidate(&pokemon, roster, matrix, types_of)?;
            Ok(ScoredPokemon { pokemon, score })
        })
        .collect::<Result<Vec<_>, RankError>>()?;

    // slice::sort_by_key is stable
    scored.sort_by_key(|s| Reverse(s.score));

    Ok(scored)
}

/// Reorder the candidate pool by type advantage against the roster
///
/// Returns a permutation of `pool`; no pokemon is altered or dropped.
pub fn rank(
    pool: Vec<Pokemon>,
    roster: &[Pokemon],
    matrix: &EffectivenessMatrix,
    types_of: &TypeIndex,
) -> Result<Vec<Pokemon>, RankError> {
    Ok(rank_scored(pool, roster, matrix, types_of)?
        .into_iter()
        .map(|s| s.pokemon)
        .collect())
}

/// Result of the ranking pipeline
#[derive(Debug)]
pub struct RankingResult {
    pub rankings: Vec<ScoredPokemon>,
    pub total_candidates: usize,
}

/// Ranking pipeline: candidate filtering, scoring, ordering and truncation
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    max_limit: usize,
}

impl Ranker {
    pub fn new(max_limit: usize) -> Self {
        Self { max_limit }
    }

    pub fn max_limit(&self) -> usize {
        self.max_limit
    }

    /// Rank a candidate pool against a trainer's team
    ///
    /// # Arguments
    /// * `pool` - Candidates, already selected for the user
    /// * `roster` - The trainer's team (defending side)
    /// * `matrix` - Effectiveness multipliers
    /// * `types_of` - Type tags of every pokemon in `pool` and `roster`
    /// * `include_legendary` - Keep legendary candidates
    /// * `limit` - Maximum number of rankings to return, capped at `max_limit`
    pub fn rank_candidates(
        &self,
        pool: Vec<Pokemon>,
        roster: &[Pokemon],
        matrix: &EffectivenessMatrix,
        types_of: &TypeIndex,
        include_legendary: bool,
        limit: usize,
    ) -> Result<RankingResult, RankError> {
        let total_candidates = pool.len();

        let candidates: Vec<Pokemon> = pool
            .into_iter()
            .filter(|p| passes_legendary_filter(p, include_legendary))
            .collect();

        let mut rankings = rank_scored(candidates, roster, matrix, types_of)?;
        rankings.truncate(limit.min(self.max_limit));

        Ok(RankingResult {
            rankings,
            total_candidates,
        })
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(100)
    }
}
