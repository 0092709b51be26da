// Core algorithm exports
pub mod chart;
pub mod error;
pub mod filters;
pub mod ranker;
pub mod scoring;
pub mod types;

pub use chart::{Effectiveness, EffectivenessMatrix};
pub use error::RankError;
pub use filters::{passes_legendary_filter, select_pool};
pub use ranker::{rank, rank_scored, Ranker, RankingResult};
pub use scoring::{score_candidate, score_delta};
pub use types::{PokemonType, TypeIndex, UnknownTypeName};
