// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Account, Gym, Pokemon, PoolSource, ScoredPokemon, Trainer};
pub use requests::{AddOwnershipRequest, LoginRequest, RankingQuery, TrainerSearchQuery};
pub use responses::{
    ErrorResponse, GymSummary, GymTrainersResponse, HealthResponse, LoginResponse,
    OwnedPokemonResponse, OwnershipResponse, RankingResponse, RegionResponse, TrainerResponse,
};
