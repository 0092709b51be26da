use serde::{Deserialize, Serialize};
use crate::models::domain::{Account, Gym, Pokemon, ScoredPokemon, Trainer};

/// Response for the ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResponse {
    pub trainer: Trainer,
    pub pool: String,
    pub rankings: Vec<ScoredPokemon>,
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub account: Account,
}

/// Trainers and gyms of a region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionResponse {
    pub region: String,
    pub trainers: Vec<String>,
    pub gyms: Vec<GymSummary>,
}

/// Gym as listed on a region page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub gym_type: String,
    #[serde(rename = "badgeName")]
    pub badge_name: String,
}

impl From<Gym> for GymSummary {
    fn from(gym: Gym) -> Self {
        Self {
            gym_type: gym.display_type(),
            name: gym.name,
            badge_name: gym.badge_name,
        }
    }
}

/// Trainers of a gym. `single` is set when exactly one trainer runs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymTrainersResponse {
    pub trainers: Vec<String>,
    pub single: Option<String>,
}

/// Trainer with the pokemon they own
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerResponse {
    pub trainer: Trainer,
    pub pokemon: Vec<Pokemon>,
}

/// A user's pokemon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedPokemonResponse {
    pub username: String,
    pub pokemon: Vec<Pokemon>,
}

/// Result of an ownership add/remove
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnershipResponse {
    pub success: bool,
    pub changed: bool,
}
