use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Request to add a pokemon to an account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddOwnershipRequest {
    #[validate(range(min = 1))]
    #[serde(alias = "pokedex_number", rename = "pokedexNumber")]
    pub pokedex_number: i32,
}

/// Query string for trainer prefix search
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrainerSearchQuery {
    #[validate(length(min = 1, max = 64))]
    pub prefix: String,
}

/// Query string for the ranking endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankingQuery {
    #[validate(length(min = 1))]
    pub username: String,
    /// owned | all | unowned
    #[serde(default)]
    pub pool: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
    #[serde(default = "default_include_legendary")]
    #[serde(alias = "include_legendary", rename = "includeLegendary")]
    pub include_legendary: bool,
}

fn default_include_legendary() -> bool {
    true
}
