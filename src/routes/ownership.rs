use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{AddOwnershipRequest, OwnedPokemonResponse, OwnershipResponse};
use crate::services::PostgresError;
use super::{postgres_error_response, validation_error_response, AppState};

/// Configure ownership routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/accounts/{username}/pokemon", web::get().to(list_owned))
        .route("/accounts/{username}/pokemon", web::post().to(add_owned))
        .route("/accounts/{username}/pokemon/{pokedex_number}", web::delete().to(remove_owned));
}

async fn require_account(state: &AppState, username: &str) -> Result<(), PostgresError> {
    if state.postgres.account_exists(username).await? {
        Ok(())
    } else {
        Err(PostgresError::NotFound(format!("Account {}", username)))
    }
}

/// Pokemon owned by a user
///
/// GET /api/v1/accounts/{username}/pokemon
async fn list_owned(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let username = path.into_inner();

    if let Err(e) = require_account(&state, &username).await {
        return postgres_error_response("Failed to fetch owned pokemon", &e);
    }

    match state.postgres.account_pokemon(&username).await {
        Ok(pokemon) => HttpResponse::Ok().json(OwnedPokemonResponse { username, pokemon }),
        Err(e) => postgres_error_response("Failed to fetch owned pokemon", &e),
    }
}

/// Add a pokemon to a user
///
/// POST /api/v1/accounts/{username}/pokemon
///
/// Request body:
/// ```json
/// { "pokedexNumber": 25 }
/// ```
async fn add_owned(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<AddOwnershipRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    let username = path.into_inner();

    if let Err(e) = require_account(&state, &username).await {
        return postgres_error_response("Failed to add pokemon", &e);
    }

    match state.postgres.add_ownership(&username, req.pokedex_number).await {
        Ok(changed) => {
            tracing::info!("User {} added pokemon #{} (new: {})", username, req.pokedex_number, changed);
            HttpResponse::Ok().json(OwnershipResponse { success: true, changed })
        }
        Err(e) => postgres_error_response("Failed to add pokemon", &e),
    }
}

/// Remove a pokemon from a user
///
/// DELETE /api/v1/accounts/{username}/pokemon/{pokedex_number}
async fn remove_owned(
    state: web::Data<AppState>,
    path: web::Path<(String, i32)>,
) -> impl Responder {
    let (username, pokedex_number) = path.into_inner();

    if let Err(e) = require_account(&state, &username).await {
        return postgres_error_response("Failed to remove pokemon", &e);
    }

    match state.postgres.remove_ownership(&username, pokedex_number).await {
        Ok(changed) => {
            if !changed {
                tracing::warn!("User {} did not own pokemon #{}", username, pokedex_number);
            }
            HttpResponse::Ok().json(OwnershipResponse { success: true, changed })
        }
        Err(e) => postgres_error_response("Failed to remove pokemon", &e),
    }
}
