use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{
    GymSummary, GymTrainersResponse, LoginRequest, LoginResponse, RegionResponse, TrainerResponse,
    TrainerSearchQuery,
};
use super::{error_response, postgres_error_response, validation_error_response, AppState};

/// Configure login and browsing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/login", web::post().to(login))
        .route("/regions", web::get().to(list_regions))
        .route("/regions/{region}", web::get().to(region_detail))
        .route("/gyms/{region}/{gym_name}/{gym_type}", web::get().to(gym_trainers))
        .route("/trainers/search", web::get().to(search_trainers))
        .route("/trainers/{region}/{name}", web::get().to(trainer_detail));
}

/// Verify credentials
///
/// POST /api/v1/login
///
/// Session-less: the client keeps the returned username and passes it
/// explicitly to user-scoped endpoints.
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors);
    }

    match state.postgres.authenticate(&req.username, &req.password).await {
        Ok(Some(account)) => {
            tracing::info!("User {} logged in", account.username);
            HttpResponse::Ok().json(LoginResponse { account })
        }
        Ok(None) => {
            tracing::info!("Invalid login attempt for {}", req.username);
            error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid login information",
                "Username or password is incorrect",
            )
        }
        Err(e) => postgres_error_response("Failed to verify login", &e),
    }
}

/// List game regions
///
/// GET /api/v1/regions
async fn list_regions(state: web::Data<AppState>) -> impl Responder {
    match state.postgres.list_regions().await {
        Ok(regions) => HttpResponse::Ok().json(serde_json::json!({ "regions": regions })),
        Err(e) => postgres_error_response("Failed to fetch regions", &e),
    }
}

/// Trainers and gyms of a region
///
/// GET /api/v1/regions/{region}
async fn region_detail(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let region = path.into_inner();

    let trainers = match state.postgres.trainers_in_region(&region).await {
        Ok(trainers) => trainers,
        Err(e) => return postgres_error_response("Failed to fetch trainers", &e),
    };

    let gyms = match state.postgres.gyms_in_region(&region).await {
        Ok(gyms) => gyms,
        Err(e) => return postgres_error_response("Failed to fetch gyms", &e),
    };

    tracing::debug!("Region {}: {} trainers, {} gyms", region, trainers.len(), gyms.len());

    HttpResponse::Ok().json(RegionResponse {
        region,
        trainers,
        gyms: gyms.into_iter().map(GymSummary::from).collect(),
    })
}

/// Trainers running a gym
///
/// GET /api/v1/gyms/{region}/{gym_name}/{gym_type}
///
/// `single` carries the trainer's name when the gym has exactly one, so a
/// client can go straight to that trainer's page.
async fn gym_trainers(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
) -> impl Responder {
    let (region, gym_name, gym_type) = path.into_inner();

    match state.postgres.trainers_at_gym(&region, &gym_name, &gym_type).await {
        Ok(trainers) => {
            tracing::debug!("Gym {} ({}) in {}: {} trainers", gym_name, gym_type, region, trainers.len());
            let single = match trainers.as_slice() {
                [only] => Some(only.clone()),
                _ => None,
            };
            HttpResponse::Ok().json(GymTrainersResponse { trainers, single })
        }
        Err(e) => postgres_error_response("Failed to fetch gym trainers", &e),
    }
}

/// Trainers whose name starts with a prefix
///
/// GET /api/v1/trainers/search?prefix=Br
async fn search_trainers(
    state: web::Data<AppState>,
    query: web::Query<TrainerSearchQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error_response(errors);
    }

    match state.postgres.search_trainers(&query.prefix).await {
        Ok(trainers) => HttpResponse::Ok().json(serde_json::json!({
            "prefix": query.prefix,
            "trainers": trainers,
        })),
        Err(e) => postgres_error_response("Failed to search trainers", &e),
    }
}

/// Trainer with the pokemon they own
///
/// GET /api/v1/trainers/{region}/{name}
async fn trainer_detail(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (region, name) = path.into_inner();

    let trainer = match state.postgres.get_trainer(&region, &name).await {
        Ok(trainer) => trainer,
        Err(e) => return postgres_error_response("Failed to fetch trainer", &e),
    };

    match state.postgres.trainer_roster(&trainer).await {
        Ok(pokemon) => HttpResponse::Ok().json(TrainerResponse { trainer, pokemon }),
        Err(e) => postgres_error_response("Failed to fetch trainer pokemon", &e),
    }
}
