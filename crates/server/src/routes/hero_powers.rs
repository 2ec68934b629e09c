use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use service::db::hero_power_service::NewHeroPower;
use service::errors::ServiceError;
use tracing::warn;

use crate::errors::ApiError;
use crate::state::ServerState;
use crate::views::HeroDetailView;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateHeroPowerInput {
    #[serde(default)]
    pub hero_id: Option<i32>,
    #[serde(default)]
    pub power_id: Option<i32>,
    /// One of `Strong`, `Weak`, `Average`.
    #[serde(default)]
    pub strength: Option<String>,
}

impl From<CreateHeroPowerInput> for NewHeroPower {
    fn from(i: CreateHeroPowerInput) -> Self {
        NewHeroPower { hero_id: i.hero_id, power_id: i.power_id, strength: i.strength }
    }
}

/// Referenced rows that do not exist are input errors here, hence 400.
#[utoipa::path(
    post, path = "/hero_powers", tag = "hero_powers",
    request_body = CreateHeroPowerInput,
    responses(
        (status = 200, description = "The hero with its powers", body = HeroDetailView),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    input: Result<Json<CreateHeroPowerInput>, JsonRejection>,
) -> Result<Json<HeroDetailView>, ApiError> {
    let Json(input) = input.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    match state.roster.create_hero_power(input.into()).await {
        Ok(detail) => Ok(Json(detail.into())),
        Err(e @ ServiceError::NotFound(_)) => {
            warn!(error = %e, "hero power references missing row");
            Err(ApiError::BadRequest(e.message().to_string()))
        }
        Err(e) if e.is_validation() => {
            warn!(error = %e, "hero power rejected");
            Err(ApiError::BadRequest(e.message().to_string()))
        }
        Err(e) => Err(ApiError::internal(e)),
    }
}
