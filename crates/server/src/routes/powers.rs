use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde::Deserialize;
use service::errors::ServiceError;
use tracing::{info, warn};

use crate::errors::ApiError;
use crate::state::ServerState;
use crate::views::PowerView;

const NOT_FOUND: &str = "Power not found";

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdatePowerInput {
    /// New description, at least 20 characters. Omit to leave it unchanged.
    #[serde(default)]
    pub description: Option<String>,
}

#[utoipa::path(
    get, path = "/powers", tag = "powers",
    responses((status = 200, description = "All powers", body = [PowerView]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PowerView>>, ApiError> {
    let powers = state.roster.list_powers().await.map_err(ApiError::internal)?;
    info!(count = powers.len(), "list powers");
    Ok(Json(powers.into_iter().map(PowerView::from).collect()))
}

#[utoipa::path(
    get, path = "/powers/{id}", tag = "powers",
    params(("id" = i32, Path, description = "Power id")),
    responses(
        (status = 200, description = "OK", body = PowerView),
        (status = 404, description = "Power not found", body = crate::openapi::NotFoundBody)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<PowerView>, ApiError> {
    let Ok(Path(id)) = id else { return Err(ApiError::NotFound(NOT_FOUND.into())) };
    match state.roster.get_power(id).await {
        Ok(Some(p)) => Ok(Json(p.into())),
        Ok(None) => Err(ApiError::NotFound(NOT_FOUND.into())),
        Err(e) => Err(ApiError::internal(e)),
    }
}

#[utoipa::path(
    patch, path = "/powers/{id}", tag = "powers",
    params(("id" = i32, Path, description = "Power id")),
    request_body = UpdatePowerInput,
    responses(
        (status = 200, description = "Updated", body = PowerView),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorsBody),
        (status = 404, description = "Power not found", body = crate::openapi::NotFoundBody)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    input: Result<Json<UpdatePowerInput>, JsonRejection>,
) -> Result<Json<PowerView>, ApiError> {
    let Ok(Path(id)) = id else { return Err(ApiError::NotFound(NOT_FOUND.into())) };
    let Json(input) = input.map_err(|e| ApiError::Invalid(vec![e.body_text()]))?;
    match state.roster.update_power_description(id, input.description.as_deref()).await {
        Ok(p) => Ok(Json(p.into())),
        Err(ServiceError::NotFound(_)) => Err(ApiError::NotFound(NOT_FOUND.into())),
        Err(e) if e.is_validation() => {
            warn!(id, error = %e, "power update rejected");
            Err(ApiError::Invalid(vec![e.message().to_string()]))
        }
        Err(e) => Err(ApiError::internal(e)),
    }
}
