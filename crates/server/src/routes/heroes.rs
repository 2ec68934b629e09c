use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;
use crate::views::{HeroDetailView, HeroView};

const NOT_FOUND: &str = "Hero not found";

#[utoipa::path(
    get, path = "/heroes", tag = "heroes",
    responses((status = 200, description = "All heroes, without powers", body = [HeroView]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<HeroView>>, ApiError> {
    let heroes = state.roster.list_heroes().await.map_err(ApiError::internal)?;
    info!(count = heroes.len(), "list heroes");
    Ok(Json(heroes.into_iter().map(HeroView::from).collect()))
}

/// A non-numeric id cannot name a hero, so it is reported as not found.
#[utoipa::path(
    get, path = "/heroes/{id}", tag = "heroes",
    params(("id" = i32, Path, description = "Hero id")),
    responses(
        (status = 200, description = "The hero object plus a nested `powers` array (an extension of the flat hero returned by `GET /heroes`)", body = HeroDetailView),
        (status = 404, description = "Hero not found", body = crate::openapi::NotFoundBody)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<HeroDetailView>, ApiError> {
    let Ok(Path(id)) = id else { return Err(ApiError::NotFound(NOT_FOUND.into())) };
    match state.roster.get_hero_detail(id).await {
        Ok(Some(detail)) => Ok(Json(detail.into())),
        Ok(None) => Err(ApiError::NotFound(NOT_FOUND.into())),
        Err(e) => Err(ApiError::internal(e)),
    }
}
