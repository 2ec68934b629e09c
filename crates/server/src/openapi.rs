use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Body of a 404 response.
#[derive(ToSchema)]
pub struct NotFoundBody { pub description: String }

/// Body of a rejected power update.
#[derive(ToSchema)]
pub struct ValidationErrorsBody { pub errors: Vec<String> }

/// Body of a rejected hero power.
#[derive(ToSchema)]
pub struct ErrorBody { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::heroes::list,
        crate::routes::heroes::get,
        crate::routes::powers::list,
        crate::routes::powers::get,
        crate::routes::powers::update,
        crate::routes::hero_powers::create,
    ),
    components(
        schemas(
            HealthResponse,
            NotFoundBody,
            ValidationErrorsBody,
            ErrorBody,
            crate::views::HeroView,
            crate::views::HeroDetailView,
            crate::views::HeroPowerView,
            crate::views::PowerView,
            crate::routes::powers::UpdatePowerInput,
            crate::routes::hero_powers::CreateHeroPowerInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "heroes"),
        (name = "powers"),
        (name = "hero_powers")
    )
)]
pub struct ApiDoc;
