use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{any, get},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        player::{
            NumericInput, PaginatedPlayersDto, PlayerDto, PlayerPayloadDto, PlayerStatsDto,
            PositionCountsDto,
        },
    },
    server::{
        controller::player::{self, player_action},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Player Roster API", description = "Action-addressed player record service"),
    paths(player::player_action),
    components(schemas(
        PlayerDto,
        PlayerPayloadDto,
        NumericInput,
        PaginatedPlayersDto,
        PlayerStatsDto,
        PositionCountsDto,
        ErrorDto,
        MessageDto
    )),
    tags((name = "player", description = "Player records and roster statistics"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", any(player_action))
        .route("/api/openapi.json", get(openapi))
}

/// Allows any origin to call the API with the methods the actions use.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
