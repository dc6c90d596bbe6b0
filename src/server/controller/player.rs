use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        player::{PaginatedPlayersDto, PlayerDto, PlayerPayloadDto, PlayerStatsDto},
    },
    server::{
        error::AppError,
        model::{
            player::PlayerParams,
            query::{PlayerListParams, PlayerListQuery},
        },
        service::{player::PlayerService, stats::StatsService},
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Query string of the action endpoint.
///
/// List parameters sit next to `action` and `id` in the same query string.
#[derive(Debug, Default, Deserialize)]
pub struct ActionParams {
    pub action: Option<String>,
    pub id: Option<String>,
    #[serde(flatten)]
    pub list: PlayerListParams,
}

/// Operations addressable through the `action` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Get,
    Create,
    Update,
    Delete,
    Stats,
}

impl Action {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "list" => Some(Action::List),
            "get" => Some(Action::Get),
            "create" => Some(Action::Create),
            "update" => Some(Action::Update),
            "delete" => Some(Action::Delete),
            "stats" => Some(Action::Stats),
            _ => None,
        }
    }

    /// HTTP method a mutating action must arrive with; reads accept any method.
    pub fn required_method(self) -> Option<Method> {
        match self {
            Action::Create => Some(Method::POST),
            Action::Update => Some(Method::PUT),
            Action::Delete => Some(Method::DELETE),
            Action::List | Action::Get | Action::Stats => None,
        }
    }
}

/// Single action-addressed endpoint for the player roster.
///
/// Dispatches on the `action` query parameter. Checks run in a fixed order: action,
/// method, id, body parsing, validation, then the operation itself. A bare `OPTIONS`
/// request is answered with an empty 200.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `method` - HTTP method of the request
/// - `query` - Action, id and list parameters from the query string
/// - `body` - Raw request body, parsed as a player payload for `create` and `update`
///
/// # Returns
/// - `200 OK` - `list` page, `get`/`update` record, `stats` aggregate or `delete` confirmation
/// - `201 Created` - `create` record
/// - `400 Bad Request` - Malformed query string, unknown action, missing id, malformed JSON or failed validation
/// - `404 Not Found` - No player with the given id
/// - `405 Method Not Allowed` - Mutating action sent with the wrong method
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    method(get, post, put, delete),
    path = "/api",
    tag = PLAYER_TAG,
    params(
        ("action" = String, Query, description = "One of list, get, create, update, delete, stats"),
        ("id" = Option<i32>, Query, description = "Player ID for get, update and delete"),
        ("search" = Option<String>, Query, description = "Substring matched against name and team"),
        ("position" = Option<String>, Query, description = "Position filter, ignored unless PG, SG, SF, PF or C"),
        ("sort_by" = Option<String>, Query, description = "name, team, position, ppg or years"),
        ("sort_dir" = Option<String>, Query, description = "ASC or DESC"),
        ("page" = Option<u64>, Query, description = "1-indexed page, clamped to the last page"),
        ("page_size" = Option<u64>, Query, description = "5, 10, 20 or 50")
    ),
    request_body(content = PlayerPayloadDto, description = "Player fields for create and update"),
    responses(
        (status = 200, description = "Player record; list returns PaginatedPlayersDto, stats returns PlayerStatsDto, delete returns MessageDto", body = PlayerDto),
        (status = 201, description = "Created player", body = PlayerDto),
        (status = 400, description = "Unknown action, missing id, malformed body or invalid field", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 405, description = "Wrong method for a mutating action", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn player_action(
    State(state): State<AppState>,
    method: Method,
    query: Result<Query<ActionParams>, QueryRejection>,
    body: Bytes,
) -> Result<Response, AppError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let Query(params) = query.map_err(|err| {
        tracing::debug!("Rejected query string: {}", err);
        AppError::BadRequest("Invalid query string".to_string())
    })?;

    let action = params
        .action
        .as_deref()
        .and_then(Action::parse)
        .ok_or_else(|| AppError::BadRequest("Unknown action".to_string()))?;

    if let Some(required) = action.required_method() {
        if method != required {
            return Err(AppError::MethodNotAllowed);
        }
    }

    let service = PlayerService::new(&state.db);

    match action {
        Action::List => {
            let query = PlayerListQuery::from_params(params.list);
            let page: PaginatedPlayersDto = service.list(query).await?.into_dto();

            Ok(Json(page).into_response())
        }
        Action::Get => {
            let id = require_id(params.id.as_deref())?;
            let player = service.get_by_id(id).await?.ok_or_else(player_not_found)?;

            Ok(Json(player.into_dto()).into_response())
        }
        Action::Create => {
            let payload = parse_payload(&body)?;
            let params = PlayerParams::from_dto(payload)?;

            let player = service.create(params).await?;

            Ok((StatusCode::CREATED, Json(player.into_dto())).into_response())
        }
        Action::Update => {
            let id = require_id(params.id.as_deref())?;
            let payload = parse_payload(&body)?;
            let params = PlayerParams::from_dto(payload)?;

            let player = service
                .update(id, params)
                .await?
                .ok_or_else(player_not_found)?;

            Ok(Json(player.into_dto()).into_response())
        }
        Action::Delete => {
            let id = require_id(params.id.as_deref())?;

            if !service.delete(id).await? {
                return Err(player_not_found());
            }

            Ok(Json(MessageDto {
                message: "Player deleted successfully".to_string(),
            })
            .into_response())
        }
        Action::Stats => {
            let stats: PlayerStatsDto = StatsService::new(&state.db).compute().await?.into_dto();

            Ok(Json(stats).into_response())
        }
    }
}

/// Parses the `id` query parameter as a positive integer.
fn require_id(raw: Option<&str>) -> Result<i32, AppError> {
    raw.and_then(|id| id.trim().parse::<i32>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::BadRequest("ID required".to_string()))
}

/// Parses a player payload; an empty body counts as an empty payload.
fn parse_payload(body: &[u8]) -> Result<PlayerPayloadDto, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PlayerPayloadDto::default());
    }

    serde_json::from_slice(body).map_err(|_| AppError::BadRequest("Invalid JSON body".to_string()))
}

fn player_not_found() -> AppError {
    AppError::NotFound("Player not found".to_string())
}
