use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    pub team: String,
    /// One of `PG`, `SG`, `SF`, `PF`, `C`.
    pub position: String,
    pub ppg: f64,
    pub years: i32,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or replacing a player.
///
/// Every field is optional on the wire so that a missing field surfaces as the matching
/// validation message instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerPayloadDto {
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub ppg: Option<NumericInput>,
    pub years: Option<NumericInput>,
    pub image_url: Option<String>,
}

/// A number as sent by an HTML form: either a JSON number or its string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedPlayersDto {
    pub players: Vec<PlayerDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PositionCountsDto {
    #[serde(rename = "PG")]
    pub pg: u64,
    #[serde(rename = "SG")]
    pub sg: u64,
    #[serde(rename = "SF")]
    pub sf: u64,
    #[serde(rename = "PF")]
    pub pf: u64,
    #[serde(rename = "C")]
    pub c: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerStatsDto {
    pub total_players: u64,
    pub avg_ppg: f64,
    pub avg_years: f64,
    /// Player with the highest points per game, `null` when the roster is empty.
    pub top_scorer: Option<PlayerDto>,
    pub position_counts: PositionCountsDto,
}
