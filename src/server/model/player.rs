//! Domain models for player records.
//!
//! Defines the `Player` domain model, the closed `Position` set, and `PlayerParams`, the
//! validated form of a create/update payload.

use chrono::{DateTime, Utc};

use crate::{
    model::player::{NumericInput, PaginatedPlayersDto, PlayerDto, PlayerPayloadDto},
    server::error::{internal::InternalError, validation::PlayerValidationError},
};

/// Highest accepted points-per-game value, inclusive.
pub const MAX_PPG: f64 = 50.0;
/// Highest accepted career length in years, inclusive.
pub const MAX_YEARS: i64 = 25;

/// Court position of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    /// Two-letter token used on the wire and in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }

    /// Parses an exact, case-sensitive position token.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// A stored player record.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub team: String,
    pub position: Position,
    pub ppg: f64,
    pub years: i32,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Player)` - The converted domain model
    /// - `Err(InternalError::UnknownPosition)` - The stored position token is not one of
    ///   the five known positions
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, InternalError> {
        let position =
            Position::parse(&entity.position).ok_or_else(|| InternalError::UnknownPosition {
                player_id: entity.id,
                value: entity.position.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            team: entity.team,
            position,
            ppg: entity.ppg,
            years: entity.years,
            image_url: entity.image_url,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            name: self.name,
            team: self.team,
            position: self.position.as_str().to_string(),
            ppg: self.ppg,
            years: self.years,
            image_url: self.image_url,
            created_at: self.created_at,
        }
    }
}

/// Validated values for creating a player or replacing all mutable fields of one.
///
/// Text fields are already trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerParams {
    pub name: String,
    pub team: String,
    pub position: Position,
    pub ppg: f64,
    pub years: i32,
    pub image_url: String,
}

impl PlayerParams {
    /// Validates a request payload and converts it into player params.
    ///
    /// Rules are checked in this order and the first failure is returned:
    /// 1. `name` non-empty after trimming
    /// 2. `team` non-empty after trimming
    /// 3. `position` one of `PG`, `SG`, `SF`, `PF`, `C`
    /// 4. `ppg` a number within `0..=50`
    /// 5. `years` an integer within `0..=25`
    ///
    /// Missing or unparseable numbers fail their rule. `image_url` defaults to empty.
    ///
    /// # Returns
    /// - `Ok(PlayerParams)` - Payload passed every rule
    /// - `Err(PlayerValidationError)` - The first rule the payload violated
    pub fn from_dto(dto: PlayerPayloadDto) -> Result<Self, PlayerValidationError> {
        let name = trimmed(dto.name).ok_or(PlayerValidationError::MissingName)?;
        let team = trimmed(dto.team).ok_or(PlayerValidationError::MissingTeam)?;

        let position = dto
            .position
            .as_deref()
            .and_then(Position::parse)
            .ok_or(PlayerValidationError::InvalidPosition)?;

        let ppg = dto
            .ppg
            .as_ref()
            .and_then(parse_ppg)
            .filter(|ppg| (0.0..=MAX_PPG).contains(ppg))
            .ok_or(PlayerValidationError::PpgOutOfRange)?;

        let years = dto
            .years
            .as_ref()
            .and_then(parse_years)
            .filter(|years| (0..=MAX_YEARS).contains(years))
            .ok_or(PlayerValidationError::YearsOutOfRange)?;

        Ok(Self {
            name,
            team,
            position,
            ppg,
            years: years as i32,
            image_url: dto
                .image_url
                .map(|url| url.trim().to_string())
                .unwrap_or_default(),
        })
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_ppg(input: &NumericInput) -> Option<f64> {
    let value = match input {
        NumericInput::Number(n) => *n,
        NumericInput::Text(s) => s.trim().parse::<f64>().ok()?,
    };

    value.is_finite().then_some(value)
}

fn parse_years(input: &NumericInput) -> Option<i64> {
    match input {
        NumericInput::Number(n) if n.is_finite() && n.fract() == 0.0 => Some(*n as i64),
        NumericInput::Number(_) => None,
        NumericInput::Text(s) => s.trim().parse::<i64>().ok(),
    }
}

/// One page of a filtered, sorted player listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedPlayers {
    pub players: Vec<Player>,
    /// Rows matching the filters across all pages.
    pub total: u64,
    /// 1-indexed page actually returned, after clamping.
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl PaginatedPlayers {
    pub fn into_dto(self) -> PaginatedPlayersDto {
        PaginatedPlayersDto {
            players: self.players.into_iter().map(Player::into_dto).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}
