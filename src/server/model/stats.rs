//! Aggregate statistics over the whole roster.

use crate::{
    model::player::{PlayerStatsDto, PositionCountsDto},
    server::model::player::{Player, Position},
};

/// Number of players per position; positions without players count zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionCounts {
    pub point_guard: u64,
    pub shooting_guard: u64,
    pub small_forward: u64,
    pub power_forward: u64,
    pub center: u64,
}

impl PositionCounts {
    pub fn get(&self, position: Position) -> u64 {
        match position {
            Position::PointGuard => self.point_guard,
            Position::ShootingGuard => self.shooting_guard,
            Position::SmallForward => self.small_forward,
            Position::PowerForward => self.power_forward,
            Position::Center => self.center,
        }
    }

    pub fn add(&mut self, position: Position, count: u64) {
        let slot = match position {
            Position::PointGuard => &mut self.point_guard,
            Position::ShootingGuard => &mut self.shooting_guard,
            Position::SmallForward => &mut self.small_forward,
            Position::PowerForward => &mut self.power_forward,
            Position::Center => &mut self.center,
        };
        *slot += count;
    }

    pub fn into_dto(self) -> PositionCountsDto {
        PositionCountsDto {
            pg: self.point_guard,
            sg: self.shooting_guard,
            sf: self.small_forward,
            pf: self.power_forward,
            c: self.center,
        }
    }
}

/// Roster-wide aggregates computed at request time.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub total_players: u64,
    /// Mean points per game rounded to 2 decimals, 0 for an empty roster.
    pub avg_ppg: f64,
    /// Mean career length rounded to 1 decimal, 0 for an empty roster.
    pub avg_years: f64,
    pub top_scorer: Option<Player>,
    pub position_counts: PositionCounts,
}

impl PlayerStats {
    pub fn into_dto(self) -> PlayerStatsDto {
        PlayerStatsDto {
            total_players: self.total_players,
            avg_ppg: self.avg_ppg,
            avg_years: self.avg_years,
            top_scorer: self.top_scorer.map(Player::into_dto),
            position_counts: self.position_counts.into_dto(),
        }
    }
}

/// Averages `sum` over `count` and rounds to `decimals` places; an empty set averages 0.
pub fn rounded_mean(sum: f64, count: u64, decimals: i32) -> f64 {
    if count == 0 {
        return 0.0;
    }

    let factor = 10f64.powi(decimals);
    (sum / count as f64 * factor).round() / factor
}
