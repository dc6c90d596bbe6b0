use sea_orm::DatabaseConnection;

use crate::server::{
    data::player::PlayerRepository,
    error::{internal::InternalError, AppError},
    model::{
        player::{Player, Position},
        stats::{rounded_mean, PlayerStats, PositionCounts},
    },
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes roster-wide statistics
    ///
    /// Each figure comes from its own query with no shared transaction, so under
    /// concurrent writes the figures may reflect slightly different moments.
    ///
    /// # Returns
    /// - `Ok(PlayerStats)`: Totals, averages, top scorer and zero-filled position counts
    /// - `Err(AppError)`: Database error or a stored row with an unknown position
    pub async fn compute(&self) -> Result<PlayerStats, AppError> {
        let repo = PlayerRepository::new(self.db);

        let total_players = repo.count().await?;
        let (ppg_sum, years_sum) = repo.sum_ppg_and_years().await?;
        let top_scorer = repo
            .get_top_scorer()
            .await?
            .map(Player::from_entity)
            .transpose()?;

        let mut position_counts = PositionCounts::default();
        for (token, count) in repo.count_by_position().await? {
            let position = Position::parse(&token)
                .ok_or_else(|| InternalError::UnknownPositionGroup(token.clone()))?;
            position_counts.add(position, count.max(0) as u64);
        }

        Ok(PlayerStats {
            total_players,
            avg_ppg: rounded_mean(ppg_sum, total_players, 2),
            avg_years: rounded_mean(years_sum as f64, total_players, 1),
            top_scorer,
            position_counts,
        })
    }
}
