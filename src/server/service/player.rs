use sea_orm::DatabaseConnection;

use crate::server::{
    data::player::PlayerRepository,
    error::AppError,
    model::{
        player::{PaginatedPlayers, Player, PlayerParams},
        query::PlayerListQuery,
    },
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of players for a normalized list query
    ///
    /// The returned page number is the one actually served, which is the last page when
    /// the requested page lies past the end.
    pub async fn list(&self, query: PlayerListQuery) -> Result<PaginatedPlayers, AppError> {
        let repo = PlayerRepository::new(self.db);

        let (players, window) = repo.get_paginated(&query).await?;

        let players = players
            .into_iter()
            .map(Player::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedPlayers {
            players,
            total: window.total,
            page: window.page,
            page_size: window.page_size,
            total_pages: window.total_pages,
        })
    }

    /// Gets a player by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Player>, AppError> {
        let repo = PlayerRepository::new(self.db);

        let player = repo.get_by_id(id).await?;

        Ok(player.map(Player::from_entity).transpose()?)
    }

    /// Creates a player from validated params
    pub async fn create(&self, params: PlayerParams) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        let player = repo.create(params).await?;

        tracing::debug!("Created player {} ({})", player.id, player.name);

        Ok(Player::from_entity(player)?)
    }

    /// Replaces a player's mutable fields
    /// Returns None if the player doesn't exist
    pub async fn update(&self, id: i32, params: PlayerParams) -> Result<Option<Player>, AppError> {
        let repo = PlayerRepository::new(self.db);

        let player = repo.update(id, params).await?;

        Ok(player.map(Player::from_entity).transpose()?)
    }

    /// Deletes a player
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = PlayerRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        if deleted {
            tracing::debug!("Deleted player {}", id);
        }

        Ok(deleted)
    }
}
