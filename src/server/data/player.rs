use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryOrder, QuerySelect,
};

use crate::server::model::{
    player::PlayerParams,
    query::{PageWindow, PlayerListQuery},
};

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new player and returns the stored row with its assigned id
    pub async fn create(&self, params: PlayerParams) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            name: ActiveValue::Set(params.name),
            team: ActiveValue::Set(params.team),
            position: ActiveValue::Set(params.position.as_str().to_string()),
            ppg: ActiveValue::Set(params.ppg),
            years: ActiveValue::Set(params.years),
            image_url: ActiveValue::Set(params.image_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a player by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Player found
    /// - `Ok(None)`: No player with this id
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(id).one(self.db).await
    }

    /// Gets one page of players matching the query's filters
    ///
    /// Counts the filtered rows first, clamps the requested page to the last available
    /// one, then fetches that page with the query's ordering.
    ///
    /// # Arguments
    /// - `query`: Normalized list query (filters, ordering, requested page and size)
    ///
    /// # Returns
    /// - `Ok((players, window))`: Rows of the resolved page and the page window
    /// - `Err(DbErr)`: Database error
    pub async fn get_paginated(
        &self,
        query: &PlayerListQuery,
    ) -> Result<(Vec<entity::player::Model>, PageWindow), DbErr> {
        let paginator = query.select().paginate(self.db, query.page_size);

        let total = paginator.num_items().await?;
        let window = PageWindow::resolve(query.page, query.page_size, total);

        // Paginator pages are 0-indexed
        let players = paginator.fetch_page(window.page - 1).await?;

        Ok((players, window))
    }

    /// Replaces every mutable field of a player
    ///
    /// Existence is checked with a lookup before writing, so an update that leaves every
    /// value unchanged still returns the row.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated player
    /// - `Ok(None)`: No player with this id
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        params: PlayerParams,
    ) -> Result<Option<entity::player::Model>, DbErr> {
        let Some(player) = entity::prelude::Player::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::player::ActiveModel = player.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.team = ActiveValue::Set(params.team);
        active_model.position = ActiveValue::Set(params.position.as_str().to_string());
        active_model.ppg = ActiveValue::Set(params.ppg);
        active_model.years = ActiveValue::Set(params.years);
        active_model.image_url = ActiveValue::Set(params.image_url);

        let updated = active_model.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a player
    ///
    /// # Returns
    /// - `Ok(true)`: Player deleted
    /// - `Ok(false)`: No player with this id
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts all players
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Player::find().count(self.db).await
    }

    /// Sums points per game and career years across all players
    ///
    /// # Returns
    /// - `Ok((ppg_sum, years_sum))`: Both sums, 0 for an empty table
    /// - `Err(DbErr)`: Database error
    pub async fn sum_ppg_and_years(&self) -> Result<(f64, i64), DbErr> {
        let sums = entity::prelude::Player::find()
            .select_only()
            .column_as(entity::player::Column::Ppg.sum(), "ppg_sum")
            .column_as(entity::player::Column::Years.sum(), "years_sum")
            .into_tuple::<(Option<f64>, Option<i64>)>()
            .one(self.db)
            .await?;

        let (ppg_sum, years_sum) = sums.unwrap_or((None, None));

        Ok((ppg_sum.unwrap_or(0.0), years_sum.unwrap_or(0)))
    }

    /// Gets the player with the highest points per game, lowest id winning ties
    pub async fn get_top_scorer(&self) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .order_by_desc(entity::player::Column::Ppg)
            .order_by_asc(entity::player::Column::Id)
            .one(self.db)
            .await
    }

    /// Counts players grouped by stored position token
    ///
    /// Positions without players are absent from the result.
    pub async fn count_by_position(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::Player::find()
            .select_only()
            .column(entity::player::Column::Position)
            .column_as(entity::player::Column::Id.count(), "player_count")
            .group_by(entity::player::Column::Position)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }
}
