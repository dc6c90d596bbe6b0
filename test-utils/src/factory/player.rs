//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .name("Stephen Curry")
///     .team("Warriors")
///     .position("PG")
///     .ppg(24.5)
///     .years(17)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    team: String,
    position: String,
    ppg: f64,
    years: i32,
    image_url: String,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Player {id}"` where id is auto-incremented
    /// - team: `"Team {id}"`
    /// - position: `"PG"`
    /// - ppg: `10.0`
    /// - years: `5`
    /// - image_url: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Player {}", id),
            team: format!("Team {}", id),
            position: "PG".to_string(),
            ppg: 10.0,
            years: 5,
            image_url: String::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    /// Sets the position token. Not validated, so tests can plant corrupt rows.
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn ppg(mut self, ppg: f64) -> Self {
        self.ppg = ppg;
        self
    }

    pub fn years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            name: ActiveValue::Set(self.name),
            team: ActiveValue::Set(self.team),
            position: ActiveValue::Set(self.position),
            ppg: ActiveValue::Set(self.ppg),
            years: ActiveValue::Set(self.years),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}

/// Creates a player with a specific points-per-game value.
pub async fn create_player_with_ppg(
    db: &DatabaseConnection,
    ppg: f64,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).ppg(ppg).build().await
}
