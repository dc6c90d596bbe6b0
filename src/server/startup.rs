use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::AppError, seed};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready");

    Ok(db)
}

/// Seeds the default roster when the database holds no players yet.
pub async fn seed_default_players(db: &DatabaseConnection) -> Result<(), AppError> {
    let inserted = seed::seed_default_players(db).await?;

    if inserted == 0 {
        tracing::debug!("Player table already populated, skipping seed");
    }

    Ok(())
}
