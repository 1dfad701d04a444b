use std::time::Duration;

use crate::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the
/// application can access the database.
///
/// The pool is capped at ten connections and a blocked acquisition fails after
/// the acquire timeout instead of waiting indefinitely.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(10)
        .acquire_timeout(Duration::from_secs(60))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
