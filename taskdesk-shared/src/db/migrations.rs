/// Embedded schema migrations
///
/// SQL files under `taskdesk-shared/migrations/` are compiled into the
/// binary with `sqlx::migrate!` and applied in version order. Applied
/// versions are tracked in `_sqlx_migrations`, so running them again is a
/// no-op.
///
/// # Example
///
/// ```no_run
/// use taskdesk_shared::db::migrations::run_migrations;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let applied = run_migrations(&pool).await?;
/// println!("{} migrations applied", applied);
/// # Ok(())
/// # }
/// ```

use sqlx::{migrate::MigrateDatabase, postgres::PgPool, Postgres};
use tracing::{debug, info, warn};

/// Applies all pending migrations
///
/// Returns the number of migrations recorded as applied afterwards.
///
/// # Errors
///
/// Returns an error if a migration fails to execute or an already-applied
/// migration was modified.
pub async fn run_migrations(pool: &PgPool) -> Result<i64, sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrator = sqlx::migrate!("./migrations");
    if let Err(e) = migrator.run(pool).await {
        warn!("Migration failed: {}", e);
        return Err(e);
    }

    let applied: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = true")
            .fetch_one(pool)
            .await?;

    info!(applied, "Database migrations completed");
    Ok(applied)
}

/// Creates the database named in `database_url` if it is missing
///
/// Meant for development and test setups; production databases are
/// provisioned ahead of time.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    if Postgres::database_exists(database_url).await? {
        debug!("Database already exists");
    } else {
        info!("Database does not exist, creating it");
        Postgres::create_database(database_url).await?;
    }

    Ok(())
}
