/// Database layer for Taskdesk
///
/// # Modules
///
/// - `pool`: PostgreSQL pool lifecycle (create, health check, close)
/// - `migrations`: Embedded schema migrations
///
/// Models live in the crate-level `models` module.
///
/// # Example
///
/// ```no_run
/// use taskdesk_shared::db::pool::{close_pool, create_pool, DatabaseConfig};
/// use taskdesk_shared::db::migrations::run_migrations;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     run_migrations(&pool).await?;
///     close_pool(pool).await;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
