
use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use crate::db::connect_with_config;

/// Fresh SQLite file database with the schema applied.
/// The returned `TempDir` must outlive the connection.
pub async fn setup_test_db() -> Result<(TempDir, DatabaseConnection)> {
    let dir = tempfile::tempdir()?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("models.db").display()),
        max_connections: 2,
        min_connections: 1,
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok((dir, db))
}
