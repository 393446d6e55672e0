#![cfg(test)]
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Private, migrated SQLite database per test. Keep the `TempDir` alive
/// for as long as the connection is used.
pub async fn setup_test_db() -> Result<(TempDir, DatabaseConnection), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let cfg = configs::DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", dir.path().join("service.db").display()),
        max_connections: 4,
        min_connections: 1,
        ..configs::DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok((dir, db))
}
