use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Entity CRUD against a migrated in-memory database
pub mod crud_tests;


/// Fresh in-memory database with the full schema applied.
pub async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = crate::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
