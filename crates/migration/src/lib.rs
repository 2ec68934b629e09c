//! Migrator registering entity-specific migrations in dependency order.
//! `hero_power` references both `hero` and `power`, so it comes last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_hero;
mod m20240101_000002_create_power;
mod m20240101_000003_create_hero_power;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_hero::Migration),
            Box::new(m20240101_000002_create_power::Migration),
            Box::new(m20240101_000003_create_hero_power::Migration),
        ]
    }
}
