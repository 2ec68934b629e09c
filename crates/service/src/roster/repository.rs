use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::db::{hero_power_service, hero_service, power_service};
use crate::db::hero_power_service::NewHeroPower;
use crate::db::hero_service::HeroDetail;
use crate::errors::ServiceError;

#[async_trait]
pub trait RosterRepository: Send + Sync {
    async fn list_heroes(&self) -> Result<Vec<models::hero::Model>, ServiceError>;
    async fn get_hero_detail(&self, id: i32) -> Result<Option<HeroDetail>, ServiceError>;
    async fn create_hero(&self, name: &str, super_name: &str) -> Result<models::hero::Model, ServiceError>;
    async fn list_powers(&self) -> Result<Vec<models::power::Model>, ServiceError>;
    async fn get_power(&self, id: i32) -> Result<Option<models::power::Model>, ServiceError>;
    async fn create_power(&self, name: &str, description: &str) -> Result<models::power::Model, ServiceError>;
    async fn update_power_description(&self, id: i32, description: Option<&str>) -> Result<models::power::Model, ServiceError>;
    async fn create_hero_power(&self, input: NewHeroPower) -> Result<HeroDetail, ServiceError>;
}

/// SeaORM-backed repository implementation.
///
/// Writes are serialised through `write_gate`. A SQLite transaction that reads
/// before it writes cannot upgrade its lock while another connection holds one,
/// and fails with `database is locked` instead of waiting.
#[derive(Clone)]
pub struct SeaOrmRosterRepository {
    pub db: DatabaseConnection,
    write_gate: Arc<Mutex<()>>,
}

impl SeaOrmRosterRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, write_gate: Arc::new(Mutex::new(())) }
    }
}

#[async_trait]
impl RosterRepository for SeaOrmRosterRepository {
    async fn list_heroes(&self) -> Result<Vec<models::hero::Model>, ServiceError> {
        hero_service::list_heroes(&self.db).await
    }

    async fn get_hero_detail(&self, id: i32) -> Result<Option<HeroDetail>, ServiceError> {
        hero_service::get_hero_detail(&self.db, id).await
    }

    async fn create_hero(&self, name: &str, super_name: &str) -> Result<models::hero::Model, ServiceError> {
        let _write = self.write_gate.lock().await;
        hero_service::create_hero(&self.db, name, super_name).await
    }

    async fn list_powers(&self) -> Result<Vec<models::power::Model>, ServiceError> {
        power_service::list_powers(&self.db).await
    }

    async fn get_power(&self, id: i32) -> Result<Option<models::power::Model>, ServiceError> {
        power_service::get_power(&self.db, id).await
    }

    async fn create_power(&self, name: &str, description: &str) -> Result<models::power::Model, ServiceError> {
        let _write = self.write_gate.lock().await;
        power_service::create_power(&self.db, name, description).await
    }

    async fn update_power_description(&self, id: i32, description: Option<&str>) -> Result<models::power::Model, ServiceError> {
        let _write = self.write_gate.lock().await;
        power_service::update_power_description(&self.db, id, description).await
    }

    async fn create_hero_power(&self, input: NewHeroPower) -> Result<HeroDetail, ServiceError> {
        let _write = self.write_gate.lock().await;
        hero_power_service::create_hero_power(&self.db, input).await
    }
}
