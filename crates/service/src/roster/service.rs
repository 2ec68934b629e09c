use std::sync::Arc;
use tracing::{info, instrument};

use crate::db::hero_power_service::NewHeroPower;
use crate::db::hero_service::HeroDetail;
use crate::errors::ServiceError;
use crate::roster::repository::RosterRepository;

/// Application service over a [`RosterRepository`].
/// Owned by the server state for the lifetime of the process.
pub struct RosterService<R: RosterRepository> {
    repo: Arc<R>,
}

impl<R: RosterRepository> RosterService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_heroes(&self) -> Result<Vec<models::hero::Model>, ServiceError> {
        self.repo.list_heroes().await
    }

    pub async fn get_hero_detail(&self, id: i32) -> Result<Option<HeroDetail>, ServiceError> {
        self.repo.get_hero_detail(id).await
    }

    #[instrument(skip(self))]
    pub async fn create_hero(&self, name: &str, super_name: &str) -> Result<models::hero::Model, ServiceError> {
        let hero = self.repo.create_hero(name, super_name).await?;
        info!(id = hero.id, "created hero");
        Ok(hero)
    }

    pub async fn list_powers(&self) -> Result<Vec<models::power::Model>, ServiceError> {
        self.repo.list_powers().await
    }

    pub async fn get_power(&self, id: i32) -> Result<Option<models::power::Model>, ServiceError> {
        self.repo.get_power(id).await
    }

    #[instrument(skip(self, description))]
    pub async fn create_power(&self, name: &str, description: &str) -> Result<models::power::Model, ServiceError> {
        let power = self.repo.create_power(name, description).await?;
        info!(id = power.id, "created power");
        Ok(power)
    }

    #[instrument(skip(self, description))]
    pub async fn update_power_description(&self, id: i32, description: Option<&str>) -> Result<models::power::Model, ServiceError> {
        let power = self.repo.update_power_description(id, description).await?;
        info!(id = power.id, "power description updated");
        Ok(power)
    }

    #[instrument(skip(self, input), fields(hero_id = ?input.hero_id, power_id = ?input.power_id))]
    pub async fn create_hero_power(&self, input: NewHeroPower) -> Result<HeroDetail, ServiceError> {
        let detail = self.repo.create_hero_power(input).await?;
        info!(hero_id = detail.hero.id, powers = detail.powers.len(), "hero power created");
        Ok(detail)
    }
}
