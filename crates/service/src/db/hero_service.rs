use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};
use models::{hero, hero_power, power};
use crate::errors::ServiceError;

/// A hero together with its powers and the strength of each association.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroDetail {
    pub hero: hero::Model,
    pub powers: Vec<(hero_power::Model, power::Model)>,
}

/// List all heroes ordered by id.
pub async fn list_heroes(db: &DatabaseConnection) -> Result<Vec<hero::Model>, ServiceError> {
    Ok(hero::Entity::find().order_by_asc(hero::Column::Id).all(db).await?)
}

/// Get hero by id.
pub async fn get_hero<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<hero::Model>, ServiceError> {
    Ok(hero::Entity::find_by_id(id).one(db).await?)
}

/// Get hero by id with its associated powers.
pub async fn get_hero_detail(db: &DatabaseConnection, id: i32) -> Result<Option<HeroDetail>, ServiceError> {
    match get_hero(db, id).await? {
        Some(hero) => Ok(Some(load_detail(db, hero).await?)),
        None => Ok(None),
    }
}

/// Attach the hero's associations, oldest first.
pub async fn load_detail<C: ConnectionTrait>(db: &C, hero: hero::Model) -> Result<HeroDetail, ServiceError> {
    let rows = hero_power::Entity::find()
        .filter(hero_power::Column::HeroId.eq(hero.id))
        .order_by_asc(hero_power::Column::Id)
        .find_also_related(power::Entity)
        .all(db)
        .await?;
    let powers = rows
        .into_iter()
        .filter_map(|(link, power)| power.map(|p| (link, p)))
        .collect();
    Ok(HeroDetail { hero, powers })
}

/// Create a hero inside a transaction.
pub async fn create_hero(db: &DatabaseConnection, name: &str, super_name: &str) -> Result<hero::Model, ServiceError> {
    let txn = db.begin().await?;
    let created = hero::create(&txn, name, super_name).await?;
    txn.commit().await?;
    Ok(created)
}
