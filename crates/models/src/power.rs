use sea_orm::{entity::prelude::*, Set};
use chrono::Utc;

use crate::errors::ModelError;
use crate::{hero, hero_power};

pub const MIN_DESCRIPTION_CHARS: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "power")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    HeroPower,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::HeroPower => Entity::has_many(hero_power::Entity).into(),
        }
    }
}

impl Related<hero_power::Entity> for Entity {
    fn to() -> RelationDef { Relation::HeroPower.def() }
}

impl Related<hero::Entity> for Entity {
    fn to() -> RelationDef { hero_power::Relation::Hero.def() }
    fn via() -> Option<RelationDef> { Some(hero_power::Relation::Power.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() { return Err(ModelError::Validation("name required".into())); }
    Ok(())
}

/// Length is counted in characters, not bytes.
pub fn validate_description(description: &str) -> Result<(), ModelError> {
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(ModelError::Validation("Description must be at least 20 characters long".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, description: &str) -> Result<Model, ModelError> {
    validate_name(name)?;
    validate_description(description)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Validate and store a new description, refreshing `updated_at`.
pub async fn set_description<C: ConnectionTrait>(db: &C, found: Model, description: &str) -> Result<Model, ModelError> {
    validate_description(description)?;
    let mut am: ActiveModel = found.into();
    am.description = Set(description.to_string());
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}
