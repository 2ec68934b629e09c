use sea_orm::{entity::prelude::*, Set};
use chrono::Utc;

use crate::errors::ModelError;
use crate::{hero_power, power};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hero")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub super_name: String,
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

impl Related<power::Entity> for Entity {
    fn to() -> RelationDef { hero_power::Relation::Power.def() }
    fn via() -> Option<RelationDef> { Some(hero_power::Relation::Hero.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() { return Err(ModelError::Validation("name required".into())); }
    Ok(())
}

pub fn validate_super_name(super_name: &str) -> Result<(), ModelError> {
    if super_name.trim().is_empty() { return Err(ModelError::Validation("super_name required".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, super_name: &str) -> Result<Model, ModelError> {
    validate_name(name)?;
    validate_super_name(super_name)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(name.to_string()),
        super_name: Set(super_name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
