use std::fmt;

use sea_orm::{entity::prelude::*, sea_query::StringLen, Set};
use serde::Serialize;
use chrono::Utc;

use crate::errors::ModelError;
use crate::{hero, power};

/// How strongly a hero exhibits a power. Stored and serialised as its string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum Strength {
    #[sea_orm(string_value = "Strong")]
    Strong,
    #[sea_orm(string_value = "Weak")]
    Weak,
    #[sea_orm(string_value = "Average")]
    Average,
}

impl Strength {
    /// Exact, case-sensitive match against the allowed values.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        match s {
            "Strong" => Ok(Strength::Strong),
            "Weak" => Ok(Strength::Weak),
            "Average" => Ok(Strength::Average),
            _ => Err(ModelError::Validation("Strength must be one of: 'Strong', 'Weak', 'Average'".into())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Average => "Average",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hero_power")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub strength: Strength,
    pub hero_id: i32,
    pub power_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Hero,
    Power,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Hero => Entity::belongs_to(hero::Entity).from(Column::HeroId).to(hero::Column::Id).into(),
            Relation::Power => Entity::belongs_to(power::Entity).from(Column::PowerId).to(power::Column::Id).into(),
        }
    }
}

impl Related<hero::Entity> for Entity {
    fn to() -> RelationDef { Relation::Hero.def() }
}

impl Related<power::Entity> for Entity {
    fn to() -> RelationDef { Relation::Power.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert an association. Callers are expected to have checked that both
/// ends exist; the schema FKs reject dangling ids regardless.
pub async fn create<C: ConnectionTrait>(db: &C, hero_id: i32, power_id: i32, strength: Strength) -> Result<Model, ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        strength: Set(strength),
        hero_id: Set(hero_id),
        power_id: Set(power_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn parses_allowed_values() {
        for s in Strength::iter() {
            assert_eq!(Strength::parse(s.as_str()).unwrap(), s);
        }
    }

    #[test]
    fn serialises_as_stored_string() {
        for s in Strength::iter() {
            assert_eq!(serde_json::to_value(s).unwrap(), serde_json::json!(s.as_str()));
        }
    }

    #[test]
    fn rejects_other_values() {
        for bad in ["strong", "STRONG", "Mighty", "", " Weak"] {
            let err = Strength::parse(bad).unwrap_err();
            assert!(matches!(err, ModelError::Validation(_)), "{bad:?} should be rejected");
        }
    }
}
