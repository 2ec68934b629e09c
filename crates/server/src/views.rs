//! JSON shapes returned by the API, built explicitly from entity models.

use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;
use utoipa::ToSchema;

use models::hero_power::Strength;
use models::{hero, hero_power, power};
use service::db::hero_service::HeroDetail;

#[derive(Debug, Serialize, ToSchema)]
pub struct HeroView {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeWithTimeZone,
}

impl From<hero::Model> for HeroView {
    fn from(m: hero::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            super_name: m.super_name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// A power as seen through one hero: the power's fields plus the id and
/// strength of the association.
#[derive(Debug, Serialize, ToSchema)]
pub struct HeroPowerView {
    /// Power id.
    pub id: i32,
    pub name: String,
    pub description: String,
    pub hero_power_id: i32,
    #[schema(value_type = String, example = "Strong")]
    pub strength: Strength,
}

impl From<(hero_power::Model, power::Model)> for HeroPowerView {
    fn from((link, p): (hero_power::Model, power::Model)) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            hero_power_id: link.id,
            strength: link.strength,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HeroDetailView {
    pub id: i32,
    pub name: String,
    pub super_name: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeWithTimeZone,
    pub powers: Vec<HeroPowerView>,
}

impl From<HeroDetail> for HeroDetailView {
    fn from(d: HeroDetail) -> Self {
        let h = d.hero;
        Self {
            id: h.id,
            name: h.name,
            super_name: h.super_name,
            created_at: h.created_at,
            updated_at: h.updated_at,
            powers: d.powers.into_iter().map(HeroPowerView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PowerView {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTimeWithTimeZone,
}

impl From<power::Model> for PowerView {
    fn from(m: power::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn ts() -> DateTimeWithTimeZone {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap().into()
    }

    fn hero() -> hero::Model {
        hero::Model { id: 1, name: "Kamala Khan".into(), super_name: "Ms. Marvel".into(), created_at: ts(), updated_at: ts() }
    }

    #[test]
    fn hero_view_has_exact_keys() {
        let v = serde_json::to_value(HeroView::from(hero())).unwrap();
        let keys: Vec<&str> = v.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 5);
        for k in ["id", "name", "super_name", "created_at", "updated_at"] {
            assert!(keys.contains(&k), "missing {k}");
        }
        assert!(v["created_at"].as_str().unwrap().starts_with("2024-01-02T03:04:05"));
    }

    #[test]
    fn detail_nests_powers_with_strength() {
        let p = power::Model { id: 2, name: "Flight".into(), description: "Gives the wielder the ability to fly".into(), created_at: ts(), updated_at: ts() };
        let link = hero_power::Model { id: 9, strength: Strength::Average, hero_id: 1, power_id: 2, created_at: ts(), updated_at: ts() };
        let v = serde_json::to_value(HeroDetailView::from(HeroDetail { hero: hero(), powers: vec![(link, p)] })).unwrap();
        assert_eq!(v["super_name"], "Ms. Marvel");
        assert_eq!(
            v["powers"],
            json!([{"id": 2, "name": "Flight", "description": "Gives the wielder the ability to fly", "hero_power_id": 9, "strength": "Average"}])
        );
    }
}
