use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use models::hero_power::{self, Strength};
use models::{hero, power};
use crate::db::hero_service::{load_detail, HeroDetail};
use crate::errors::ServiceError;

/// Raw association request; every field is optional so that missing input
/// is reported as a validation failure instead of a decode error.
#[derive(Debug, Clone, Default)]
pub struct NewHeroPower {
    pub hero_id: Option<i32>,
    pub power_id: Option<i32>,
    pub strength: Option<String>,
}

/// Link a hero to a power and return the hero with its updated powers.
///
/// Input is checked before the transaction opens; the referenced hero and
/// power are looked up inside it, and any failure drops it uncommitted.
pub async fn create_hero_power(db: &DatabaseConnection, input: NewHeroPower) -> Result<HeroDetail, ServiceError> {
    let (Some(hero_id), Some(power_id)) = (input.hero_id, input.power_id) else {
        return Err(ServiceError::Validation("hero_id and power_id are required".into()));
    };
    let strength = Strength::parse(input.strength.as_deref().unwrap_or_default())?;

    let txn = db.begin().await?;
    let hero = hero::Entity::find_by_id(hero_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Hero"))?;
    let power = power::Entity::find_by_id(power_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Power"))?;
    hero_power::create(&txn, hero.id, power.id, strength).await?;
    let detail = load_detail(&txn, hero).await?;
    txn.commit().await?;
    Ok(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    async fn hero_and_power(db: &DatabaseConnection) -> Result<(hero::Model, power::Model), anyhow::Error> {
        let h = hero::create(db, "Kamala Khan", "Ms. Marvel").await?;
        let p = power::create(db, "Flight", "Gives the wielder the ability to fly").await?;
        Ok((h, p))
    }

    fn input(hero_id: Option<i32>, power_id: Option<i32>, strength: Option<&str>) -> NewHeroPower {
        NewHeroPower { hero_id, power_id, strength: strength.map(str::to_string) }
    }

    async fn link_count(db: &DatabaseConnection) -> Result<usize, anyhow::Error> {
        Ok(hero_power::Entity::find().all(db).await?.len())
    }

    #[tokio::test]
    async fn creates_link_and_returns_hero() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (h, p) = hero_and_power(&db).await?;
        let detail = create_hero_power(&db, input(Some(h.id), Some(p.id), Some("Strong"))).await?;
        assert_eq!(detail.hero.id, h.id);
        assert_eq!(detail.powers.len(), 1);
        assert_eq!(detail.powers[0].0.strength, Strength::Strong);
        assert_eq!(detail.powers[0].1.id, p.id);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_strength_persists_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (h, p) = hero_and_power(&db).await?;
        for bad in [Some("Mighty"), Some("strong"), None] {
            let err = create_hero_power(&db, input(Some(h.id), Some(p.id), bad)).await.unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(link_count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (h, p) = hero_and_power(&db).await?;
        let err = create_hero_power(&db, input(None, Some(p.id), Some("Weak"))).await.unwrap_err();
        assert_eq!(err.message(), "hero_id and power_id are required");
        assert!(create_hero_power(&db, input(Some(h.id), None, Some("Weak"))).await.is_err());
        assert_eq!(link_count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_references_create_no_row() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (h, p) = hero_and_power(&db).await?;
        let err = create_hero_power(&db, input(Some(h.id + 10), Some(p.id), Some("Weak"))).await.unwrap_err();
        assert_eq!(err.message(), "Hero not found");
        let err = create_hero_power(&db, input(Some(h.id), Some(p.id + 10), Some("Weak"))).await.unwrap_err();
        assert_eq!(err.message(), "Power not found");
        assert_eq!(link_count(&db).await?, 0);
        Ok(())
    }
}
