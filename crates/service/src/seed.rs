//! Sample data for a fresh database.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};
use tracing::info;

use models::hero_power::Strength;
use models::{hero, hero_power, power};

use crate::errors::ServiceError;

const HEROES: [(&str, &str); 3] = [
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
];

const POWERS: [(&str, &str); 2] = [
    ("Super Strength", "Gives the wielder super-human strengths"),
    ("Flight", "Gives the wielder the ability to fly through the skies at supersonic speed"),
];

/// (hero index, power index, strength) into `HEROES` / `POWERS`.
const LINKS: [(usize, usize, Strength); 3] = [
    (0, 0, Strength::Strong),
    (0, 1, Strength::Average),
    (1, 0, Strength::Weak),
];

/// Insert the sample roster when the hero table is empty.
/// Returns whether anything was written.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<bool, ServiceError> {
    let existing = hero::Entity::find().count(db).await?;
    if existing > 0 {
        info!(existing, "heroes present; skipping seed");
        return Ok(false);
    }

    let txn = db.begin().await?;
    let mut heroes = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        heroes.push(hero::create(&txn, name, super_name).await?);
    }
    let mut powers = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        powers.push(power::create(&txn, name, description).await?);
    }
    for (h, p, strength) in LINKS {
        hero_power::create(&txn, heroes[h].id, powers[p].id, strength).await?;
    }
    txn.commit().await?;

    info!(heroes = heroes.len(), powers = powers.len(), links = LINKS.len(), "seeded sample data");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::hero_service;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seeds_once() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(seed_sample_data(&db).await?);
        assert!(!seed_sample_data(&db).await?);

        let heroes = hero_service::list_heroes(&db).await?;
        assert_eq!(heroes.len(), 3);
        assert_eq!(hero_power::Entity::find().count(&db).await?, 3);

        let kamala = hero_service::get_hero_detail(&db, heroes[0].id).await?.unwrap();
        assert_eq!(kamala.hero.super_name, "Ms. Marvel");
        let strengths: Vec<Strength> = kamala.powers.iter().map(|(l, _)| l.strength).collect();
        assert_eq!(strengths, vec![Strength::Strong, Strength::Average]);
        Ok(())
    }
}
