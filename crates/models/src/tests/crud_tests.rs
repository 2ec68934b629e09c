use anyhow::Result;
use sea_orm::{EntityTrait, ModelTrait, QueryOrder};

use super::setup_test_db;
use crate::errors::ModelError;
use crate::hero_power::Strength;
use crate::{hero, hero_power, power};

#[tokio::test]
async fn test_hero_create_and_read() -> Result<()> {
    let db = setup_test_db().await?;

    let created = hero::create(&db, "Kamala Khan", "Ms. Marvel").await?;
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let found = hero::Entity::find_by_id(created.id).one(&db).await?.expect("hero stored");
    assert_eq!(found.name, "Kamala Khan");
    assert_eq!(found.super_name, "Ms. Marvel");

    let second = hero::create(&db, "Doreen Green", "Squirrel Girl").await?;
    assert!(second.id > created.id);
    let all = hero::Entity::find().order_by_asc(hero::Column::Id).all(&db).await?;
    assert_eq!(all.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_hero_blank_name_not_persisted() -> Result<()> {
    let db = setup_test_db().await?;
    let res = hero::create(&db, "", "Nobody").await;
    assert!(matches!(res, Err(ModelError::Validation(_))));
    assert!(hero::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_power_create_validates_description() -> Result<()> {
    let db = setup_test_db().await?;

    let res = power::create(&db, "Flight", "flies").await;
    assert!(matches!(res, Err(ModelError::Validation(_))));
    assert!(power::Entity::find().all(&db).await?.is_empty());

    let p = power::create(&db, "Flight", "Gives the wielder the ability to fly").await?;
    assert_eq!(p.description, "Gives the wielder the ability to fly");
    Ok(())
}

#[tokio::test]
async fn test_power_set_description_refreshes_updated_at() -> Result<()> {
    let db = setup_test_db().await?;
    let p = power::create(&db, "Flight", "Gives the wielder the ability to fly").await?;

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    let updated = power::set_description(&db, p.clone(), "Flight power description long enough").await?;
    assert_eq!(updated.description, "Flight power description long enough");
    assert_eq!(updated.created_at, p.created_at);
    assert!(updated.updated_at > p.updated_at, "updated_at must move forward");

    let stored = power::Entity::find_by_id(p.id).one(&db).await?.expect("power stored");
    assert_eq!(stored.updated_at, updated.updated_at);

    let res = power::set_description(&db, updated.clone(), "short").await;
    assert!(res.is_err());
    let stored = power::Entity::find_by_id(p.id).one(&db).await?.expect("power stored");
    assert_eq!(stored.description, "Flight power description long enough");
    assert_eq!(stored.updated_at, updated.updated_at);
    Ok(())
}

#[tokio::test]
async fn test_hero_power_links_both_sides() -> Result<()> {
    let db = setup_test_db().await?;
    let h = hero::create(&db, "Gwen Stacy", "Spider-Gwen").await?;
    let strength = power::create(&db, "Super Strength", "Gives the wielder super-human strengths").await?;
    let flight = power::create(&db, "Flight", "Gives the wielder the ability to fly").await?;

    hero_power::create(&db, h.id, strength.id, Strength::Strong).await?;
    hero_power::create(&db, h.id, flight.id, Strength::Average).await?;

    let powers = h.find_related(power::Entity).all(&db).await?;
    assert_eq!(powers.len(), 2);

    let links = h.find_related(hero_power::Entity).all(&db).await?;
    let mut strengths: Vec<_> = links.iter().map(|l| l.strength).collect();
    strengths.sort_by_key(|s| s.as_str());
    assert_eq!(strengths, vec![Strength::Average, Strength::Strong]);

    let heroes = flight.find_related(hero::Entity).all(&db).await?;
    assert_eq!(heroes.len(), 1);
    assert_eq!(heroes[0].id, h.id);
    Ok(())
}
