use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait};
use tracing::debug;
use models::power;
use crate::errors::ServiceError;

/// List all powers ordered by id.
pub async fn list_powers(db: &DatabaseConnection) -> Result<Vec<power::Model>, ServiceError> {
    Ok(power::Entity::find().order_by_asc(power::Column::Id).all(db).await?)
}

/// Get power by id.
pub async fn get_power(db: &DatabaseConnection, id: i32) -> Result<Option<power::Model>, ServiceError> {
    Ok(power::Entity::find_by_id(id).one(db).await?)
}

/// Create a power inside a transaction.
pub async fn create_power(db: &DatabaseConnection, name: &str, description: &str) -> Result<power::Model, ServiceError> {
    let txn = db.begin().await?;
    let created = power::create(&txn, name, description).await?;
    txn.commit().await?;
    Ok(created)
}

/// Replace a power's description.
///
/// `None` leaves the power untouched and returns it as stored. An invalid
/// description aborts the transaction, so the stored value never changes.
pub async fn update_power_description(
    db: &DatabaseConnection,
    id: i32,
    description: Option<&str>,
) -> Result<power::Model, ServiceError> {
    let txn = db.begin().await?;
    let found = power::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Power"))?;
    let Some(description) = description else {
        debug!(id, "no description supplied; power unchanged");
        return Ok(found);
    };
    let updated = power::set_description(&txn, found, description).await?;
    txn.commit().await?;
    Ok(updated)
}
