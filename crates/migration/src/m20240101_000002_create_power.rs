//! Create `power` table.
//!
//! The description length rule lives in application code; the column only
//! bounds its size.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Power::Table)
                    .if_not_exists()
                    .col(pk_auto(Power::Id))
                    .col(string_len(Power::Name, 100).not_null())
                    .col(string_len(Power::Description, 200).not_null())
                    .col(timestamp_with_time_zone(Power::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Power::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Power::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Power { Table, Id, Name, Description, CreatedAt, UpdatedAt }
