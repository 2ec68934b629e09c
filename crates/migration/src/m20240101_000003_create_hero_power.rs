//! Create `hero_power` join table with FKs to `hero` and `power`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HeroPower::Table)
                    .if_not_exists()
                    .col(pk_auto(HeroPower::Id))
                    .col(string_len(HeroPower::Strength, 10).not_null())
                    .col(integer(HeroPower::HeroId).not_null())
                    .col(integer(HeroPower::PowerId).not_null())
                    .col(timestamp_with_time_zone(HeroPower::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(HeroPower::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_power_hero")
                            .from(HeroPower::Table, HeroPower::HeroId)
                            .to(Hero::Table, Hero::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hero_power_power")
                            .from(HeroPower::Table, HeroPower::PowerId)
                            .to(Power::Table, Power::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_hero_power_hero_id")
                    .table(HeroPower::Table)
                    .col(HeroPower::HeroId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(HeroPower::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum HeroPower { Table, Id, Strength, HeroId, PowerId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Hero { Table, Id }

#[derive(DeriveIden)]
enum Power { Table, Id }
