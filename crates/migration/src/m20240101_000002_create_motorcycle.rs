//! Create `motorcycle` table with FK to `brand`.
//!
//! No ON DELETE CASCADE: the delete path removes dependents explicitly.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Motorcycle::Table)
                    .if_not_exists()
                    .col(pk_auto(Motorcycle::Id))
                    .col(string_len(Motorcycle::Model, 50).not_null())
                    .col(integer(Motorcycle::DisplacementCc).not_null())
                    .col(integer(Motorcycle::PowerHp).not_null())
                    .col(double(Motorcycle::Price).not_null())
                    .col(integer(Motorcycle::Year).not_null())
                    .col(integer(Motorcycle::BrandId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_motorcycle_brand")
                            .from(Motorcycle::Table, Motorcycle::BrandId)
                            .to(Brand::Table, Brand::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Motorcycle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Motorcycle { Table, Id, Model, DisplacementCc, PowerHp, Price, Year, BrandId }

#[derive(DeriveIden)]
enum Brand { Table, Id }
