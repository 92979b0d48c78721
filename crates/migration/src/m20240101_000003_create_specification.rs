//! Create `specification` table with FK to `motorcycle`.
//!
//! The UNIQUE constraint on `motorcycle_id` is the authoritative guard for
//! the one-to-one relationship; request handlers only pre-check for a
//! friendlier error.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Specification::Table)
                    .if_not_exists()
                    .col(pk_auto(Specification::Id))
                    .col(string_len(Specification::EngineType, 30).not_null())
                    .col(string_len(Specification::CoolingType, 20).not_null())
                    .col(integer(Specification::Transmission).not_null())
                    .col(double(Specification::TankCapacityLiters).not_null())
                    .col(integer(Specification::MotorcycleId).unique_key().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_specification_motorcycle")
                            .from(Specification::Table, Specification::MotorcycleId)
                            .to(Motorcycle::Table, Motorcycle::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Specification::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Specification { Table, Id, EngineType, CoolingType, Transmission, TankCapacityLiters, MotorcycleId }

#[derive(DeriveIden)]
enum Motorcycle { Table, Id }
