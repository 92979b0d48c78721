//! Create `brand` table.
//!
//! Root entity of the catalog; motorcycles reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Brand::Table)
                    .if_not_exists()
                    .col(pk_auto(Brand::Id))
                    .col(string_len(Brand::Name, 50).not_null())
                    .col(string_len(Brand::CountryOfOrigin, 30).not_null())
                    .col(integer(Brand::FoundingYear).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Brand::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Brand { Table, Id, Name, CountryOfOrigin, FoundingYear }
