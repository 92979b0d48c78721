//! Secondary indexes for lookup columns.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_brand_name")
                    .table(Brand::Table)
                    .col(Brand::Name)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_motorcycle_model")
                    .table(Motorcycle::Table)
                    .col(Motorcycle::Model)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_motorcycle_brand_id")
                    .table(Motorcycle::Table)
                    .col(Motorcycle::BrandId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_motorcycle_brand_id").table(Motorcycle::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_motorcycle_model").table(Motorcycle::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_brand_name").table(Brand::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Brand { Table, Name }

#[derive(DeriveIden)]
enum Motorcycle { Table, Model, BrandId }
