use entity::leagues::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(leagues::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(leagues::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(leagues::Column::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(leagues::Column::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(leagues::Column::NumRankedPositions)
                            .small_integer()
                            .not_null()
                            .default(6),
                    )
                    .col(
                        ColumnDef::new(leagues::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_LEAGUES).col(leagues::Column::Id))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(leagues::Entity).to_owned())
            .await
    }
}
