use entity::{
    league_results::{self, constraints::*},
    leagues,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(league_results::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(league_results::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(league_results::Column::LeagueId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(league_results::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_LEAGUE_RESULTS)
                            .col(league_results::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LEAGUE_RESULTS_LEAGUE_ID)
                            .from(league_results::Entity, league_results::Column::LeagueId)
                            .to(leagues::Entity, leagues::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(UC_LEAGUE_RESULTS_LEAGUE_ID)
                    .table(league_results::Entity)
                    .col(league_results::Column::LeagueId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(league_results::Entity).to_owned())
            .await
    }
}
