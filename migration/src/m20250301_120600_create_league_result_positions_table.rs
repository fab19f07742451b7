use entity::{
    league_result_positions::{self, constraints::*},
    league_results, teams,
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
                    .table(league_result_positions::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(league_result_positions::Column::ResultId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(league_result_positions::Column::Position)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(league_result_positions::Column::TeamId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_LEAGUE_RESULT_POSITIONS)
                            .col(league_result_positions::Column::ResultId)
                            .col(league_result_positions::Column::Position),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LEAGUE_RESULT_POSITIONS_RESULT_ID)
                            .from(
                                league_result_positions::Entity,
                                league_result_positions::Column::ResultId,
                            )
                            .to(league_results::Entity, league_results::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LEAGUE_RESULT_POSITIONS_TEAM_ID)
                            .from(
                                league_result_positions::Entity,
                                league_result_positions::Column::TeamId,
                            )
                            .to(teams::Entity, teams::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // a team can hold at most one slot of a result
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(UC_LEAGUE_RESULT_POSITIONS_TEAM)
                    .table(league_result_positions::Entity)
                    .col(league_result_positions::Column::ResultId)
                    .col(league_result_positions::Column::TeamId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(league_result_positions::Entity)
                    .to_owned(),
            )
            .await
    }
}
