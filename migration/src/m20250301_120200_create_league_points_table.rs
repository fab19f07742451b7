use entity::{
    league_points::{self, constraints::*},
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
                    .table(league_points::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(league_points::Column::LeagueId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(league_points::Column::Position)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(league_points::Column::Points)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_LEAGUE_POINTS)
                            .col(league_points::Column::LeagueId)
                            .col(league_points::Column::Position),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LEAGUE_POINTS_LEAGUE_ID)
                            .from(league_points::Entity, league_points::Column::LeagueId)
                            .to(leagues::Entity, leagues::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(league_points::Entity).to_owned())
            .await
    }
}
