use entity::{
    leagues,
    teams::{self, constraints::*},
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
                    .table(teams::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(teams::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(teams::Column::LeagueId).uuid().not_null())
                    .col(
                        ColumnDef::new(teams::Column::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_TEAMS).col(teams::Column::Id))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAMS_LEAGUE_ID)
                            .from(teams::Entity, teams::Column::LeagueId)
                            .to(leagues::Entity, leagues::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(teams::Entity).to_owned())
            .await
    }
}
