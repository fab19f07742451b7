use entity::{
    leagues,
    predictions::{self, constraints::*},
    profiles, teams,
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
                    .table(predictions::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(predictions::Column::Id).uuid().not_null())
                    .col(ColumnDef::new(predictions::Column::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(predictions::Column::LeagueId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(predictions::Column::TeamId).uuid().not_null())
                    .col(
                        ColumnDef::new(predictions::Column::Points)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(predictions::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(predictions::Column::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_PREDICTIONS)
                            .col(predictions::Column::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PREDICTIONS_USER_ID)
                            .from(predictions::Entity, predictions::Column::UserId)
                            .to(profiles::Entity, profiles::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PREDICTIONS_LEAGUE_ID)
                            .from(predictions::Entity, predictions::Column::LeagueId)
                            .to(leagues::Entity, leagues::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PREDICTIONS_TEAM_ID)
                            .from(predictions::Entity, predictions::Column::TeamId)
                            .to(teams::Entity, teams::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(UC_PREDICTIONS_USER_LEAGUE)
                    .table(predictions::Entity)
                    .col(predictions::Column::UserId)
                    .col(predictions::Column::LeagueId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(predictions::Entity).to_owned())
            .await
    }
}
