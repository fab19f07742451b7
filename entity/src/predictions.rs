use super::{leagues, profiles, teams};
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const PK_PREDICTIONS: &str = "PK_predictions";
    pub const UC_PREDICTIONS_USER_LEAGUE: &str = "UC_predictions_user_league";
    pub const FK_PREDICTIONS_USER_ID: &str = "FK_predictions_user_id";
    pub const FK_PREDICTIONS_LEAGUE_ID: &str = "FK_predictions_league_id";
    pub const FK_PREDICTIONS_TEAM_ID: &str = "FK_predictions_team_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "predictions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub league_id: Uuid,
    pub team_id: Uuid,
    /// Only ever written by the recalculation code.
    pub points: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Profile,
    League,
    Team,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Profile => Entity::belongs_to(profiles::Entity)
                .from(Column::UserId)
                .to(profiles::Column::Id)
                .into(),
            Self::League => Entity::belongs_to(leagues::Entity)
                .from(Column::LeagueId)
                .to(leagues::Column::Id)
                .into(),
            Self::Team => Entity::belongs_to(teams::Entity)
                .from(Column::TeamId)
                .to(teams::Column::Id)
                .into(),
        }
    }
}

impl Related<profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<leagues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl Related<teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_in_league(league_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::LeagueId.eq(league_id))
    }

    #[inline]
    pub fn find_by_user_and_league(user_id: Uuid, league_id: Uuid) -> Select<Entity> {
        Self::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::LeagueId.eq(league_id))
    }
}
