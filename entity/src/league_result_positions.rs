use super::{league_results, teams};
use sea_orm::{entity::prelude::*, QueryOrder};

pub mod constraints {
    pub const PK_LEAGUE_RESULT_POSITIONS: &str = "PK_league_result_positions";
    pub const UC_LEAGUE_RESULT_POSITIONS_TEAM: &str = "UC_league_result_positions_team";
    pub const FK_LEAGUE_RESULT_POSITIONS_RESULT_ID: &str = "FK_league_result_positions_result_id";
    pub const FK_LEAGUE_RESULT_POSITIONS_TEAM_ID: &str = "FK_league_result_positions_team_id";
}

/// One filled slot of a result. An empty slot has no row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "league_result_positions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub result_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub position: i16,
    pub team_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Result,
    Team,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Result => Entity::belongs_to(league_results::Entity)
                .from(Column::ResultId)
                .to(league_results::Column::Id)
                .into(),
            Self::Team => Entity::belongs_to(teams::Entity)
                .from(Column::TeamId)
                .to(teams::Column::Id)
                .into(),
        }
    }
}

impl Related<league_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Result.def()
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
    pub fn find_by_result(result_id: Uuid) -> Select<Entity> {
        Self::find()
            .filter(Column::ResultId.eq(result_id))
            .order_by_asc(Column::Position)
    }
}
