use super::{league_result_positions, leagues};
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const PK_LEAGUE_RESULTS: &str = "PK_league_results";
    pub const UC_LEAGUE_RESULTS_LEAGUE_ID: &str = "UC_league_results_league_id";
    pub const FK_LEAGUE_RESULTS_LEAGUE_ID: &str = "FK_league_results_league_id";
}

/// The official final standings of a league. At most one per league.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "league_results")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub league_id: Uuid,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    League,
    Positions,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::League => Entity::belongs_to(leagues::Entity)
                .from(Column::LeagueId)
                .to(leagues::Column::Id)
                .into(),
            Self::Positions => Entity::has_many(league_result_positions::Entity).into(),
        }
    }
}

impl Related<leagues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl Related<league_result_positions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Positions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_by_league(league_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::LeagueId.eq(league_id))
    }
}
