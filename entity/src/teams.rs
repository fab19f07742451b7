use super::leagues;
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const PK_TEAMS: &str = "PK_teams";
    pub const FK_TEAMS_LEAGUE_ID: &str = "FK_teams_league_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub league_id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    League,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::League => Entity::belongs_to(leagues::Entity)
                .from(Column::LeagueId)
                .to(leagues::Column::Id)
                .into(),
        }
    }
}

impl Related<leagues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_in_league(league_id: Uuid) -> Select<Entity> {
        Self::find().filter(Column::LeagueId.eq(league_id))
    }
}
