use super::leagues;
use sea_orm::{entity::prelude::*, QueryOrder};

pub mod constraints {
    pub const PK_LEAGUE_POINTS: &str = "PK_league_points";
    pub const FK_LEAGUE_POINTS_LEAGUE_ID: &str = "FK_league_points_league_id";
}

/// Points awarded for a correct pick at one finishing position of a league.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "league_points")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub league_id: Uuid,
    /// 1-based finishing position.
    #[sea_orm(primary_key, auto_increment = false)]
    pub position: i16,
    pub points: i32,
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
    pub fn find_by_league(league_id: Uuid) -> Select<Entity> {
        Self::find()
            .filter(Column::LeagueId.eq(league_id))
            .order_by_asc(Column::Position)
    }
}
