use super::{league_points, league_results, predictions, teams};
use sea_orm::entity::prelude::*;

pub mod constraints {
    pub const PK_LEAGUES: &str = "PK_leagues";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leagues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub num_ranked_positions: i16,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Points,
    Teams,
    Predictions,
    Result,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Points => Entity::has_many(league_points::Entity).into(),
            Self::Teams => Entity::has_many(teams::Entity).into(),
            Self::Predictions => Entity::has_many(predictions::Entity).into(),
            Self::Result => Entity::has_one(league_results::Entity).into(),
        }
    }
}

impl Related<league_points::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Points.def()
    }
}

impl Related<teams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teams.def()
    }
}

impl Related<predictions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Predictions.def()
    }
}

impl Related<league_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Result.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    #[inline]
    pub fn find_active() -> Select<Entity> {
        Self::find().filter(Column::IsActive.eq(true))
    }
}
