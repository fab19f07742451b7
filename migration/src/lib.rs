pub use sea_orm_migration::prelude::*;

mod m20250301_120000_create_profiles_table;
mod m20250301_120100_create_leagues_table;
mod m20250301_120200_create_league_points_table;
mod m20250301_120300_create_teams_table;
mod m20250301_120400_create_predictions_table;
mod m20250301_120500_create_league_results_table;
mod m20250301_120600_create_league_result_positions_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_120000_create_profiles_table::Migration),
            Box::new(m20250301_120100_create_leagues_table::Migration),
            Box::new(m20250301_120200_create_league_points_table::Migration),
            Box::new(m20250301_120300_create_teams_table::Migration),
            Box::new(m20250301_120400_create_predictions_table::Migration),
            Box::new(m20250301_120500_create_league_results_table::Migration),
            Box::new(m20250301_120600_create_league_result_positions_table::Migration),
        ]
    }
}
