pub mod league_points;
pub mod league_result_positions;
pub mod league_results;
pub mod leagues;
pub mod predictions;
pub mod profiles;
pub mod teams;
