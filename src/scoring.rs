//! Scoring of a single prediction against the official standings of a league.

use entity::{league_points, league_result_positions};
use uuid::Uuid;

/// Default point table, first place first.
pub const DEFAULT_POINTS: [i32; 6] = [20, 15, 10, 7, 5, 3];

/// Upper bound for [`entity::leagues::Model::num_ranked_positions`].
pub const MAX_RANKED_POSITIONS: usize = 10;

/// Returns the first `positions` entries of [`DEFAULT_POINTS`], or `None` when
/// the league ranks more positions than there are defaults for.
pub fn default_points(positions: usize) -> Option<Vec<i32>> {
    DEFAULT_POINTS.get(..positions).map(<[i32]>::to_vec)
}

/// Resolves the point table of a league ranking `positions` places.
///
/// Explicit points must have one non-negative value per position; without
/// them the defaults are used, which only cover up to six positions.
pub fn point_table(positions: usize, explicit: Option<Vec<i32>>) -> Option<Vec<i32>> {
    if positions == 0 || positions > MAX_RANKED_POSITIONS {
        return None;
    }

    match explicit {
        Some(points) if points.len() == positions && points.iter().all(|&p| p >= 0) => {
            Some(points)
        }
        Some(_) => None,
        None => default_points(positions),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// 1-based finishing position.
    pub position: i16,
    pub team: Option<Uuid>,
    pub points: i32,
}

/// The ranked slots of a league result together with the points each slot is
/// worth. Built from the league's point table, so its length always matches
/// the number of ranked positions of the league.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    placements: Vec<Placement>,
}

impl Standings {
    /// `points[i]` and `slots[i]` belong to position `i + 1`. Slots past the end
    /// of `slots` are empty, slots past the end of `points` are ignored.
    #[cfg(test)]
    pub(crate) fn new(points: &[i32], slots: &[Option<Uuid>]) -> Self {
        let placements = points
            .iter()
            .enumerate()
            .map(|(i, &points)| Placement {
                position: i as i16 + 1,
                team: slots.get(i).copied().flatten(),
                points,
            })
            .collect();

        Self { placements }
    }

    pub fn from_rows(
        points: &[league_points::Model],
        positions: &[league_result_positions::Model],
    ) -> Self {
        let placements = points
            .iter()
            .map(|row| Placement {
                position: row.position,
                team: positions
                    .iter()
                    .find(|slot| slot.position == row.position)
                    .map(|slot| slot.team_id),
                points: row.points,
            })
            .collect();

        Self { placements }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}

/// Points earned by picking `predicted_team` given the official standings.
///
/// Slots are compared first to last and the first match wins; results never
/// place a team twice so at most one slot can match. A missing result, an empty
/// slot or a team outside the ranked positions all score 0.
pub fn score(predicted_team: &Uuid, standings: Option<&Standings>) -> i32 {
    let Some(standings) = standings else {
        return 0;
    };

    standings
        .placements
        .iter()
        .find(|placement| placement.team.as_ref() == Some(predicted_team))
        .map_or(0, |placement| placement.points)
}
