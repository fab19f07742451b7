//! Cross-entity checks run inside the write transaction before a prediction
//! or a result is persisted. The callers load the referenced rows; everything
//! here is a pure check over them.

use entity::{leagues, teams};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("team does not belong to the league")]
    InvalidReference,
    #[error("the same team is placed more than once")]
    DuplicateTeam,
    #[error("league is not active")]
    InactiveLeague,
    #[error("result has {got} positions but the league ranks only {max}")]
    TooManyPositions { max: usize, got: usize },
}

pub fn validate_prediction(
    league: &leagues::Model,
    predicted_team: &teams::Model,
) -> Result<(), ValidationError> {
    if predicted_team.league_id != league.id {
        return Err(ValidationError::InvalidReference);
    }

    if !league.is_active {
        return Err(ValidationError::InactiveLeague);
    }

    Ok(())
}

/// `slots[i]` is the team placed at position `i + 1`, `None` for an empty slot.
///
/// Ownership is checked for every filled slot; distinctness only among the
/// filled ones, so a partially filled result can still be saved.
pub fn validate_result(
    league: &leagues::Model,
    slots: &[Option<teams::Model>],
) -> Result<(), ValidationError> {
    let max = league.num_ranked_positions.max(0) as usize;

    if slots.len() > max {
        return Err(ValidationError::TooManyPositions {
            max,
            got: slots.len(),
        });
    }

    if slots
        .iter()
        .flatten()
        .any(|team| team.league_id != league.id)
    {
        return Err(ValidationError::InvalidReference);
    }

    let mut seen = HashSet::with_capacity(slots.len());

    if !slots.iter().flatten().all(|team| seen.insert(team.id)) {
        return Err(ValidationError::DuplicateTeam);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn league(is_active: bool) -> leagues::Model {
        leagues::Model {
            id: Uuid::new_v4(),
            name: "Premier League".to_owned(),
            is_active,
            num_ranked_positions: 6,
            created_at: Utc::now(),
        }
    }

    fn team(league: &leagues::Model, name: &str) -> teams::Model {
        teams::Model {
            id: Uuid::new_v4(),
            league_id: league.id,
            name: name.to_owned(),
        }
    }

    fn six_teams(league: &leagues::Model) -> Vec<Option<teams::Model>> {
        (1..=6)
            .map(|i| Some(team(league, &format!("Team {i}"))))
            .collect()
    }

    mod prediction {
        use super::*;

        #[test]
        fn team_of_the_league_is_accepted() {
            let league = league(true);
            let team = team(&league, "Arsenal");

            assert_eq!(validate_prediction(&league, &team), Ok(()));
        }

        #[test]
        fn team_of_another_league_is_rejected() {
            let league = league(true);
            let other = self::league(true);
            let team = team(&other, "Real Madrid");

            assert_eq!(
                validate_prediction(&league, &team),
                Err(ValidationError::InvalidReference)
            );
        }

        #[test]
        fn inactive_league_is_rejected() {
            let league = league(false);
            let team = team(&league, "Arsenal");

            assert_eq!(
                validate_prediction(&league, &team),
                Err(ValidationError::InactiveLeague)
            );
        }
    }

    mod result {
        use super::*;

        #[test]
        fn six_distinct_teams_are_accepted() {
            let league = league(true);

            assert_eq!(validate_result(&league, &six_teams(&league)), Ok(()));
        }

        #[test]
        fn partial_result_is_accepted() {
            let league = league(true);
            let mut slots = six_teams(&league);
            slots[2] = None;
            slots.truncate(4);

            assert_eq!(validate_result(&league, &slots), Ok(()));
        }

        #[test]
        fn empty_result_is_accepted() {
            let league = league(true);

            assert_eq!(validate_result(&league, &[None, None]), Ok(()));
        }

        #[test]
        fn repeated_team_is_rejected() {
            let league = league(true);
            let mut slots = six_teams(&league);
            slots[1] = slots[0].clone();

            assert_eq!(
                validate_result(&league, &slots),
                Err(ValidationError::DuplicateTeam)
            );
        }

        #[test]
        fn repeated_team_in_partial_result_is_rejected() {
            let league = league(true);
            let team = team(&league, "Arsenal");
            let slots = [Some(team.clone()), None, Some(team)];

            assert_eq!(
                validate_result(&league, &slots),
                Err(ValidationError::DuplicateTeam)
            );
        }

        #[test]
        fn foreign_team_is_rejected_even_with_empty_slots() {
            let league = league(true);
            let other = self::league(true);
            let slots = [None, Some(team(&other, "Real Madrid"))];

            assert_eq!(
                validate_result(&league, &slots),
                Err(ValidationError::InvalidReference)
            );
        }

        #[test]
        fn too_many_slots_are_rejected() {
            let league = league(true);
            let mut slots = six_teams(&league);
            slots.push(Some(team(&league, "Team 7")));

            assert_eq!(
                validate_result(&league, &slots),
                Err(ValidationError::TooManyPositions { max: 6, got: 7 })
            );
        }
    }
}
