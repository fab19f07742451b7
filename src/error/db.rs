use sea_orm::{DbErr, RuntimeErr};
use sqlx::error::{DatabaseError as SqlxDatabaseError, ErrorKind};
use sqlx::Error as SqlxError;

pub trait DatabaseError {
    fn unique_violation(&self, constraint: &str) -> bool;
    fn foreign_key_violation(&self, constraint: &str) -> bool;
}

impl DatabaseError for DbErr {
    fn unique_violation(&self, constraint: &str) -> bool {
        is_kind_and_constraint(self, ErrorKind::UniqueViolation, constraint)
    }

    fn foreign_key_violation(&self, constraint: &str) -> bool {
        is_kind_and_constraint(self, ErrorKind::ForeignKeyViolation, constraint)
    }
}

#[allow(clippy::borrowed_box)]
fn get_database_error(err: &DbErr) -> Option<&Box<dyn SqlxDatabaseError + 'static>> {
    match err {
        DbErr::Query(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        DbErr::Exec(RuntimeErr::SqlxError(SqlxError::Database(db_err))) => Some(db_err),
        _ => None,
    }
}

fn is_kind_and_constraint(err: &DbErr, kind: ErrorKind, constraint: &str) -> bool {
    let Some(db_err) = get_database_error(err) else {
        return false;
    };

    if db_err.kind() != kind {
        return false;
    }

    // sqlite does not report constraint names, only postgres can be matched exactly
    match db_err.constraint() {
        Some(name) => name == constraint,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_not_violations() {
        let err = DbErr::RecordNotFound("predictions".to_owned());

        assert!(!err.unique_violation("UC_predictions_user_league"));
        assert!(!err.foreign_key_violation("FK_predictions_team_id"));
    }
}
