use super::const_error;

const_error! {
    #[error("P000", "internal server error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const INTERNAL;
}
const_error! {
    #[error("P001", "missing fields")]
    #[status(UNPROCESSABLE_ENTITY)]
    const JSON_MISSING_FIELDS;
}
const_error! {
    #[error("P002", "syntax error")]
    #[status(BAD_REQUEST)]
    const JSON_SYNTAX_ERROR;
}
const_error! {
    #[error("P003", "missing or wrong content-type")]
    #[status(BAD_REQUEST)]
    const JSON_CONTENT_TYPE;
}
const_error! {
    #[error("P004", "invalid data")]
    #[status(BAD_REQUEST)]
    const JSON_VALIDATE_INVALID;
}
const_error! {
    #[error("P005", "database error")]
    #[status(INTERNAL_SERVER_ERROR)]
    const DATABASE_ERROR;
}
const_error! {
    #[error("P006", "could not get claims")]
    #[status(UNAUTHORIZED)]
    const COULD_NOT_GET_CLAIMS;
}
const_error! {
    #[error("P007", "invalid token")]
    #[status(UNAUTHORIZED)]
    const JWT_INVALID_TOKEN;
}
const_error! {
    #[error("P008", "not enough permissions")]
    #[status(FORBIDDEN)]
    const NOT_ENOUGH_PERMISSIONS;
}
const_error! {
    #[error("P009", "user already exists")]
    #[status(BAD_REQUEST)]
    const USER_ALREADY_EXISTS;
}
const_error! {
    #[error("P010", "user is not registered")]
    #[status(FORBIDDEN)]
    const USER_NOT_REGISTERED;
}
const_error! {
    #[error("P011", "league not found")]
    #[status(NOT_FOUND)]
    const LEAGUE_NOT_FOUND;
}
const_error! {
    #[error("P012", "team not found")]
    #[status(NOT_FOUND)]
    const TEAM_NOT_FOUND;
}
const_error! {
    #[error("P013", "team does not belong to the league")]
    #[status(BAD_REQUEST)]
    const INVALID_REFERENCE;
}
const_error! {
    #[error("P014", "the same team is placed more than once")]
    #[status(BAD_REQUEST)]
    const DUPLICATE_TEAM;
}
const_error! {
    #[error("P015", "league is not active")]
    #[status(BAD_REQUEST)]
    const INACTIVE_LEAGUE;
}
const_error! {
    #[error("P016", "result has more positions than the league ranks")]
    #[status(BAD_REQUEST)]
    const TOO_MANY_POSITIONS;
}
const_error! {
    #[error("P017", "already predicted this league")]
    #[status(CONFLICT)]
    const ALREADY_PREDICTED;
}
const_error! {
    #[error("P018", "concurrent update, try again")]
    #[status(CONFLICT)]
    const CONCURRENCY_CONFLICT;
}
const_error! {
    #[error("P019", "result not found")]
    #[status(NOT_FOUND)]
    const RESULT_NOT_FOUND;
}
const_error! {
    #[error("P020", "point table does not match the ranked positions")]
    #[status(BAD_REQUEST)]
    const INVALID_POINT_TABLE;
}

#[cfg(test)]
pub(super) const ALL: &[super::Error] = &[
    INTERNAL,
    JSON_MISSING_FIELDS,
    JSON_SYNTAX_ERROR,
    JSON_CONTENT_TYPE,
    JSON_VALIDATE_INVALID,
    DATABASE_ERROR,
    COULD_NOT_GET_CLAIMS,
    JWT_INVALID_TOKEN,
    NOT_ENOUGH_PERMISSIONS,
    USER_ALREADY_EXISTS,
    USER_NOT_REGISTERED,
    LEAGUE_NOT_FOUND,
    TEAM_NOT_FOUND,
    INVALID_REFERENCE,
    DUPLICATE_TEAM,
    INACTIVE_LEAGUE,
    TOO_MANY_POSITIONS,
    ALREADY_PREDICTED,
    CONCURRENCY_CONFLICT,
    RESULT_NOT_FOUND,
    INVALID_POINT_TABLE,
];
