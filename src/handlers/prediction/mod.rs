mod list;
mod submit;

use crate::StateTrait;
use axum::{routing::get, Router};

/// Routes for the predictions of the current user
///
/// GET  /predictions
/// POST /predictions
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new().route(
        "/",
        get(list::list_predictions::<S>).post(submit::submit_prediction::<S>),
    )
}
