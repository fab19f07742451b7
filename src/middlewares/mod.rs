mod claims;
mod permissions;

use crate::{error, StateTrait};
use axum::{
    http::header::AUTHORIZATION,
    middleware,
    response::{IntoResponse, Response},
    Router,
};
pub use permissions::*;
use std::{any::Any, iter};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    request_id::MakeRequestUuid,
    ServiceBuilderExt,
};

/// A panicking handler answers with the regular `INTERNAL` error body. The
/// panic itself is logged by the hook installed at startup.
fn panic_response(_: Box<dyn Any + Send + 'static>) -> Response {
    error::INTERNAL.into_response()
}

/// Wraps the routes with the layers every request goes through, outermost
/// first. Claims are resolved after the request id is set, so the `claims`
/// span and the request id belong to the same request.
pub fn middlewares<S: StateTrait>(state: S, router: Router<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    let layers = ServiceBuilder::new()
        .layer(CatchPanicLayer::custom(panic_response))
        .sensitive_headers(iter::once(AUTHORIZATION))
        .set_x_request_id(MakeRequestUuid)
        .propagate_x_request_id()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            claims::get_claims::<S>,
        ))
        .compression()
        .decompression()
        .layer(cors)
        .into_inner();

    router.layer(layers).with_state(state)
}
