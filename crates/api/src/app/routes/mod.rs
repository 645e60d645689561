use axum::{
    handler::Handler,
    routing::{get, post, MethodRouter},
    Router,
};

use crate::app::errors;

pub mod echo;
pub mod payload;
pub mod system;

/// Router for the mock endpoints.
///
/// `legacy_routes` adds the undocumented `/chiquito` route.
pub fn router(legacy_routes: bool) -> Router {
    let router = Router::new()
        .route("/hello", get_only(system::hello))
        .route("/echo", post_only(echo::echo))
        .route("/long", get_only(system::long))
        .route("/manyFieldsPayload", get_only(payload::many_fields_payload));

    if legacy_routes {
        router.route("/chiquito", get_only(system::chiquito))
    } else {
        router
    }
}

/// GET and nothing else. HEAD is refused too instead of being answered by
/// the GET handler.
fn get_only<H, T>(handler: H) -> MethodRouter
where
    H: Handler<T, ()>,
    T: 'static,
{
    get(handler)
        .head(errors::method_not_allowed)
        .fallback(errors::method_not_allowed)
}

fn post_only<H, T>(handler: H) -> MethodRouter
where
    H: Handler<T, ()>,
    T: 'static,
{
    post(handler).fallback(errors::method_not_allowed)
}
