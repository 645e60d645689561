use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use mockapi_core::RequestId;

use crate::context::RequestContext;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag each request with a fresh id, stamp it on the response and log the outcome.
pub async fn request_logging(mut req: Request, next: Next) -> Response {
    let ctx = RequestContext::new(RequestId::new());
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    req.extensions_mut().insert(ctx);

    let started = Instant::now();
    let mut res = next.run(req).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if let Ok(value) = HeaderValue::from_str(&ctx.request_id().to_string()) {
        res.headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    tracing::info!(
        request_id = %ctx.request_id(),
        method = %method,
        path = %path,
        status = res.status().as_u16(),
        elapsed_ms,
        "request handled"
    );

    res
}
