use axum::{body::Bytes, extract::Extension, Json};

use mockapi_core::classify;

use crate::app::dto::EchoResponse;
use crate::context::RequestContext;

/// `POST /echo`: reflect the body back under `echo`.
///
/// Never fails on content. Invalid UTF-8 is replaced lossily before the body
/// is classified.
pub async fn echo(
    Extension(ctx): Extension<RequestContext>,
    body: Bytes,
) -> Json<EchoResponse> {
    let text = String::from_utf8_lossy(&body);
    let echo = classify(&text);

    tracing::debug!(
        request_id = %ctx.request_id(),
        kind = echo.kind(),
        bytes = body.len(),
        "echo classified"
    );

    Json(EchoResponse { echo })
}
