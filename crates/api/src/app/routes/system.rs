use std::sync::Arc;

use axum::{extract::Extension, Json};

use mockapi_core::messages::{CONDEMOR_MESSAGE, HELLO_MESSAGE, LONG_MESSAGE};

use crate::app::dto::{CondemorResponse, MessageResponse};
use crate::config::ServerConfig;

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new(HELLO_MESSAGE))
}

/// Answers only after `long_delay`, so clients can measure response latency.
///
/// The wait is an async timer: other in-flight requests keep being served.
pub async fn long(Extension(config): Extension<Arc<ServerConfig>>) -> Json<MessageResponse> {
    tokio::time::sleep(config.long_delay).await;
    Json(MessageResponse::new(LONG_MESSAGE))
}

pub async fn chiquito() -> Json<CondemorResponse> {
    Json(CondemorResponse {
        condemor: CONDEMOR_MESSAGE.to_string(),
    })
}
