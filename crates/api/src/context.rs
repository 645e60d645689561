use mockapi_core::RequestId;

/// Per-request context inserted by the request logging middleware.
///
/// Handlers that log pull it out with `Extension<RequestContext>` so their
/// events carry the same id as the access log line and `x-request-id` header.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: RequestId,
}

impl RequestContext {
    pub fn new(request_id: RequestId) -> Self {
        Self { request_id }
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }
}
