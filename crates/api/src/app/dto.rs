use serde::Serialize;

use mockapi_core::EchoResult;

/// `{"message": ...}` body used by `/hello` and `/long`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoResponse {
    pub echo: EchoResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CondemorResponse {
    pub condemor: String,
}
