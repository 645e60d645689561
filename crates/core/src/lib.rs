//! `mockapi-core` — pure building blocks of the mock API.
//!
//! Nothing in here does I/O: the echo classifier, the canned payloads and the
//! configuration error model are plain values and total functions, so the HTTP
//! layer stays a thin mapping on top of them.

pub mod echo;
pub mod error;
pub mod id;
pub mod messages;
pub mod payload;

pub use echo::{EchoResult, classify};
pub use error::{ConfigError, ConfigResult};
pub use id::RequestId;
pub use payload::ManyFieldsPayload;
