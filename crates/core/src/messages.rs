//! Canned response texts.

/// Body of `GET /hello` under the `message` key.
pub const HELLO_MESSAGE: &str = "Hello, LeoVegas!";

/// Body of `GET /long` under the `message` key.
pub const LONG_MESSAGE: &str = "This was a long response...........................................................................................................................................................................................................................................................................................................................................................";

/// Body of the legacy `GET /chiquito` route under the `condemor` key.
pub const CONDEMOR_MESSAGE: &str = "Jaaaaaaaarrll! No puedor! No puedorrrr!";
