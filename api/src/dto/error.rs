//! Error payload re-export
//!
//! The wire format lives in `te_shared` so that every crate describes
//! failures the same way. The HTTP status mapping is done by
//! `crate::handlers::error_handler`.

pub use te_shared::types::response::ErrorResponse;
