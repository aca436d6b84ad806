//! Error types for nxtwatch.
//!
//! | Error | Raised by | Surfaced as |
//! |-------|-----------|-------------|
//! | [`AuthError`] | login | inline message on the login form |
//! | [`FetchError`] | listing/detail requests | the screen's failure panel with retry |
//! | [`TimestampError`] | publish-time formatting | never shown; raw string displayed |
//!
//! Every error reports an [`ErrorCategory`] which is attached to log records.

mod auth;
mod category;
mod fetch;
mod timestamp;

pub use auth::{AuthError, GENERIC_LOGIN_MESSAGE, NETWORK_LOGIN_MESSAGE};
pub use category::ErrorCategory;
pub use fetch::{FetchError, FAILURE_MESSAGE};
pub use timestamp::TimestampError;
