//! Authentication for nxtwatch.
//!
//! - Session record and its JSON file (`session`)
//! - Sign-in / sign-out against the API and a [`SessionStore`](crate::traits::SessionStore) (`flow`)

pub mod flow;
pub mod session;

pub use flow::{sign_in, sign_out};
pub use session::{SessionFile, StoredSession, SESSION_FILE};
