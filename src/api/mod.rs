//! Client for the remote video API.
//!
//! Four endpoints: `POST /login`, `GET /videos/all?search=`,
//! `GET /videos/{trending,gaming}` and `GET /videos/:id`. Raw payloads are
//! decoded in [`payloads`] and mapped to the view models in [`crate::models`].

mod client;
pub mod payloads;

pub use client::{VideoApi, DEFAULT_API_URL};
