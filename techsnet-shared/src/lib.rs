#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::multiple_crate_versions)]

//! Shared building blocks for the TechsNetwork portal.
//!
//! Everything in here is free of browser APIs so it can be exercised with a
//! plain `cargo test` on the host:
//!
//! * [`models`] - request and response bodies exchanged with the backend.
//! * [`session`] - bearer token decoding, validation, persistence and the
//!   session lifecycle that keeps storage and in-memory state consistent.
//! * [`oauth`] - resolution of the OAuth return leg (`/auth-success?token=`).
//! * [`workaround`] - best-effort parsing of free-text AI answers.

pub mod models;
pub mod oauth;
pub mod session;
pub mod workaround;
