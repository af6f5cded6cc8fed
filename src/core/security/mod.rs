//! Security module for request authentication.
//!
//! Remote clients authenticate with a single static bearer token.

mod bearer;

pub use bearer::{AccessToken, AuthError, BearerAuth};
