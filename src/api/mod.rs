//! # API Module
//!
//! HTTP endpoints of the local callback server used during authentication.
//!
//! - [`callback`] - Receives the OAuth redirect from the provider and
//!   exchanges the authorization code for a token pair.
//! - [`health`] - Health check returning application status and version.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
