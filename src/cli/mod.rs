//! # CLI Module
//!
//! User-facing command implementations. Each function backs one subcommand
//! of the `playforge` binary and coordinates the pipeline, the session store
//! and the record store; all user interaction (progress, tables, error
//! presentation) lives here.
//!
//! ## Commands
//!
//! - [`auth`] - Runs the OAuth authorization-code flow against Spotify via a
//!   temporary local callback server and persists the obtained session.
//! - [`expand`] - Expands a source playlist into a new playlist of
//!   recommendations and records the result.
//! - [`list_records`], [`delete_record`], [`rate_record`] - Manage the local
//!   log of generated playlists.
//!
//! ## Error presentation
//!
//! Pipeline errors reach the user as a single short message through the
//! crate's print macros; partial degradation (failed recommendation chunks,
//! failed add batches) is reported as warnings next to the success message
//! instead of being hidden in a log.

mod auth;
mod expand;
mod records;

pub use auth::auth;
pub use expand::expand;
pub use records::delete_record;
pub use records::list_records;
pub use records::rate_record;
