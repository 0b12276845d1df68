//! git-bumper - Find the deepest release-safe commit in a range
//!
//! This library walks a git commit range, resolves the tracker story linked
//! to each commit message, and selects the deepest commit whose entire
//! history is accepted. It is designed to be interface-agnostic:
//!
//! - the `bumper` CLI drives it with styled terminal reporting
//! - embedders can supply their own [`bump::Reporter`] and service impls
//!
//! All I/O is async and sits behind service traits (no globals).

pub mod bump;
pub mod error;
pub mod git;
pub mod tracker;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
