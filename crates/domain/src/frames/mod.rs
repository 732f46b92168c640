//! The pure deserialization framework
//!
//! Every function here maps a raw JSON payload (the unwrapped `Response`
//! field of the platform envelope) onto exactly one domain object, or a
//! collection of them. The functions are pure: no I/O, no shared state,
//! no transports. They can be called free-standing with no client handle;
//! the typed client binds them as methods.
//!
//! Defensive rules applied uniformly:
//! - absent optional fields become the absent state, never an error
//! - `null` and missing are distinguished only where the remote is
//!   consistent about the difference; otherwise both mean absent
//! - display strings normalize the remote's `"#"` unknown marker to the
//!   empty-string Undefined sentinel
//! - enum integers outside the known set pass through as open values
//! - icon fields fall back to the missing-icon path

use thiserror::Error;

mod support;

mod activity;
mod character;
mod clan;
mod components;
mod entity;
mod fireteams;
mod items;
mod milestones;
mod progressions;
mod records;
mod season;
mod user;

pub use activity::*;
pub use character::*;
pub use clan::*;
pub use components::*;
pub use entity::*;
pub use fireteams::*;
pub use items::*;
pub use milestones::*;
pub use progressions::*;
pub use records::*;
pub use season::*;
pub use user::*;

/// Failure of a deserializer on a payload of the wrong shape.
///
/// Only *required* fields produce errors; optional fields degrade to
/// their absent state silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// A required field was absent or `null`.
    #[error("missing required field `{field}` in {context}")]
    Missing { context: &'static str, field: &'static str },

    /// A field was present with an unusable type.
    #[error("field `{field}` in {context} is not {expected}")]
    Invalid { context: &'static str, field: &'static str, expected: &'static str },

    /// The payload root was not the expected JSON shape.
    #[error("expected {context} payload to be {expected}")]
    Shape { context: &'static str, expected: &'static str },

    /// A required timestamp failed to parse.
    #[error("cannot parse timestamp `{value}` in field `{field}`")]
    Timestamp { field: &'static str, value: String },
}
