//! # Tricorn Domain
//!
//! Domain types and models for the tricorn Bungie.Net client.
//!
//! This crate contains:
//! - Domain data types (BungieUser, Clan, Character, Component, etc.)
//! - Open integer enums tolerant of values the remote API adds over time
//! - The error taxonomy shared by every crate in the workspace
//! - The pure deserialization framework (`frames`) mapping raw JSON
//!   payloads onto domain objects
//!
//! ## Architecture
//! - No dependencies on other tricorn crates
//! - Only external dependencies allowed
//! - No I/O: everything in this crate is pure and synchronous

pub mod enums;
pub mod errors;
pub mod frames;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use errors::{TricornError, TricornResult};
pub use frames::FrameError;
pub use types::*;

/// The canonical sentinel substituted for the remote API's "unknown"
/// marker and for absent display strings.
pub const UNDEFINED: &str = "";

/// Root used to render relative image paths into absolute URLs.
pub const IMAGE_ROOT: &str = "https://www.bungie.net";

/// Path substituted when the remote omits an icon reference.
pub const MISSING_ICON_PATH: &str = "/img/misc/missing_icon_d2.png";
