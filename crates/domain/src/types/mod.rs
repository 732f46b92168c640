//! Domain object types
//!
//! Plain value types produced by the deserialization framework. They are
//! immutable snapshots related by id; none of them carries behavior
//! beyond trivial accessors.

use serde::{Deserialize, Serialize};

use crate::{IMAGE_ROOT, MISSING_ICON_PATH};

pub mod activity;
pub mod character;
pub mod clan;
pub mod components;
pub mod entity;
pub mod fireteams;
pub mod items;
pub mod milestones;
pub mod progressions;
pub mod records;
pub mod season;
pub mod user;

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

/// A relative image path on the remote CDN.
///
/// The remote frequently omits icon fields; the framework substitutes
/// [`MISSING_ICON_PATH`] so an image reference is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Image(pub String);

impl Image {
    /// Render the absolute URL for this image.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{IMAGE_ROOT}{}", self.0)
    }

    /// The placeholder used when the remote omits an icon.
    #[must_use]
    pub fn missing_icon() -> Self {
        Self(MISSING_ICON_PATH.to_owned())
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::missing_icon()
    }
}

impl std::fmt::Display for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url())
    }
}

/// An RGBA color, used for character emblems.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}
