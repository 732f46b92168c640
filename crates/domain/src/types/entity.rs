//! Static catalogue entity types
//!
//! These are the manifest-backed definitions the remote also serves
//! through the entity-definition endpoints.

use serde::{Deserialize, Serialize};

use super::Image;
use crate::enums::{AmmoType, DamageType, ItemType, TierType};

/// A full inventory item catalogue entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEntity {
    pub hash: u32,
    pub index: i32,
    /// The Undefined sentinel when the remote redacts the name.
    pub name: String,
    pub description: Option<String>,
    pub flavor_text: Option<String>,
    pub icon: Image,
    pub has_icon: bool,
    pub water_mark: Option<String>,
    pub screenshot: Option<String>,
    pub item_type: ItemType,
    pub type_name: String,
    pub tier: TierType,
    pub tier_name: String,
    pub bucket_hash: u32,
    pub is_equippable: bool,
    pub max_stack_size: i32,
    pub ammo_type: AmmoType,
    pub damage_types: Vec<DamageType>,
    pub lore_hash: Option<u32>,
}

/// An objective catalogue entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectiveEntity {
    pub hash: u32,
    pub index: i32,
    pub description: String,
    pub progress_description: String,
    pub completion_value: i32,
    pub allow_negative_value: bool,
    pub allow_overcompletion: bool,
    pub show_value_on_complete: bool,
    pub value_style: i32,
    pub location_hash: u32,
    pub minimum_visibility_threshold: i32,
}

/// Runtime progress against one objective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Objective {
    pub hash: u32,
    pub progress: i32,
    pub completion_value: i32,
    pub complete: bool,
    pub visible: bool,
    pub destination_hash: Option<u32>,
    pub activity_hash: Option<u32>,
}
