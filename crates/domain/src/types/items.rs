//! Instanced and uninstanced inventory item types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Image, Objective};
use crate::enums::{DamageType, ItemLocation, ItemState, TransferStatus};

/// An item as it appears in a profile or character inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileItem {
    pub hash: u32,
    pub quantity: i32,
    pub bind_status: i32,
    pub location: ItemLocation,
    pub bucket: u32,
    pub transfer_status: TransferStatus,
    pub lockable: bool,
    pub state: ItemState,
    /// Set only for instanced items.
    pub instance_id: Option<i64>,
    pub version_number: Option<i32>,
    pub override_style_item_hash: Option<u32>,
}

impl ProfileItem {
    /// Whether this item carries an instance id.
    #[must_use]
    pub fn is_instanced(&self) -> bool {
        self.instance_id.is_some()
    }
}

/// The primary stat of an item instance.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StatValue {
    pub stat_hash: u32,
    pub value: i32,
}

/// Instance-scoped item data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemInstance {
    pub damage_type: DamageType,
    pub primary_stat: Option<StatValue>,
    pub item_level: i32,
    pub quality: i32,
    pub is_equipped: bool,
    pub can_equip: bool,
    pub equip_required_level: i32,
    pub cannot_equip_reason: i32,
}

/// A perk on an item instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPerk {
    pub hash: u32,
    pub icon: Image,
    pub is_active: bool,
    pub visible: bool,
}

/// A socket on an item instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSocket {
    pub plug_hash: Option<u32>,
    pub is_enabled: bool,
    pub is_visible: bool,
    pub enable_fail_indexes: Option<Vec<i32>>,
}

/// Instance-keyed item component maps from the composite profile
/// response. Keys are item instance ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemsComponent {
    pub instances: HashMap<i64, ItemInstance>,
    pub perks: HashMap<i64, Vec<ItemPerk>>,
    pub sockets: HashMap<i64, Vec<ItemSocket>>,
    pub objectives: HashMap<i64, Vec<Objective>>,
}
