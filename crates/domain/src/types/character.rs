//! Character types

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Faction, Image, Objective, Progression, Rgba};
use crate::enums::{Class, Gender, MembershipType, Race, Stat};

/// A Destiny character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub id: i64,
    pub member_id: i64,
    pub member_type: MembershipType,
    pub light: i32,
    pub level: i32,
    pub class: Class,
    pub gender: Gender,
    pub race: Race,
    pub emblem: Image,
    pub emblem_icon: Image,
    pub emblem_hash: u32,
    pub emblem_color: Rgba,
    pub last_played: DateTime<Utc>,
    /// Total playtime across the account lifetime, in minutes.
    pub total_played_time: i64,
    pub minutes_played_this_session: i64,
    pub percent_to_next_level: f64,
    /// The equipped title's record hash, when one is equipped.
    pub title_hash: Option<u32>,
    /// Character stats keyed by stat hash.
    pub stats: HashMap<Stat, i32>,
}

/// Render data for one character, used by 3D profile views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderedData {
    pub custom_dyes: Vec<Dye>,
}

/// A dye applied to one render channel.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Dye {
    pub channel_hash: u32,
    pub dye_hash: u32,
}

/// Per-character progression state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterProgressions {
    /// Progressions keyed by progression hash.
    pub progressions: HashMap<u32, Progression>,
    /// Faction reputations keyed by faction hash.
    pub factions: HashMap<u32, Faction>,
    /// Objectives of uninstanced items keyed by item hash.
    pub uninstanced_item_objectives: HashMap<u32, Vec<Objective>>,
}
