//! Open integer enums for the Bungie.Net API
//!
//! Every enum here is an open integer wrapper (see [`crate::int_enum`]):
//! known values get named constants, unknown values pass through and
//! compare by integer. A decode never fails because the remote grew an
//! enum.

use crate::int_enum;

int_enum! {
    /// The platform a Destiny membership lives on.
    pub struct MembershipType(i32) {
        NONE = 0 => "None",
        XBOX = 1 => "Xbox",
        PSN = 2 => "PSN",
        STEAM = 3 => "Steam",
        BLIZZARD = 4 => "Blizzard",
        STADIA = 5 => "Stadia",
        EGS = 6 => "Epic Games Store",
        BUNGIE = 254 => "BungieNext",
        ALL = -1 => "All",
    }
}

int_enum! {
    /// Character class.
    pub struct Class(i32) {
        TITAN = 0 => "Titan",
        HUNTER = 1 => "Hunter",
        WARLOCK = 2 => "Warlock",
        UNKNOWN = 3 => "Unknown",
    }
}

int_enum! {
    /// Character gender.
    pub struct Gender(i32) {
        MALE = 0 => "Male",
        FEMALE = 1 => "Female",
        UNKNOWN = 2 => "Unknown",
    }
}

int_enum! {
    /// Character race.
    pub struct Race(i32) {
        HUMAN = 0 => "Human",
        AWOKEN = 1 => "Awoken",
        EXO = 2 => "Exo",
        UNKNOWN = 3 => "Unknown",
    }
}

int_enum! {
    /// Activity game mode.
    pub struct GameMode(i32) {
        NONE = 0 => "None",
        STORY = 2 => "Story",
        STRIKE = 3 => "Strike",
        RAID = 4 => "Raid",
        ALL_PVP = 5 => "All PvP",
        PATROL = 6 => "Patrol",
        ALL_PVE = 7 => "All PvE",
        CONTROL = 10 => "Control",
        CLASH = 12 => "Clash",
        CRIMSON_DOUBLES = 15 => "Crimson Doubles",
        NIGHTFALL = 16 => "Nightfall",
        HEROIC_NIGHTFALL = 17 => "Heroic Nightfall",
        ALL_STRIKES = 18 => "All Strikes",
        IRON_BANNER = 19 => "Iron Banner",
        SURVIVAL = 37 => "Survival",
        COUNTDOWN = 38 => "Countdown",
        TRIALS_OF_THE_NINE = 39 => "Trials of the Nine",
        SOCIAL = 40 => "Social",
        TRIALS_COUNTDOWN = 41 => "Trials Countdown",
        GAMBIT = 63 => "Gambit",
        ALL_PVE_COMPETITIVE = 64 => "All PvE Competitive",
        TRIALS_OF_OSIRIS = 84 => "Trials of Osiris",
        DUNGEON = 82 => "Dungeon",
        LOST_SECTOR = 87 => "Lost Sector",
    }
}

int_enum! {
    /// Character stats. Values are the remote's definition hashes.
    pub struct Stat(u32) {
        NONE = 0 => "None",
        MOBILITY = 2996146975 => "Mobility",
        RESILIENCE = 392767087 => "Resilience",
        RECOVERY = 1943323491 => "Recovery",
        DISCIPLINE = 1735777505 => "Discipline",
        INTELLECT = 144602215 => "Intellect",
        STRENGTH = 4244567218 => "Strength",
        LIGHT_POWER = 1935470627 => "Power",
    }
}

int_enum! {
    /// Component types selecting which subtrees of the composite profile
    /// response the remote includes.
    pub struct ComponentType(i32) {
        NONE = 0 => "None",
        PROFILE = 100 => "Profiles",
        PROFILE_INVENTORIES = 102 => "ProfileInventories",
        PROFILE_CURRENCIES = 103 => "ProfileCurrencies",
        PROFILE_PROGRESSION = 104 => "ProfileProgression",
        CHARACTERS = 200 => "Characters",
        CHARACTER_INVENTORIES = 201 => "CharacterInventories",
        CHARACTER_PROGRESSIONS = 202 => "CharacterProgressions",
        CHARACTER_RENDER_DATA = 203 => "CharacterRenderData",
        CHARACTER_ACTIVITIES = 204 => "CharacterActivities",
        CHARACTER_EQUIPMENT = 205 => "CharacterEquipment",
        CHARACTER_LOADOUTS = 206 => "CharacterLoadouts",
        ITEM_INSTANCES = 300 => "ItemInstances",
        ITEM_OBJECTIVES = 301 => "ItemObjectives",
        ITEM_PERKS = 302 => "ItemPerks",
        ITEM_STATS = 304 => "ItemStats",
        ITEM_SOCKETS = 305 => "ItemSockets",
        ITEM_PLUG_STATES = 308 => "ItemPlugStates",
        ITEM_PLUG_OBJECTIVES = 309 => "ItemPlugObjectives",
        PRESENTATION_NODES = 700 => "PresentationNodes",
        COLLECTIBLES = 800 => "Collectibles",
        RECORDS = 900 => "Records",
        TRANSITORY = 1000 => "Transitory",
        METRICS = 1100 => "Metrics",
        STRING_VARIABLES = 1200 => "StringVariables",
        CRAFTABLES = 1300 => "Craftables",
        COMMENDATIONS = 1400 => "SocialCommendations",
    }
}

int_enum! {
    /// Group kinds in the GroupV2 surface.
    pub struct GroupType(i32) {
        GENERAL = 0 => "General",
        CLAN = 1 => "Clan",
    }
}

int_enum! {
    /// Clan member rank.
    pub struct ClanMemberType(i32) {
        NONE = 0 => "None",
        BEGINNER = 1 => "Beginner",
        MEMBER = 2 => "Member",
        ADMIN = 3 => "Admin",
        ACTING_FOUNDER = 4 => "Acting Founder",
        FOUNDER = 5 => "Founder",
    }
}

int_enum! {
    /// Where an instanced item currently sits.
    pub struct ItemLocation(i32) {
        UNKNOWN = 0 => "Unknown",
        INVENTORY = 1 => "Inventory",
        VAULT = 2 => "Vault",
        VENDOR = 3 => "Vendor",
        POSTMASTER = 4 => "Postmaster",
    }
}

int_enum! {
    /// Transfer eligibility flags for an instanced item.
    pub struct TransferStatus(i32) {
        CAN_TRANSFER = 0 => "CanTransfer",
        IS_EQUIPPED = 1 => "ItemIsEquipped",
        NOT_TRANSFERRABLE = 2 => "NotTransferrable",
        NO_ROOM_IN_DESTINATION = 4 => "NoRoomInDestination",
    }
}

int_enum! {
    /// Item state flags.
    pub struct ItemState(i32) {
        NONE = 0 => "None",
        LOCKED = 1 => "Locked",
        TRACKED = 2 => "Tracked",
        MASTERWORKED = 4 => "Masterworked",
        CRAFTED = 8 => "Crafted",
        HIGHLIGHTED_OBJECTIVE = 16 => "HighlightedObjective",
    }
}

int_enum! {
    /// Inventory item rarity tier.
    pub struct TierType(i32) {
        UNKNOWN = 0 => "Unknown",
        CURRENCY = 1 => "Currency",
        BASIC = 2 => "Basic",
        COMMON = 3 => "Common",
        RARE = 4 => "Rare",
        SUPERIOR = 5 => "Superior",
        EXOTIC = 6 => "Exotic",
    }
}

int_enum! {
    /// Broad inventory item category.
    pub struct ItemType(i32) {
        NONE = 0 => "None",
        CURRENCY = 1 => "Currency",
        ARMOR = 2 => "Armor",
        WEAPON = 3 => "Weapon",
        MESSAGE = 7 => "Message",
        ENGRAM = 8 => "Engram",
        CONSUMABLE = 9 => "Consumable",
        EXCHANGE_MATERIAL = 10 => "Exchange Material",
        MISSION_REWARD = 11 => "Mission Reward",
        QUEST_STEP = 12 => "Quest Step",
        QUEST_STEP_COMPLETE = 13 => "Quest Step Complete",
        EMBLEM = 14 => "Emblem",
        QUEST = 15 => "Quest",
        SUBCLASS = 16 => "Subclass",
        SEASONAL_ARTIFACT = 17 => "Seasonal Artifact",
        FINISHER = 19 => "Finisher",
    }
}

int_enum! {
    /// Weapon ammunition type.
    pub struct AmmoType(i32) {
        NONE = 0 => "None",
        PRIMARY = 1 => "Primary",
        SPECIAL = 2 => "Special",
        HEAVY = 3 => "Heavy",
    }
}

int_enum! {
    /// Damage types a weapon can deal.
    pub struct DamageType(i32) {
        NONE = 0 => "None",
        KINETIC = 1 => "Kinetic",
        ARC = 2 => "Arc",
        SOLAR = 3 => "Solar",
        VOID = 4 => "Void",
        RAID = 5 => "Raid",
        STASIS = 6 => "Stasis",
        STRAND = 7 => "Strand",
    }
}

int_enum! {
    /// Milestone recurrence category.
    pub struct MilestoneType(i32) {
        UNKNOWN = 0 => "Unknown",
        TUTORIAL = 1 => "Tutorial",
        ONE_TIME = 2 => "OneTime",
        WEEKLY = 3 => "Weekly",
        DAILY = 4 => "Daily",
        SPECIAL = 5 => "Special",
    }
}

int_enum! {
    /// Triumph record state flags.
    pub struct RecordState(i32) {
        NONE = 0 => "None",
        REDEEMED = 1 => "RecordRedeemed",
        REWARD_UNAVAILABLE = 2 => "RewardUnavailable",
        OBJECTIVE_NOT_COMPLETED = 4 => "ObjectiveNotCompleted",
        OBSCURED = 8 => "Obscured",
        INVISIBLE = 16 => "Invisible",
        ENTITLEMENT_UNOWNED = 32 => "EntitlementUnowned",
        CAN_EQUIP_TITLE = 64 => "CanEquipTitle",
    }
}

int_enum! {
    /// Platforms selectable when filtering fireteam listings.
    pub struct FireteamPlatform(i32) {
        ANY = 0 => "Any",
        PSN = 1 => "PSN",
        XBOX = 2 => "Xbox",
        BLIZZARD = 3 => "Blizzard",
        STEAM = 4 => "Steam",
        STADIA = 5 => "Stadia",
    }
}

int_enum! {
    /// Activity categories selectable when filtering fireteam listings.
    pub struct FireteamActivity(i32) {
        ANY = 0 => "Any",
        RAID = 1 => "Raid",
        CRUCIBLE = 2 => "Crucible",
        TRIALS = 3 => "Trials of Osiris",
        NIGHTFALL = 4 => "Nightfall",
        GAMBIT = 5 => "Gambit",
        DUNGEON = 20 => "Dungeon",
    }
}
