//! Typed client surface
//!
//! [`Client`] wraps a [`RestClient`] and binds the pure deserialization
//! framework as methods: each call issues the matching raw request, then
//! hands the decoded `Response` payload to the corresponding frame. The
//! frames remain usable free-standing; nothing here is more than
//! request-plus-deserialize.

use std::collections::HashMap;

use tricorn_domain::enums::{ComponentType, GameMode, MembershipType};
use tricorn_domain::frames;
use tricorn_domain::types::{
    Activity, AggregatedActivity, BungieUser, Clan, ClanMember, Component, DestinyMembership,
    Fireteam, FireteamLobby, InventoryEntity, Milestone, MilestoneContent, ObjectiveEntity,
    PostActivity,
};
use tricorn_domain::TricornResult;

use crate::rest::RestClient;
use crate::settings::Settings;

/// The typed surface over the same transport as the raw surface.
#[derive(Debug)]
pub struct Client {
    rest: RestClient,
}

impl Client {
    /// Create a typed client from validated settings.
    pub fn new(settings: Settings) -> Self {
        Self { rest: RestClient::new(settings) }
    }

    /// Create a typed client from a bare API key.
    pub fn with_key(api_key: impl Into<String>) -> TricornResult<Self> {
        Ok(Self { rest: RestClient::with_key(api_key)? })
    }

    /// The underlying raw handle, for routes without a typed binding.
    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Close the underlying handle.
    pub fn close(&self) {
        self.rest.close();
    }

    // ---- Users ----

    /// Fetch a Bungie.Net profile by its membership id.
    pub async fn fetch_bungie_user(&self, id: i64) -> TricornResult<BungieUser> {
        let payload = self.rest.fetch_bungie_user(id).await?;
        Ok(frames::deserialize_bungie_user(&payload)?)
    }

    /// Fetch the Destiny memberships linked to a membership id.
    pub async fn fetch_memberships(
        &self,
        id: i64,
        membership_type: MembershipType,
    ) -> TricornResult<Vec<DestinyMembership>> {
        let payload = self.rest.fetch_memberships(id, membership_type).await?;
        Ok(frames::deserialize_linked_profiles(&payload)?)
    }

    /// Search for a Destiny player by their full global name
    /// (`name#code`).
    pub async fn search_destiny_player(
        &self,
        membership_type: MembershipType,
        name: &str,
    ) -> TricornResult<Vec<DestinyMembership>> {
        let payload = self.rest.search_destiny_player(membership_type, name).await?;
        Ok(frames::deserialize_destiny_memberships(&payload)?)
    }

    // ---- Profiles ----

    /// Fetch a profile with the requested component subtrees.
    pub async fn fetch_profile(
        &self,
        id: i64,
        membership_type: MembershipType,
        components: &[ComponentType],
        access_token: Option<&str>,
    ) -> TricornResult<Component> {
        let payload = self.rest.fetch_profile(id, membership_type, components, access_token).await?;
        Ok(frames::deserialize_component(&payload)?)
    }

    /// Fetch one character's component subtrees.
    pub async fn fetch_character(
        &self,
        id: i64,
        membership_type: MembershipType,
        character_id: i64,
        components: &[ComponentType],
        access_token: Option<&str>,
    ) -> TricornResult<Component> {
        let payload = self
            .rest
            .fetch_character(id, membership_type, character_id, components, access_token)
            .await?;
        Ok(frames::deserialize_component(&payload)?)
    }

    // ---- Static definitions ----

    /// Fetch an inventory item definition from the live manifest routes.
    pub async fn fetch_inventory_entity(&self, hash: u32) -> TricornResult<InventoryEntity> {
        let payload = self.rest.fetch_entity("DestinyInventoryItemDefinition", hash).await?;
        Ok(frames::deserialize_inventory_entity(&payload)?)
    }

    /// Fetch an objective definition.
    pub async fn fetch_objective_entity(&self, hash: u32) -> TricornResult<ObjectiveEntity> {
        let payload = self.rest.fetch_entity("DestinyObjectiveDefinition", hash).await?;
        Ok(frames::deserialize_objective_entity(&payload)?)
    }

    // ---- Clans ----

    /// Fetch a clan by its group id.
    pub async fn fetch_clan_by_id(&self, id: i64) -> TricornResult<Clan> {
        let payload = self.rest.fetch_clan_by_id(id).await?;
        Ok(frames::deserialize_clan(&payload)?)
    }

    /// Fetch a clan by name.
    pub async fn fetch_clan_by_name(&self, name: &str) -> TricornResult<Clan> {
        let payload = self.rest.fetch_clan_by_name(name, 1).await?;
        Ok(frames::deserialize_clan(&payload)?)
    }

    /// Fetch a page of a clan's member roster.
    pub async fn fetch_clan_members(
        &self,
        id: i64,
        name: Option<&str>,
        page: u32,
    ) -> TricornResult<Vec<ClanMember>> {
        let payload = self.rest.fetch_clan_members(id, name, page).await?;
        Ok(frames::deserialize_clan_members(&payload)?)
    }

    /// Fetch the clans a Destiny membership belongs to.
    pub async fn fetch_user_clans(
        &self,
        id: i64,
        membership_type: MembershipType,
    ) -> TricornResult<Vec<Clan>> {
        let payload = self.rest.fetch_user_clans(id, membership_type).await?;
        Ok(frames::deserialize_user_clans(&payload)?)
    }

    // ---- Activities ----

    /// Fetch a page of a character's activity history.
    pub async fn fetch_activities(
        &self,
        id: i64,
        character_id: i64,
        membership_type: MembershipType,
        mode: GameMode,
        page: u32,
        limit: u32,
    ) -> TricornResult<Vec<Activity>> {
        let payload = self
            .rest
            .fetch_activities(id, character_id, membership_type, mode, page, limit)
            .await?;
        Ok(frames::deserialize_activities(&payload)?)
    }

    /// Fetch a post-game carnage report by activity instance id.
    pub async fn fetch_post_activity(&self, instance_id: i64) -> TricornResult<PostActivity> {
        let payload = self.rest.fetch_post_activity(instance_id).await?;
        Ok(frames::deserialize_post_activity(&payload)?)
    }

    /// Fetch lifetime per-activity aggregates for a character.
    pub async fn fetch_aggregated_activities(
        &self,
        id: i64,
        character_id: i64,
        membership_type: MembershipType,
    ) -> TricornResult<Vec<AggregatedActivity>> {
        let payload =
            self.rest.fetch_aggregated_activities(id, character_id, membership_type).await?;
        Ok(frames::deserialize_aggregated_activities(&payload)?)
    }

    // ---- Milestones ----

    /// Fetch the current public milestones keyed by milestone hash.
    pub async fn fetch_public_milestones(&self) -> TricornResult<HashMap<u32, Milestone>> {
        let payload = self.rest.fetch_public_milestones().await?;
        Ok(frames::deserialize_milestones(&payload)?)
    }

    /// Fetch localized editorial content for one milestone.
    pub async fn fetch_milestone_content(&self, hash: u32) -> TricornResult<MilestoneContent> {
        let payload = self.rest.fetch_milestone_content(hash).await?;
        Ok(frames::deserialize_milestone_content(&payload)?)
    }

    // ---- Fireteams ----

    /// Search the public fireteam board.
    #[allow(clippy::too_many_arguments)]
    pub async fn search_fireteams(
        &self,
        platform: i32,
        activity_type: i32,
        date_range: u32,
        slots_filter: u32,
        page: u32,
        language: &str,
    ) -> TricornResult<Vec<Fireteam>> {
        let payload = self
            .rest
            .search_fireteams(platform, activity_type, date_range, slots_filter, page, language)
            .await?;
        Ok(frames::deserialize_fireteams(&payload)?)
    }

    /// Fetch one FireteamFinder lobby.
    pub async fn fetch_fireteam_lobby(
        &self,
        access_token: &str,
        lobby_id: i64,
        membership_id: i64,
        character_id: i64,
        membership_type: MembershipType,
    ) -> TricornResult<FireteamLobby> {
        let payload = self
            .rest
            .fetch_fireteam_lobby(access_token, lobby_id, membership_id, character_id, membership_type)
            .await?;
        Ok(frames::deserialize_lobby(&payload)?)
    }
}

impl From<RestClient> for Client {
    fn from(rest: RestClient) -> Self {
        Self { rest }
    }
}
