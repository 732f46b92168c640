//! Raw endpoint surface
//!
//! One thin wrapper per remote route. Every method delegates to the
//! executor with a fixed (method, path, body) triple and returns the
//! decoded `Response` payload as raw JSON; the typed surface in
//! [`crate::client`] layers the deserialization framework on top.

use reqwest::Method;
use serde_json::{json, Value};

use tricorn_domain::enums::{ComponentType, GameMode, MembershipType};
use tricorn_domain::TricornResult;

use crate::rest::{RequestOptions, RestClient};

fn components_query(components: &[ComponentType]) -> (String, String) {
    let joined = components
        .iter()
        .map(|component| component.value().to_string())
        .collect::<Vec<_>>()
        .join(",");
    ("components".to_owned(), joined)
}

impl RestClient {
    // ---- User ----

    /// `GET /User/GetBungieNetUserById/{id}/`
    pub async fn fetch_bungie_user(&self, id: i64) -> TricornResult<Value> {
        self.request_value(
            Method::GET,
            &format!("User/GetBungieNetUserById/{id}/"),
            RequestOptions::default(),
        )
        .await
    }

    /// `GET /User/GetMembershipsById/{id}/{type}/`
    pub async fn fetch_memberships(
        &self,
        id: i64,
        membership_type: MembershipType,
    ) -> TricornResult<Value> {
        self.request_value(
            Method::GET,
            &format!("User/GetMembershipsById/{id}/{}/", membership_type.value()),
            RequestOptions::default(),
        )
        .await
    }

    /// `GET /Destiny2/SearchDestinyPlayer/{type}/{name}/`
    pub async fn search_destiny_player(
        &self,
        membership_type: MembershipType,
        name: &str,
    ) -> TricornResult<Value> {
        self.request_value(
            Method::GET,
            &format!(
                "Destiny2/SearchDestinyPlayer/{}/{}/",
                membership_type.value(),
                urlencoding::encode(name)
            ),
            RequestOptions::default(),
        )
        .await
    }

    /// `POST /User/Search/GlobalName/{page}/`
    pub async fn search_users(&self, name: &str, page: u32) -> TricornResult<Value> {
        self.request_value(
            Method::POST,
            &format!("User/Search/GlobalName/{page}/"),
            RequestOptions::json(json!({ "displayNamePrefix": name })),
        )
        .await
    }

    /// `GET /Destiny2/{type}/Profile/{id}/LinkedProfiles/`
    pub async fn fetch_linked_profiles(
        &self,
        id: i64,
        membership_type: MembershipType,
        all: bool,
    ) -> TricornResult<Value> {
        let options = RequestOptions {
            query: vec![("getAllMemberships".to_owned(), all.to_string())],
            ..RequestOptions::default()
        };
        self.request_value(
            Method::GET,
            &format!("Destiny2/{}/Profile/{id}/LinkedProfiles/", membership_type.value()),
            options,
        )
        .await
    }

    /// `GET /User/GetMembershipsForCurrentUser/` (requires a bearer)
    pub async fn fetch_current_user_memberships(&self, access_token: &str) -> TricornResult<Value> {
        self.request_value(
            Method::GET,
            "User/GetMembershipsForCurrentUser/",
            RequestOptions::bearer(access_token),
        )
        .await
    }

    // ---- Profiles and characters ----

    /// `GET /Destiny2/{type}/Profile/{id}/` with a components filter.
    pub async fn fetch_profile(
        &self,
        id: i64,
        membership_type: MembershipType,
        components: &[ComponentType],
        access_token: Option<&str>,
    ) -> TricornResult<Value> {
        let options = RequestOptions {
            query: vec![components_query(components)],
            bearer: access_token.map(str::to_owned),
            ..RequestOptions::default()
        };
        self.request_value(
            Method::GET,
            &format!("Destiny2/{}/Profile/{id}/", membership_type.value()),
            options,
        )
        .await
    }

    /// `GET /Destiny2/{type}/Profile/{id}/Character/{char}/`
    pub async fn fetch_character(
        &self,
        id: i64,
        membership_type: MembershipType,
        character_id: i64,
        components: &[ComponentType],
        access_token: Option<&str>,
    ) -> TricornResult<Value> {
        let options = RequestOptions {
            query: vec![components_query(components)],
            bearer: access_token.map(str::to_owned),
            ..RequestOptions::default()
        };
        self.request_value(
            Method::GET,
            &format!(
                "Destiny2/{}/Profile/{id}/Character/{character_id}/",
                membership_type.value()
            ),
            options,
        )
        .await
    }

    /// `GET /Destiny2/Manifest/{entity_type}/{hash}/`
    pub async fn fetch_entity(&self, entity_type: &str, hash: u32) -> TricornResult<Value> {
        self.request_value(
            Method::GET,
            &format!("Destiny2/Manifest/{entity_type}/{hash}/"),
            RequestOptions::default(),
        )
        .await
    }

    /// `GET /Destiny2/Manifest/`
    pub async fn fetch_manifest_index(&self) -> TricornResult<Value> {
        self.request_value(Method::GET, "Destiny2/Manifest/", RequestOptions::default()).await
    }

    // ---- Clans ----

    /// `GET /GroupV2/{id}/`
    pub async fn fetch_clan_by_id(&self, id: i64) -> TricornResult<Value> {
        self.request_value(Method::GET, &format!("GroupV2/{id}/"), RequestOptions::default()).await
    }

    /// `GET /GroupV2/Name/{name}/{type}/`
    pub async fn fetch_clan_by_name(&self, name: &str, group_type: i32) -> TricornResult<Value> {
        self.request_value(
            Method::GET,
            &format!("GroupV2/Name/{}/{group_type}/", urlencoding::encode(name)),
            RequestOptions::default(),
        )
        .await
    }

    /// `GET /GroupV2/{id}/Members/` with an optional name filter.
    pub async fn fetch_clan_members(
        &self,
        id: i64,
        name: Option<&str>,
        page: u32,
    ) -> TricornResult<Value> {
        let mut query = vec![("currentpage".to_owned(), page.to_string())];
        if let Some(name) = name {
            query.push(("nameSearch".to_owned(), name.to_owned()));
        }
        self.request_value(
            Method::GET,
            &format!("GroupV2/{id}/Members/"),
            RequestOptions { query, ..RequestOptions::default() },
        )
        .await
    }

    /// `GET /GroupV2/User/{type}/{id}/0/1/`
    pub async fn fetch_user_clans(
        &self,
        id: i64,
        membership_type: MembershipType,
    ) -> TricornResult<Value> {
        self.request_value(
            Method::GET,
            &format!("GroupV2/User/{}/{id}/0/1/", membership_type.value()),
            RequestOptions::default(),
        )
        .await
    }

    /// `POST /GroupV2/{id}/Members/{type}/{member}/Kick/` (admin only)
    pub async fn kick_clan_member(
        &self,
        access_token: &str,
        group_id: i64,
        membership_id: i64,
        membership_type: MembershipType,
    ) -> TricornResult<Value> {
        self.request_value(
            Method::POST,
            &format!(
                "GroupV2/{group_id}/Members/{}/{membership_id}/Kick/",
                membership_type.value()
            ),
            RequestOptions::bearer(access_token),
        )
        .await
    }

    /// `POST /GroupV2/{id}/Members/{type}/{member}/Ban/` (admin only)
    pub async fn ban_clan_member(
        &self,
        access_token: &str,
        group_id: i64,
        membership_id: i64,
        membership_type: MembershipType,
        length: i32,
        comment: &str,
    ) -> TricornResult<Option<Value>> {
        let options = RequestOptions {
            json: Some(json!({ "comment": comment, "length": length })),
            bearer: Some(access_token.to_owned()),
            ..RequestOptions::default()
        };
        self.request(
            Method::POST,
            &format!(
                "GroupV2/{group_id}/Members/{}/{membership_id}/Ban/",
                membership_type.value()
            ),
            options,
        )
        .await
    }

    /// `GET /GroupV2/{id}/Members/Pending/` (admin only)
    pub async fn fetch_pending_clan_members(
        &self,
        access_token: &str,
        group_id: i64,
    ) -> TricornResult<Value> {
        self.request_value(
            Method::GET,
            &format!("GroupV2/{group_id}/Members/Pending/"),
            RequestOptions::bearer(access_token),
        )
        .await
    }

    // ---- Activities ----

    /// `GET /Destiny2/{type}/Account/{id}/Character/{char}/Stats/Activities/`
    pub async fn fetch_activities(
        &self,
        id: i64,
        character_id: i64,
        membership_type: MembershipType,
        mode: GameMode,
        page: u32,
        limit: u32,
    ) -> TricornResult<Value> {
        let options = RequestOptions {
            query: vec![
                ("mode".to_owned(), mode.value().to_string()),
                ("page".to_owned(), page.to_string()),
                ("count".to_owned(), limit.to_string()),
            ],
            ..RequestOptions::default()
        };
        self.request_value(
            Method::GET,
            &format!(
                "Destiny2/{}/Account/{id}/Character/{character_id}/Stats/Activities/",
                membership_type.value()
            ),
            options,
        )
        .await
    }

    /// `GET /Destiny2/Stats/PostGameCarnageReport/{instance}/`
    pub async fn fetch_post_activity(&self, instance_id: i64) -> TricornResult<Value> {
        self.request_value(
            Method::GET,
            &format!("Destiny2/Stats/PostGameCarnageReport/{instance_id}/"),
            RequestOptions::default(),
        )
        .await
    }

    /// `GET /Destiny2/{type}/Account/{id}/Character/{char}/Stats/AggregateActivityStats/`
    pub async fn fetch_aggregated_activities(
        &self,
        id: i64,
        character_id: i64,
        membership_type: MembershipType,
    ) -> TricornResult<Value> {
        self.request_value(
            Method::GET,
            &format!(
                "Destiny2/{}/Account/{id}/Character/{character_id}/Stats/AggregateActivityStats/",
                membership_type.value()
            ),
            RequestOptions::default(),
        )
        .await
    }

    // ---- Milestones ----

    /// `GET /Destiny2/Milestones/`
    pub async fn fetch_public_milestones(&self) -> TricornResult<Value> {
        self.request_value(Method::GET, "Destiny2/Milestones/", RequestOptions::default()).await
    }

    /// `GET /Destiny2/Milestones/{hash}/Content/`
    pub async fn fetch_milestone_content(&self, hash: u32) -> TricornResult<Value> {
        self.request_value(
            Method::GET,
            &format!("Destiny2/Milestones/{hash}/Content/"),
            RequestOptions::default(),
        )
        .await
    }

    // ---- Item actions (all require a bearer) ----

    /// `POST /Destiny2/Actions/Items/TransferItem`
    #[allow(clippy::too_many_arguments)]
    pub async fn transfer_item(
        &self,
        access_token: &str,
        item_id: i64,
        item_hash: u32,
        character_id: i64,
        membership_type: MembershipType,
        stack_size: i32,
        vault: bool,
    ) -> TricornResult<Option<Value>> {
        let options = RequestOptions {
            json: Some(json!({
                "characterId": character_id,
                "membershipType": membership_type.value(),
                "itemId": item_id,
                "itemReferenceHash": item_hash,
                "stackSize": stack_size,
                "transferToVault": vault,
            })),
            bearer: Some(access_token.to_owned()),
            ..RequestOptions::default()
        };
        self.request(Method::POST, "Destiny2/Actions/Items/TransferItem", options).await
    }

    /// `POST /Destiny2/Actions/Items/PullFromPostmaster`
    pub async fn pull_from_postmaster(
        &self,
        access_token: &str,
        item_id: i64,
        item_hash: u32,
        character_id: i64,
        membership_type: MembershipType,
        stack_size: i32,
    ) -> TricornResult<Option<Value>> {
        let options = RequestOptions {
            json: Some(json!({
                "characterId": character_id,
                "membershipType": membership_type.value(),
                "itemId": item_id,
                "itemReferenceHash": item_hash,
                "stackSize": stack_size,
            })),
            bearer: Some(access_token.to_owned()),
            ..RequestOptions::default()
        };
        self.request(Method::POST, "Destiny2/Actions/Items/PullFromPostmaster", options).await
    }

    /// `POST /Destiny2/Actions/Items/EquipItem`
    pub async fn equip_item(
        &self,
        access_token: &str,
        item_id: i64,
        character_id: i64,
        membership_type: MembershipType,
    ) -> TricornResult<Option<Value>> {
        let options = RequestOptions {
            json: Some(json!({
                "itemId": item_id,
                "characterId": character_id,
                "membershipType": membership_type.value(),
            })),
            bearer: Some(access_token.to_owned()),
            ..RequestOptions::default()
        };
        self.request(Method::POST, "Destiny2/Actions/Items/EquipItem", options).await
    }

    /// `POST /Destiny2/Actions/Items/EquipItems`
    pub async fn equip_items(
        &self,
        access_token: &str,
        item_ids: &[i64],
        character_id: i64,
        membership_type: MembershipType,
    ) -> TricornResult<Option<Value>> {
        let options = RequestOptions {
            json: Some(json!({
                "itemIds": item_ids,
                "characterId": character_id,
                "membershipType": membership_type.value(),
            })),
            bearer: Some(access_token.to_owned()),
            ..RequestOptions::default()
        };
        self.request(Method::POST, "Destiny2/Actions/Items/EquipItems", options).await
    }

    /// `POST /Destiny2/Actions/Items/SetLockState`
    ///
    /// Sends `membershipType` alongside the item fields; the remote
    /// rejects the request for a mismatched platform otherwise.
    pub async fn set_item_lock_state(
        &self,
        access_token: &str,
        state: bool,
        item_id: i64,
        character_id: i64,
        membership_type: MembershipType,
    ) -> TricornResult<Option<Value>> {
        let options = RequestOptions {
            json: Some(json!({
                "state": state,
                "itemId": item_id,
                "characterId": character_id,
                "membershipType": membership_type.value(),
            })),
            bearer: Some(access_token.to_owned()),
            ..RequestOptions::default()
        };
        self.request(Method::POST, "Destiny2/Actions/Items/SetLockState", options).await
    }

    // ---- Fireteams ----

    /// `GET /Fireteam/Search/Public/{platform}/{activity}/{date_range}/{slots}/{page}/`
    pub async fn search_fireteams(
        &self,
        platform: i32,
        activity_type: i32,
        date_range: u32,
        slots_filter: u32,
        page: u32,
        language: &str,
    ) -> TricornResult<Value> {
        let options = RequestOptions {
            query: vec![("langFilter".to_owned(), language.to_owned())],
            ..RequestOptions::default()
        };
        self.request_value(
            Method::GET,
            &format!(
                "Fireteam/Search/Public/{platform}/{activity_type}/{date_range}/{slots_filter}/{page}/"
            ),
            options,
        )
        .await
    }

    /// `GET /Fireteam/Clan/{group}/Summaries/{platform}/{activity}/{slots}/{page}/`
    pub async fn fetch_clan_fireteams(
        &self,
        access_token: &str,
        group_id: i64,
        platform: i32,
        activity_type: i32,
        slots_filter: u32,
        page: u32,
        language: &str,
    ) -> TricornResult<Value> {
        let options = RequestOptions {
            query: vec![("langFilter".to_owned(), language.to_owned())],
            bearer: Some(access_token.to_owned()),
            ..RequestOptions::default()
        };
        self.request_value(
            Method::GET,
            &format!(
                "Fireteam/Clan/{group_id}/Summaries/{platform}/{activity_type}/{slots_filter}/{page}/"
            ),
            options,
        )
        .await
    }

    /// `POST /FireteamFinder/Lobby/Host/{type}/{member}/{char}/`
    pub async fn host_fireteam_lobby(
        &self,
        access_token: &str,
        membership_id: i64,
        character_id: i64,
        membership_type: MembershipType,
        settings: Value,
    ) -> TricornResult<Value> {
        let options = RequestOptions {
            json: Some(settings),
            bearer: Some(access_token.to_owned()),
            ..RequestOptions::default()
        };
        self.request_value(
            Method::POST,
            &format!(
                "FireteamFinder/Lobby/Host/{}/{membership_id}/{character_id}/",
                membership_type.value()
            ),
            options,
        )
        .await
    }

    /// `GET /FireteamFinder/Lobby/{lobby}/{type}/{member}/{char}/`
    pub async fn fetch_fireteam_lobby(
        &self,
        access_token: &str,
        lobby_id: i64,
        membership_id: i64,
        character_id: i64,
        membership_type: MembershipType,
    ) -> TricornResult<Value> {
        self.request_value(
            Method::GET,
            &format!(
                "FireteamFinder/Lobby/{lobby_id}/{}/{membership_id}/{character_id}/",
                membership_type.value()
            ),
            RequestOptions::bearer(access_token),
        )
        .await
    }

    // ---- Records and collectibles ----

    /// `GET /Destiny2/{type}/Profile/{id}/Collectibles/{item}/`
    pub async fn fetch_collectible_node_details(
        &self,
        id: i64,
        membership_type: MembershipType,
        character_id: i64,
        collectible_hash: u32,
    ) -> TricornResult<Value> {
        let options = RequestOptions {
            query: vec![components_query(&[ComponentType::COLLECTIBLES])],
            ..RequestOptions::default()
        };
        self.request_value(
            Method::GET,
            &format!(
                "Destiny2/{}/Profile/{id}/Character/{character_id}/Collectibles/{collectible_hash}/",
                membership_type.value()
            ),
            options,
        )
        .await
    }

    // ---- Applications ----

    /// `GET /App/Application/{id}/`
    pub async fn fetch_application(&self, id: i64) -> TricornResult<Value> {
        self.request_value(Method::GET, &format!("App/Application/{id}/"), RequestOptions::default())
            .await
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for endpoint helpers.
    use super::*;

    /// Validates `components_query` behavior for the filter encoding.
    ///
    /// Assertions:
    /// - Confirms component values join as a comma-separated list.
    #[test]
    fn test_components_query() {
        let (key, value) = components_query(&[
            ComponentType::PROFILE,
            ComponentType::CHARACTERS,
            ComponentType::RECORDS,
        ]);
        assert_eq!(key, "components");
        assert_eq!(value, "100,200,900");
    }
}
