//! What clicking an affordance does.
//!
//! Actions that touch the network are described, not performed: the caller
//! sends the request and runs its own completion callback.

use roomdeck_core::{Entry, EntryKind};
use serde::Serialize;

use crate::policy::Affordance;

/// Endpoint that creates a scene from a parent scene.
const SCENES_ENDPOINT: &str = "/api/v1/scenes";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EntryAction {
    /// Open the avatar editor overlay for one of the viewer's avatars.
    OpenAvatarEditor { avatar_id: String },
    /// Open a URL in a new tab.
    OpenExternal { href: String },
    /// Copy a public avatar into the viewer's avatars.
    RemixAvatar { avatar_id: String, name: String },
    /// Authenticated API request.
    ApiRequest {
        method: &'static str,
        path: &'static str,
        body: serde_json::Value,
    },
    /// Search for avatars similar to this one.
    ShowSimilar { id: String, name: String },
    /// Show the room description panel.
    ShowInfo { id: String },
}

impl EntryAction {
    /// Tooltip of the icon.
    pub fn title(&self) -> &'static str {
        match self {
            Self::OpenAvatarEditor { .. } => "Edit",
            Self::OpenExternal { .. } => "Edit Scene",
            Self::RemixAvatar { .. } => "Copy to my avatars",
            Self::ApiRequest { .. } => "Copy to my scenes",
            Self::ShowSimilar { .. } => "Show Similar",
            Self::ShowInfo { .. } => "room info",
        }
    }
}

/// The action behind an affordance on this entry, if any.
///
/// Returns `None` for the favorite badge and for affordances the entry's
/// kind does not carry.
pub fn action_for(entry: &Entry, affordance: Affordance) -> Option<EntryAction> {
    let action = match (affordance, &entry.kind) {
        (Affordance::Edit, EntryKind::Avatar) => EntryAction::OpenAvatarEditor {
            avatar_id: entry.id.clone(),
        },
        (Affordance::Edit, EntryKind::Scene) => EntryAction::OpenExternal {
            href: format!("/spoke/projects/{}", entry.project_id.as_deref()?),
        },
        (Affordance::Clone, EntryKind::AvatarListing) => EntryAction::RemixAvatar {
            avatar_id: entry.id.clone(),
            name: entry.name.clone(),
        },
        (Affordance::Clone, EntryKind::SceneListing) => EntryAction::ApiRequest {
            method: "POST",
            path: SCENES_ENDPOINT,
            body: serde_json::json!({ "parent_scene_id": entry.id }),
        },
        (Affordance::ShowSimilar, EntryKind::AvatarListing) => EntryAction::ShowSimilar {
            id: entry.id.clone(),
            name: entry.name.clone(),
        },
        (Affordance::Info, EntryKind::Room) => EntryAction::ShowInfo {
            id: entry.id.clone(),
        },
        _ => return None,
    };
    Some(action)
}
