//! Collapsed groups and the "Show more..." toggle.
//!
//! Busy conference tracks have dozens of breakout rooms. Those groups start
//! collapsed: occupied rooms are always listed, plus a few empty ones, and a
//! "Show more..." link opens the rest. Whether a visitor has opened a group
//! is tracked in a [`RevealState`] owned by the caller and keyed by slug.

use std::collections::BTreeSet;

use roomdeck_config::LobbyConfig;
use roomdeck_core::Room;
use serde::{Deserialize, Serialize};

use crate::grouping::RoomGroup;

/// Which groups start collapsed and how much of them is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPolicy {
    pub collapsed_prefixes: Vec<String>,
    pub collapsed_empty_rooms: usize,
}

impl RevealPolicy {
    pub fn from_config(config: &LobbyConfig) -> Self {
        Self {
            collapsed_prefixes: config.collapsed_group_prefixes.clone(),
            collapsed_empty_rooms: config.collapsed_empty_rooms,
        }
    }

    /// Whether a group with this name is open before any interaction.
    pub fn starts_open(&self, group_name: &str) -> bool {
        !self
            .collapsed_prefixes
            .iter()
            .any(|prefix| group_name.starts_with(prefix.as_str()))
    }
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self::from_config(&LobbyConfig::default())
    }
}

/// Slugs of the groups a visitor has expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealState {
    #[serde(default)]
    expanded: BTreeSet<String>,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a group. Returns `false` if it was already open.
    pub fn expand(&mut self, slug: impl Into<String>) -> bool {
        self.expanded.insert(slug.into())
    }

    pub fn is_expanded(&self, slug: &str) -> bool {
        self.expanded.contains(slug)
    }
}

/// What a group card shows for the current reveal state.
#[derive(Debug, Clone, Serialize)]
pub struct GroupView<'a> {
    /// Anchor id of the card.
    pub id: String,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<&'a str>,
    pub open: bool,
    /// Rooms to list, in group order.
    pub rooms: Vec<&'a Room>,
    /// Rooms left out while collapsed.
    pub hidden: usize,
    /// Whether to offer "Show more...".
    pub show_more: bool,
}

/// Build the view of one group card.
pub fn group_view<'a>(
    group: &'a RoomGroup,
    state: &RevealState,
    policy: &RevealPolicy,
) -> GroupView<'a> {
    let id = group.slug();
    let open = policy.starts_open(&group.name) || state.is_expanded(&id);

    let rooms: Vec<&Room> = if open {
        group.rooms.iter().collect()
    } else {
        let mut empty_shown = 0;
        group
            .rooms
            .iter()
            .filter(|room| {
                if room.member_count > 0 {
                    true
                } else if empty_shown < policy.collapsed_empty_rooms {
                    empty_shown += 1;
                    true
                } else {
                    false
                }
            })
            .collect()
    };

    let hidden = group.rooms.len().saturating_sub(rooms.len());
    let show_more = !open && hidden > 0;

    GroupView {
        id,
        name: &group.name,
        description: group.description.as_deref(),
        thumbnail: group.thumbnail.as_deref(),
        open,
        rooms,
        hidden,
        show_more,
    }
}
