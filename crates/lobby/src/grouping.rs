//! Grouping of conference rooms by the `"<group> | <room>"` naming convention.

use std::collections::HashMap;

use roomdeck_core::Room;
use serde::Serialize;
use tracing::debug;

use crate::collate::locale_cmp;
use crate::slug::make_slug;

/// Separator between the group name and the room name.
pub const GROUP_SEPARATOR: &str = " | ";

/// A named set of rooms shown as one card on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomGroup {
    pub name: String,

    /// Never empty. Sorted by name; grouped rooms carry their short name.
    pub rooms: Vec<Room>,

    /// Description of the first room after sorting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Preview URL of the first room after sorting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// `user_data` of the room that opened the group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<serde_json::Value>,
}

impl RoomGroup {
    fn open(name: String, room: Room, user_data: Option<serde_json::Value>) -> Self {
        Self {
            name,
            rooms: vec![room],
            description: None,
            thumbnail: None,
            user_data,
        }
    }

    /// Anchor id for the group card.
    pub fn slug(&self) -> String {
        make_slug(&self.name)
    }

    /// Total members across all rooms of the group.
    pub fn member_count(&self) -> u32 {
        self.rooms
            .iter()
            .fold(0u32, |acc, r| acc.saturating_add(r.member_count))
    }
}

/// Split `"<group> | <room>"` into its two halves. Any other shape is `None`.
fn split_name(name: &str) -> Option<(&str, &str)> {
    let mut parts = name.split(GROUP_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(group), Some(room), None) => Some((group, room)),
        _ => None,
    }
}

/// Partition rooms into sorted groups.
///
/// A room named `"<group> | <room>"` joins the first group called `<group>`
/// and is renamed to `<room>` in the output. A room whose name does not split
/// into exactly two parts opens a group of its own named after the whole
/// room name. Groups and the rooms inside them are ordered with
/// [`locale_cmp`]; the sort is stable so equal names keep input order.
///
/// The input is left untouched.
pub fn group_rooms(rooms: &[Room]) -> Vec<RoomGroup> {
    let mut groups: Vec<RoomGroup> = Vec::new();
    // First group index per name.
    let mut index: HashMap<String, usize> = HashMap::new();

    for room in rooms {
        match split_name(&room.name) {
            Some((group_name, room_name)) => {
                let member = Room {
                    name: room_name.to_string(),
                    ..room.clone()
                };
                match index.get(group_name) {
                    Some(&i) => groups[i].rooms.push(member),
                    None => {
                        index.insert(group_name.to_string(), groups.len());
                        groups.push(RoomGroup::open(
                            group_name.to_string(),
                            member,
                            room.user_data.clone(),
                        ));
                    }
                }
            }
            None => {
                index.entry(room.name.clone()).or_insert(groups.len());
                groups.push(RoomGroup::open(
                    room.name.clone(),
                    room.clone(),
                    room.user_data.clone(),
                ));
            }
        }
    }

    groups.sort_by(|a, b| locale_cmp(&a.name, &b.name));

    for group in &mut groups {
        group.rooms.sort_by(|a, b| locale_cmp(&a.name, &b.name));
        let main = &group.rooms[0];
        group.description = main.description.clone();
        group.thumbnail = main.thumbnail_url().map(str::to_string);
    }

    debug!(rooms = rooms.len(), groups = groups.len(), "Grouped rooms");
    groups
}
