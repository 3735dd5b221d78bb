//! Join / spectate / full status of a room.

use roomdeck_core::Room;
use serde::Serialize;

/// What the room list offers for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomAvailability {
    /// There is a free seat.
    Join,
    /// Seats are taken but the lobby still admits spectators.
    Spectate,
    /// Members plus lobby occupants reached the cap; no link is shown.
    Full,
}

impl RoomAvailability {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Join => "Join",
            Self::Spectate => "Spectate",
            Self::Full => "Full",
        }
    }

    /// Whether the room link is shown at all.
    pub fn can_enter(&self) -> bool {
        !matches!(self, Self::Full)
    }
}

impl std::fmt::Display for RoomAvailability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn availability(room: &Room, max_room_cap: u32) -> RoomAvailability {
    if room.member_count.saturating_add(room.lobby_count) >= max_room_cap {
        RoomAvailability::Full
    } else if room.member_count >= room.room_size {
        RoomAvailability::Spectate
    } else {
        RoomAvailability::Join
    }
}

/// `"<members> / <capacity>"`
pub fn occupancy_label(room: &Room) -> String {
    format!("{} / {}", room.member_count, room.room_size)
}
