//! Conference lobby: the grouped room list on the landing page.
//!
//! Conference rooms are named `"<group> | <room>"`. The lobby turns the flat
//! public room listing into alphabetically ordered groups, decides which
//! rooms a collapsed group still shows, and whether a room can be joined,
//! spectated, or is full.
//!
//! # Pipeline
//!
//! ```text
//! Vec<Room> ──▶ group_rooms ──▶ Vec<RoomGroup> ──▶ group_view ──▶ GroupView
//!                                                     ▲
//!                                    RevealState ─────┘ (caller-owned)
//! ```
//!
//! Nothing here holds state between calls. Which collapsed groups the
//! visitor has opened lives in a [`RevealState`] the caller owns.

mod availability;
mod collate;
mod grouping;
mod nav;
mod reveal;
mod slug;

pub use availability::{RoomAvailability, availability, occupancy_label};
pub use collate::locale_cmp;
pub use grouping::{GROUP_SEPARATOR, RoomGroup, group_rooms};
pub use nav::{Footer, NavLink, footer, header_links};
pub use reveal::{GroupView, RevealPolicy, RevealState, group_view};
pub use slug::make_slug;
