//! Media browser tiles — sizing and per-entry presentation.
//!
//! Given a viewport width and an [`Entry`](roomdeck_core::Entry), this crate
//! answers everything a renderer needs to paint one tile:
//!
//! - how big the tile is ([`compute_tile_size`], [`tile_size_for_entry`]),
//! - whether the thumbnail is a still or a clip ([`Thumbnail`]),
//! - which action icons to show ([`affordances_for`]) and what each does
//!   ([`action_for`]),
//! - the creator/publisher line ([`attribution_text`]),
//! - the "last joined" and occupancy line of room tiles ([`presence`]).
//!
//! Page-level pieces live here too: the "create" tile heading avatar and
//! scene listings ([`create_tile`]) and the pager ([`PagerState`]).
//!
//! All functions are pure. Nothing performs network calls; actions that
//! need one are returned as [`EntryAction`] descriptors for the caller.

mod actions;
mod attribution;
mod create;
mod layout;
mod pager;
mod policy;
mod presence;

pub use actions::{EntryAction, action_for};
pub use attribution::{Attribution, CreatorLabel, attribution_text, publisher_name};
pub use create::{CreateTile, CreateTileKind, MediaSource, create_tile};
pub use layout::{Breakpoint, Thumbnail, TileDimensions, compute_tile_size, tile_size_for_entry};
pub use pager::{PageStep, PagerState};
pub use policy::{Affordance, AffordanceSet, PolicyContext, affordances_for};
pub use presence::{HubPresence, display_name, presence, relative_time};
