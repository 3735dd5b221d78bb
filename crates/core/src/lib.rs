//! # roomdeck Core
//!
//! Domain types and error definitions for the roomdeck conference lobby.
//! Rooms and media entries arrive as JSON snapshots from the platform's
//! content API; everything here is a read-only value type that the lobby and
//! tile crates derive their views from.
//!
//! ## Design Philosophy
//!
//! - Inputs are never mutated. Derived structures are rebuilt per call.
//! - Optional fields stay optional: a missing `description` or `images`
//!   degrades to "absent" downstream instead of failing deserialization.
//! - Entry types are a sum type ([`EntryKind`]) so that every policy over
//!   them is an exhaustive match.

pub mod entry;
pub mod error;
pub mod feed;
pub mod room;

// Re-export key types at crate root for ergonomics
pub use entry::{Attributions, Creator, Entry, EntryKind, Publisher};
pub use error::{Error, LayoutError, Result};
pub use feed::Feed;
pub use room::{MediaImages, MediaPreview, Room};
