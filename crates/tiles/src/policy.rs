//! Which action icons a tile offers.
//!
//! A total mapping from [`EntryKind`] to the affordances it can carry, with
//! per-entry data (remix permission, editor project, description) deciding
//! between them.

use std::collections::BTreeSet;

use roomdeck_core::{Entry, EntryKind};
use serde::Serialize;

/// An action icon or badge on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Affordance {
    Edit,
    Clone,
    ShowSimilar,
    Info,
    /// Star badge; not clickable.
    Favorite,
}

impl std::fmt::Display for Affordance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Edit => "edit",
            Self::Clone => "clone",
            Self::ShowSimilar => "show-similar",
            Self::Info => "info",
            Self::Favorite => "favorite",
        };
        f.write_str(name)
    }
}

/// Ordered set of affordances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AffordanceSet(BTreeSet<Affordance>);

impl AffordanceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, affordance: Affordance) -> bool {
        self.0.insert(affordance)
    }

    pub fn contains(&self, affordance: Affordance) -> bool {
        self.0.contains(&affordance)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Affordance> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Affordance> for AffordanceSet {
    fn from_iter<I: IntoIterator<Item = Affordance>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// What the surrounding page can handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyContext {
    /// The page wired a room-info handler.
    pub info_handler: bool,
}

impl PolicyContext {
    pub fn with_info_handler() -> Self {
        Self { info_handler: true }
    }
}

impl Default for PolicyContext {
    fn default() -> Self {
        Self::with_info_handler()
    }
}

/// Affordances for one entry.
pub fn affordances_for(entry: &Entry, context: &PolicyContext) -> AffordanceSet {
    let mut set = AffordanceSet::new();

    match &entry.kind {
        EntryKind::Avatar => {
            set.insert(Affordance::Edit);
        }
        EntryKind::AvatarListing => {
            set.insert(Affordance::ShowSimilar);
            if entry.allow_remixing {
                set.insert(Affordance::Clone);
            }
        }
        EntryKind::Scene => {
            if entry.project_id.is_some() {
                set.insert(Affordance::Edit);
            }
        }
        EntryKind::SceneListing => {
            if entry.allow_remixing {
                set.insert(Affordance::Clone);
            }
        }
        EntryKind::Room => {
            if entry.description.is_some() && context.info_handler {
                set.insert(Affordance::Info);
            }
        }
        EntryKind::SketchfabModel
        | EntryKind::PolyModel
        | EntryKind::TwitchStream
        | EntryKind::Image(_)
        | EntryKind::Other(_) => {}
    }

    if entry.favorited {
        set.insert(Affordance::Favorite);
    }

    set
}
