//! The "create" tile that heads avatar and scene listings.

use roomdeck_config::FeatureFlags;
use serde::Serialize;

use crate::layout::{TileDimensions, compute_tile_size};

/// Which listing the media browser is showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSource {
    Avatars,
    Scenes,
    Rooms,
    Other(String),
}

impl From<&str> for MediaSource {
    fn from(s: &str) -> Self {
        match s {
            "avatars" => Self::Avatars,
            "scenes" => Self::Scenes,
            "rooms" => Self::Rooms,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateTileKind {
    /// Dispatches the client's create-avatar action.
    CreateAvatar,
    /// Links to a new editor project.
    CreateScene,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreateTile {
    pub kind: CreateTileKind,
    pub size: TileDimensions,
}

impl CreateTile {
    /// Link target, for tiles that navigate.
    pub fn href(&self) -> Option<&'static str> {
        match self.kind {
            CreateTileKind::CreateAvatar => None,
            CreateTileKind::CreateScene => Some("/spoke/new"),
        }
    }

    /// i18n message id of the caption.
    pub fn label(&self) -> &'static str {
        match self.kind {
            CreateTileKind::CreateAvatar => "media-browser.create-avatar",
            CreateTileKind::CreateScene => "media-browser.create-scene",
        }
    }
}

/// The create tile for a listing, if it has one.
pub fn create_tile(
    source: &MediaSource,
    viewport_width: u32,
    features: &FeatureFlags,
) -> Option<CreateTile> {
    let kind = match source {
        MediaSource::Avatars => CreateTileKind::CreateAvatar,
        MediaSource::Scenes if features.enable_spoke => CreateTileKind::CreateScene,
        _ => return None,
    };
    let is_avatar = kind == CreateTileKind::CreateAvatar;
    // Not an image tile, so no aspect is needed and sizing cannot fail.
    let size = compute_tile_size(viewport_width, false, is_avatar, None).ok()?;
    Some(CreateTile { kind, size })
}
