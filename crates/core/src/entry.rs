//! Media browser entries: avatars, scenes, rooms and external assets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::room::MediaImages;

/// The content type of an [`Entry`].
///
/// Serialized as the platform's original `type` tag. Unknown tags are kept
/// verbatim in [`EntryKind::Other`] so a feed never fails to parse because
/// of a new content source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryKind {
    /// One of the viewer's own avatars.
    Avatar,
    /// A public avatar listing.
    AvatarListing,
    /// One of the viewer's own scenes.
    Scene,
    /// A public scene listing.
    SceneListing,
    /// A room (hub).
    Room,
    SketchfabModel,
    PolyModel,
    TwitchStream,
    /// An image search result; holds the source prefix of `<source>_image`.
    Image(String),
    /// Any other tag.
    Other(String),
}

impl EntryKind {
    /// Avatars and avatar listings use the tall portrait tile.
    pub fn is_avatar(&self) -> bool {
        matches!(self, Self::Avatar | Self::AvatarListing)
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }

    pub fn is_room(&self) -> bool {
        matches!(self, Self::Room)
    }

    /// The original tag string.
    pub fn as_tag(&self) -> String {
        String::from(self.clone())
    }
}

impl From<String> for EntryKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "avatar" => Self::Avatar,
            "avatar_listing" => Self::AvatarListing,
            "scene" => Self::Scene,
            "scene_listing" => Self::SceneListing,
            "room" => Self::Room,
            "sketchfab_model" => Self::SketchfabModel,
            "poly_model" => Self::PolyModel,
            "twitch_stream" => Self::TwitchStream,
            other => match other.strip_suffix("_image") {
                Some(source) => Self::Image(source.to_string()),
                None => Self::Other(s),
            },
        }
    }
}

impl From<&str> for EntryKind {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<EntryKind> for String {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Avatar => "avatar".into(),
            EntryKind::AvatarListing => "avatar_listing".into(),
            EntryKind::Scene => "scene".into(),
            EntryKind::SceneListing => "scene_listing".into(),
            EntryKind::Room => "room".into(),
            EntryKind::SketchfabModel => "sketchfab_model".into(),
            EntryKind::PolyModel => "poly_model".into(),
            EntryKind::TwitchStream => "twitch_stream".into(),
            EntryKind::Image(source) => format!("{source}_image"),
            EntryKind::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Who made an entry. The API sends either a bare name or a profile object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Creator {
    Plain(String),
    Profile {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    /// Anything else the API might send; treated as absent.
    Unknown(serde_json::Value),
}

/// Where an entry was published.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publisher {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Creator>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
}

/// A browsable tile in the media browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: EntryKind,

    #[serde(default)]
    pub images: MediaImages,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributions: Option<Attributions>,

    #[serde(default)]
    pub allow_remixing: bool,

    /// Editor project backing a scene, if the viewer owns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    #[serde(default)]
    pub favorited: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_size: Option<u32>,
}

impl Entry {
    /// Create a bare entry of the given kind. Mostly useful in tests.
    pub fn new(id: impl Into<String>, kind: impl Into<EntryKind>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            kind: kind.into(),
            images: MediaImages::default(),
            url: None,
            description: None,
            attributions: None,
            allow_remixing: false,
            project_id: None,
            favorited: false,
            last_activated_at: None,
            member_count: None,
            room_size: None,
        }
    }

    /// Aspect ratio of the preview, if it can be computed.
    pub fn preview_aspect(&self) -> Option<f64> {
        self.images.preview.as_ref().and_then(|p| p.aspect())
    }

    pub fn creator(&self) -> Option<&Creator> {
        self.attributions.as_ref().and_then(|a| a.creator.as_ref())
    }

    pub fn publisher(&self) -> Option<&Publisher> {
        self.attributions.as_ref().and_then(|a| a.publisher.as_ref())
    }
}
