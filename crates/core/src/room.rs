//! Room records as served by the platform's public room listing.

use serde::{Deserialize, Deserializer, Serialize};

/// A preview image (or clip) attached to a room or entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaPreview {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Media type of the preview, e.g. `"png"` or `"mp4"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl MediaPreview {
    /// Source width over height, when both are known and the height is non-zero.
    pub fn aspect(&self) -> Option<f64> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if h > 0 => Some(f64::from(w) / f64::from(h)),
            _ => None,
        }
    }

    /// Whether the preview is a video clip rather than a still image.
    pub fn is_video(&self) -> bool {
        self.media_type.as_deref() == Some("mp4")
    }
}

/// The `images` block of a room or entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<MediaPreview>,
}

/// A joinable session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,

    /// Display name. Conference rooms use `"<group> | <room>"`.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<MediaImages>,

    /// Users currently inside the room.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub member_count: u32,

    /// Users waiting in the room's lobby.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub lobby_count: u32,

    /// Configured capacity.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub room_size: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<serde_json::Value>,
}

/// Counters the listing sometimes sends as `null`.
fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

impl Room {
    /// Create a room with just an id and a name. Mostly useful in tests.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            images: None,
            member_count: 0,
            lobby_count: 0,
            room_size: 0,
            url: None,
            user_data: None,
        }
    }

    /// URL of the room's preview image, if it has one.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|images| images.preview.as_ref())
            .map(|preview| preview.url.as_str())
    }
}
