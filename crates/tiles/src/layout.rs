//! Responsive tile sizing.
//!
//! Tiles share one height per viewport breakpoint so rows line up; widths
//! follow the content's aspect. Avatars use a tall portrait tile, image
//! results their own aspect, everything else assumes 16:9.

use roomdeck_core::{Entry, LayoutError, MediaPreview};
use serde::Serialize;
use tracing::warn;

/// Viewport width classes, by inclusive lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    /// Below 400px.
    Compact,
    /// 400px up to 768px.
    Small,
    /// 768px up to 1079px.
    Medium,
    /// 1079px and wider.
    Large,
}

impl Breakpoint {
    pub fn for_width(viewport_width: u32) -> Self {
        match viewport_width {
            0..400 => Self::Compact,
            400..768 => Self::Small,
            768..1079 => Self::Medium,
            _ => Self::Large,
        }
    }

    /// Tile height before the avatar stretch.
    pub fn base_height(self) -> u32 {
        match self {
            Self::Compact => 85,
            Self::Small => 100,
            Self::Medium => 150,
            Self::Large => 200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileDimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for TileDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

const AVATAR_STRETCH: f64 = 1.5;
const MIN_WIDTH_RATIO: f64 = 0.85;
const PORTRAIT: f64 = 9.0 / 16.0;
const WIDESCREEN: f64 = 16.0 / 9.0;

/// Compute tile dimensions.
///
/// `image_aspect` (source width / height) is required when `is_image` is set
/// and ignored otherwise. A missing, non-finite or non-positive aspect for an
/// image tile is a [`LayoutError::InvalidArgument`], as is one so large the
/// width does not fit in a `u32`.
pub fn compute_tile_size(
    viewport_width: u32,
    is_image: bool,
    is_avatar: bool,
    image_aspect: Option<f64>,
) -> Result<TileDimensions, LayoutError> {
    let mut height = Breakpoint::for_width(viewport_width).base_height();
    if is_avatar {
        height = (f64::from(height) * AVATAR_STRETCH).floor() as u32;
    }
    let h = f64::from(height);

    let width = if is_image {
        let aspect = match image_aspect {
            Some(a) if a.is_finite() && a > 0.0 => a,
            Some(a) => {
                return Err(LayoutError::InvalidArgument(format!(
                    "image aspect ratio must be finite and positive, got {a}"
                )));
            }
            None => {
                return Err(LayoutError::InvalidArgument(
                    "image tiles need an aspect ratio".into(),
                ));
            }
        };
        (aspect * h).max(h * MIN_WIDTH_RATIO).floor()
    } else if is_avatar {
        (PORTRAIT * h).floor()
    } else {
        (WIDESCREEN * h).max(h * MIN_WIDTH_RATIO).floor()
    };

    if width > f64::from(u32::MAX) {
        return Err(LayoutError::InvalidArgument(format!(
            "image aspect ratio {} gives a tile wider than {} px",
            image_aspect.unwrap_or_default(),
            u32::MAX
        )));
    }

    Ok(TileDimensions {
        width: width as u32,
        height,
    })
}

/// Tile dimensions for an entry, taking image/avatar mode and the aspect
/// from the entry itself.
pub fn tile_size_for_entry(
    viewport_width: u32,
    entry: &Entry,
) -> Result<TileDimensions, LayoutError> {
    let aspect = entry.preview_aspect();
    if entry.kind.is_image() && aspect.is_none() {
        warn!(entry = %entry.id, "Image entry without usable preview dimensions");
    }
    compute_tile_size(
        viewport_width,
        entry.kind.is_image(),
        entry.kind.is_avatar(),
        aspect,
    )
}

/// How a tile's preview is painted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Thumbnail {
    /// Inline muted looping video; thumbnail services cannot resize clips,
    /// so the source is used as-is.
    Video {
        src: String,
        width: u32,
        height: u32,
    },
    /// Still image requested at the tile size.
    Image {
        src: String,
        width: u32,
        height: u32,
    },
}

impl Thumbnail {
    pub fn for_preview(preview: &MediaPreview, dims: TileDimensions) -> Self {
        let src = preview.url.clone();
        let TileDimensions { width, height } = dims;
        if preview.is_video() {
            Self::Video { src, width, height }
        } else {
            Self::Image { src, width, height }
        }
    }

    pub fn src(&self) -> &str {
        match self {
            Self::Video { src, .. } | Self::Image { src, .. } => src,
        }
    }
}
