//! Creator and publisher line under a tile.

use roomdeck_core::{Creator, Entry, EntryKind};
use serde::Serialize;

/// How the creator is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CreatorLabel {
    Plain { name: String },
    Linked { name: String, url: String },
}

impl CreatorLabel {
    pub fn name(&self) -> &str {
        match self {
            Self::Plain { name } | Self::Linked { name, .. } => name,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Plain { .. } => None,
            Self::Linked { url, .. } => Some(url),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attribution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<CreatorLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
}

impl Attribution {
    pub fn is_empty(&self) -> bool {
        self.creator.is_none() && self.publisher_name.is_none()
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

/// Publisher shown for an entry: the attributed one, else the source's name.
pub fn publisher_name(entry: &Entry) -> Option<String> {
    if let Some(name) = entry.publisher().and_then(|p| non_empty(&p.name)) {
        return Some(name.to_string());
    }
    let fallback = match entry.kind {
        EntryKind::SketchfabModel => "Sketchfab",
        EntryKind::PolyModel => "Google Poly",
        EntryKind::TwitchStream => "Twitch",
        _ => return None,
    };
    Some(fallback.to_string())
}

fn creator_label(creator: &Creator) -> Option<CreatorLabel> {
    match creator {
        Creator::Plain(name) if !name.is_empty() => Some(CreatorLabel::Plain { name: name.clone() }),
        Creator::Profile { name, url } => {
            let name = non_empty(name)?.to_string();
            Some(match non_empty(url) {
                Some(url) => CreatorLabel::Linked {
                    name,
                    url: url.to_string(),
                },
                None => CreatorLabel::Plain { name },
            })
        }
        Creator::Plain(_) | Creator::Unknown(_) => None,
    }
}

/// Attribution line for an entry, or `None` when the tile shows none.
///
/// Rooms show presence instead, avatars show nothing, and image results have
/// no info block at all.
pub fn attribution_text(entry: &Entry) -> Option<Attribution> {
    if entry.kind.is_room() || entry.kind.is_avatar() || entry.kind.is_image() {
        return None;
    }

    Some(Attribution {
        creator: entry.creator().and_then(creator_label),
        publisher_name: publisher_name(entry),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomdeck_core::{Attributions, Publisher};

    fn attributed(kind: &str, creator: Option<Creator>, publisher: Option<&str>) -> Entry {
        let mut entry = Entry::new("e", kind);
        entry.attributions = Some(Attributions {
            creator,
            publisher: publisher.map(|name| Publisher {
                name: Some(name.into()),
                url: None,
            }),
        });
        entry
    }

    #[test]
    fn plain_string_creator() {
        let entry = attributed("scene_listing", Some(Creator::Plain("Jane".into())), None);
        let attribution = attribution_text(&entry).unwrap();
        assert_eq!(
            attribution.creator,
            Some(CreatorLabel::Plain { name: "Jane".into() })
        );
        assert!(attribution.publisher_name.is_none());
    }

    #[test]
    fn profile_without_url_is_plain() {
        let creator = Creator::Profile {
            name: Some("Jane".into()),
            url: None,
        };
        let attribution = attribution_text(&attributed("sketchfab_model", Some(creator), None)).unwrap();
        let label = attribution.creator.unwrap();
        assert_eq!(label.name(), "Jane");
        assert!(label.url().is_none());
    }

    #[test]
    fn profile_with_url_is_linked() {
        let creator = Creator::Profile {
            name: Some("Jane".into()),
            url: Some("https://sketchfab.example/jane".into()),
        };
        let attribution = attribution_text(&attributed("sketchfab_model", Some(creator), None)).unwrap();
        assert_eq!(
            attribution.creator,
            Some(CreatorLabel::Linked {
                name: "Jane".into(),
                url: "https://sketchfab.example/jane".into(),
            })
        );
    }

    #[test]
    fn nameless_creator_is_absent() {
        let creator = Creator::Profile {
            name: None,
            url: Some("https://x".into()),
        };
        let attribution = attribution_text(&attributed("scene", Some(creator), None)).unwrap();
        assert!(attribution.creator.is_none());
    }

    #[test]
    fn publisher_prefers_attribution() {
        let entry = attributed("sketchfab_model", None, Some("Museum"));
        assert_eq!(publisher_name(&entry).as_deref(), Some("Museum"));
    }

    #[test]
    fn publisher_falls_back_by_kind() {
        assert_eq!(publisher_name(&Entry::new("e", "sketchfab_model")).as_deref(), Some("Sketchfab"));
        assert_eq!(publisher_name(&Entry::new("e", "poly_model")).as_deref(), Some("Google Poly"));
        assert_eq!(publisher_name(&Entry::new("e", "twitch_stream")).as_deref(), Some("Twitch"));
        assert_eq!(publisher_name(&Entry::new("e", "scene_listing")), None);
    }

    #[test]
    fn empty_publisher_name_falls_through() {
        let entry = attributed("poly_model", None, Some(""));
        assert_eq!(publisher_name(&entry).as_deref(), Some("Google Poly"));
    }

    #[test]
    fn rooms_avatars_and_images_have_no_attribution() {
        for kind in ["room", "avatar", "avatar_listing", "bing_image"] {
            let entry = attributed(kind, Some(Creator::Plain("Jane".into())), Some("Hubs"));
            assert!(attribution_text(&entry).is_none(), "{kind} should suppress attribution");
        }
    }

    #[test]
    fn entry_without_attributions_has_empty_line() {
        let attribution = attribution_text(&Entry::new("e", "scene_listing")).unwrap();
        assert!(attribution.is_empty());
    }
}
