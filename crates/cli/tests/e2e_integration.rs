//! End-to-end integration tests for the roomdeck pipeline.
//!
//! These tests run feeds through every stage the landing page and the media
//! browser use: parsing, grouping, reveal, availability, tile sizing,
//! affordances, actions, attribution, presence and navigation.

use chrono::{Duration, TimeZone, Utc};
use roomdeck_config::SiteConfig;
use roomdeck_core::{Entry, Feed, Room};
use roomdeck_lobby::{
    RevealPolicy, RevealState, RoomAvailability, availability, footer, group_rooms, group_view,
    header_links, make_slug, occupancy_label,
};
use roomdeck_tiles::{
    Affordance, CreateTileKind, CreatorLabel, EntryAction, MediaSource, PageStep, PagerState,
    PolicyContext, Thumbnail, TileDimensions, action_for, affordances_for, attribution_text,
    create_tile, presence, tile_size_for_entry,
};

// ── Fixtures ─────────────────────────────────────────────────────────────

const ROOM_FEED: &str = r#"[
    {"id": "h-b", "name": "Track 1 | Hall B", "room_size": 20},
    {"id": "h-a", "name": "Track 1 | Hall A", "description": "Keynotes",
     "member_count": 3, "room_size": 20,
     "images": {"preview": {"url": "https://cdn.example/track1.png"}}},
    {"id": "plen", "name": "Plenary", "member_count": 48, "lobby_count": 2, "room_size": 60},
    {"id": "h-e", "name": "Track 1 | Hall E", "room_size": 20},
    {"id": "ws-1", "name": "Workshop | Room 1", "member_count": 10, "room_size": 10},
    {"id": "h-d", "name": "Track 1 | Hall D", "room_size": 20},
    {"id": "h-c", "name": "Track 1 | Hall C", "room_size": 20}
]"#;

const ENTRY_FEED: &str = r#"{"entries": [
    {"id": "al1", "type": "avatar_listing", "name": "Robot", "allow_remixing": true,
     "images": {"preview": {"url": "https://cdn.example/robot.png", "width": 300, "height": 533}}},
    {"id": "sk1", "type": "sketchfab_model", "name": "Chair",
     "attributions": {"creator": {"name": "Ana", "url": "https://sketchfab.example/ana"}},
     "images": {"preview": {"url": "https://cdn.example/chair.jpg"}}},
    {"id": "img1", "type": "bing_image", "name": "Sunset",
     "images": {"preview": {"url": "https://cdn.example/sunset.jpg", "width": 800, "height": 400}}},
    {"id": "img2", "type": "bing_image", "name": "Broken",
     "images": {"preview": {"url": "https://cdn.example/broken.jpg"}}},
    {"id": "clip", "type": "scene", "name": "Intro", "project_id": "p7",
     "images": {"preview": {"url": "https://cdn.example/intro.mp4", "type": "mp4"}}},
    {"id": "sc9", "type": "scene_listing", "name": "Forest", "allow_remixing": true,
     "attributions": {"creator": "Sam", "publisher": {"name": "Hubs"}}},
    {"id": "r1", "type": "room", "name": "Atrium", "description": "Meet here",
     "member_count": 4, "room_size": 24, "favorited": true,
     "last_activated_at": "2020-06-22T11:50:00Z"},
    {"id": "tw1", "type": "twitch_stream", "name": ""}
]}"#;

fn rooms() -> Vec<Room> {
    Feed::<Room>::from_json(ROOM_FEED).unwrap()
}

fn entries() -> Vec<Entry> {
    Feed::<Entry>::from_json(ENTRY_FEED).unwrap()
}

fn entry<'a>(entries: &'a [Entry], id: &str) -> &'a Entry {
    entries.iter().find(|e| e.id == id).unwrap()
}

// ── Lobby ────────────────────────────────────────────────────────────────

#[test]
fn e2e_lobby_groups_sorted_by_name() {
    let groups = group_rooms(&rooms());
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Plenary", "Track 1", "Workshop"]);

    let track = &groups[1];
    let halls: Vec<&str> = track.rooms.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(halls, ["Hall A", "Hall B", "Hall C", "Hall D", "Hall E"]);
    assert_eq!(track.slug(), "track-1");
    assert_eq!(track.member_count(), 3);
    assert_eq!(track.description.as_deref(), Some("Keynotes"));
    assert_eq!(track.thumbnail.as_deref(), Some("https://cdn.example/track1.png"));

    let total: usize = groups.iter().map(|g| g.rooms.len()).sum();
    assert_eq!(total, 7);
}

#[test]
fn e2e_lobby_collapsed_track_reveals_on_expand() {
    let config = SiteConfig::default();
    let policy = RevealPolicy::from_config(&config.lobby);
    let groups = group_rooms(&rooms());
    let track = groups.iter().find(|g| g.name == "Track 1").unwrap();

    let mut state = RevealState::new();
    let collapsed = group_view(track, &state, &policy);
    assert!(!collapsed.open);
    assert!(collapsed.show_more);
    assert_eq!(collapsed.rooms.len(), 4);
    assert_eq!(collapsed.hidden, 1);
    assert!(collapsed.rooms.iter().all(|r| r.id != "h-e"));

    assert!(state.expand(make_slug(&track.name)));
    let expanded = group_view(track, &state, &policy);
    assert!(expanded.open);
    assert!(!expanded.show_more);
    assert_eq!(expanded.rooms.len(), 5);

    let plenary = groups.iter().find(|g| g.name == "Plenary").unwrap();
    assert!(group_view(plenary, &RevealState::new(), &policy).open);
}

#[test]
fn e2e_lobby_availability_follows_config_cap() {
    let groups = group_rooms(&rooms());
    let all: Vec<&Room> = groups.iter().flat_map(|g| g.rooms.iter()).collect();
    let find = |id: &str| *all.iter().find(|r| r.id == id).unwrap();

    let config = SiteConfig::default();
    let cap = config.lobby.max_room_cap;
    assert_eq!(availability(find("plen"), cap), RoomAvailability::Full);
    assert_eq!(availability(find("ws-1"), cap), RoomAvailability::Spectate);
    assert_eq!(availability(find("h-a"), cap), RoomAvailability::Join);
    assert_eq!(occupancy_label(find("h-a")), "3 / 20");

    let tight = SiteConfig::from_toml("[lobby]\nmax_room_cap = 3\n").unwrap();
    assert_eq!(
        availability(find("h-a"), tight.lobby.max_room_cap),
        RoomAvailability::Full
    );
}

// ── Media browser ────────────────────────────────────────────────────────

#[test]
fn e2e_tiles_sized_per_kind() {
    let entries = entries();
    let size = |id: &str| tile_size_for_entry(1280, entry(&entries, id));

    assert_eq!(size("al1").unwrap(), TileDimensions { width: 168, height: 300 });
    assert_eq!(size("sk1").unwrap(), TileDimensions { width: 355, height: 200 });
    assert_eq!(size("img1").unwrap(), TileDimensions { width: 400, height: 200 });
    assert!(size("img2").is_err());

    let narrow = tile_size_for_entry(360, entry(&entries, "sk1")).unwrap();
    assert_eq!(narrow, TileDimensions { width: 151, height: 85 });
}

#[test]
fn e2e_tiles_video_previews_play_inline() {
    let entries = entries();
    let clip = entry(&entries, "clip");
    let dims = tile_size_for_entry(1280, clip).unwrap();
    let thumbnail = Thumbnail::for_preview(clip.images.preview.as_ref().unwrap(), dims);
    assert!(matches!(thumbnail, Thumbnail::Video { .. }));
    assert_eq!(thumbnail.src(), "https://cdn.example/intro.mp4");
}

#[test]
fn e2e_tiles_affordances_drive_actions() {
    let entries = entries();
    let context = PolicyContext::default();

    let robot = entry(&entries, "al1");
    let actions: Vec<EntryAction> = affordances_for(robot, &context)
        .iter()
        .filter_map(|a| action_for(robot, a))
        .collect();
    assert_eq!(
        actions,
        [
            EntryAction::RemixAvatar {
                avatar_id: "al1".into(),
                name: "Robot".into()
            },
            EntryAction::ShowSimilar {
                id: "al1".into(),
                name: "Robot".into()
            },
        ]
    );

    let clip = entry(&entries, "clip");
    assert_eq!(
        action_for(clip, Affordance::Edit),
        Some(EntryAction::OpenExternal {
            href: "/spoke/projects/p7".into()
        })
    );

    let forest = entry(&entries, "sc9");
    let action = action_for(forest, Affordance::Clone).unwrap();
    assert_eq!(action.title(), "Copy to my scenes");
}

#[test]
fn e2e_tiles_room_info_needs_a_handler() {
    let entries = entries();
    let room = entry(&entries, "r1");

    let with_handler = affordances_for(room, &PolicyContext::default());
    assert!(with_handler.contains(Affordance::Info));
    assert!(with_handler.contains(Affordance::Favorite));

    let without = affordances_for(room, &PolicyContext { info_handler: false });
    assert!(!without.contains(Affordance::Info));
    assert!(without.contains(Affordance::Favorite));
}

#[test]
fn e2e_tiles_attribution_and_presence() {
    let entries = entries();

    let chair = attribution_text(entry(&entries, "sk1")).unwrap();
    assert_eq!(
        chair.creator,
        Some(CreatorLabel::Linked {
            name: "Ana".into(),
            url: "https://sketchfab.example/ana".into()
        })
    );
    assert_eq!(chair.publisher_name.as_deref(), Some("Sketchfab"));

    let forest = attribution_text(entry(&entries, "sc9")).unwrap();
    assert_eq!(forest.creator.as_ref().map(|c| c.name()), Some("Sam"));
    assert_eq!(forest.publisher_name.as_deref(), Some("Hubs"));

    let stream = attribution_text(entry(&entries, "tw1")).unwrap();
    assert!(stream.creator.is_none());
    assert_eq!(stream.publisher_name.as_deref(), Some("Twitch"));

    assert!(attribution_text(entry(&entries, "r1")).is_none());
    assert!(attribution_text(entry(&entries, "al1")).is_none());

    let now = Utc.with_ymd_and_hms(2020, 6, 22, 12, 0, 0).unwrap();
    let room = presence(entry(&entries, "r1"), now).unwrap();
    assert_eq!(room.occupancy, "4/24");
    assert_eq!(room.last_joined.as_deref(), Some("10 minutes ago"));
    assert!(presence(entry(&entries, "sk1"), now + Duration::days(1)).is_none());
}

#[test]
fn e2e_listing_create_tile_and_pager() {
    let avatars = create_tile(&MediaSource::from("avatars"), 1280, &SiteConfig::default().features)
        .unwrap();
    assert_eq!(avatars.kind, CreateTileKind::CreateAvatar);
    assert_eq!(avatars.size, TileDimensions { width: 168, height: 300 });

    let spoke = SiteConfig::from_toml("[features]\nenable_spoke = true\n").unwrap();
    let scenes = create_tile(&MediaSource::from("scenes"), 1280, &spoke.features).unwrap();
    assert_eq!(scenes.href(), Some("/spoke/new"));

    let pager = PagerState::new(1, true, false);
    assert!(pager.is_visible());
    assert_eq!(pager.step(PageStep::Next), Some(2));
    assert_eq!(pager.step(PageStep::Previous), None);
}

// ── Navigation ───────────────────────────────────────────────────────────

#[test]
fn e2e_nav_default_site() {
    let config = SiteConfig::default();
    let labels: Vec<&str> = header_links(&config).iter().map(|l| l.label).collect();
    assert_eq!(
        labels,
        [
            "home.home_link",
            "home.source_link",
            "home.community_link",
            "home.docs_link",
        ]
    );

    let footer = footer(&config);
    assert!(footer.powered_by.is_some());
    assert_eq!(footer.links.len(), 2);
    assert!(footer.links.iter().all(|l| l.new_tab));
    assert!(footer.company_logo.is_none());
}

#[test]
fn e2e_nav_with_overrides() {
    let config = SiteConfig::from_toml(
        r#"
[features]
enable_spoke = true
hide_powered_by = true
show_company_logo = true

[links]
docs = "https://docs.example/"

[images]
company_logo = "https://cdn.example/logo.png"
"#,
    )
    .unwrap();

    let header = header_links(&config);
    assert!(header.iter().any(|l| l.label == "editor-name" && l.href == "/spoke"));
    let docs = header.iter().find(|l| l.label == "home.docs_link").unwrap();
    assert_eq!(docs.href, "https://docs.example/");

    let footer = footer(&config);
    assert!(footer.powered_by.is_none());
    assert_eq!(
        footer.company_logo.as_deref(),
        Some("https://cdn.example/logo.png")
    );
}
