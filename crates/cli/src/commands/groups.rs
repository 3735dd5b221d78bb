//! `roomdeck groups` — Group a room feed into lobby cards.

use std::path::Path;

use roomdeck_config::SiteConfig;
use roomdeck_core::{Feed, Room};
use roomdeck_lobby::{
    RevealPolicy, RevealState, RoomAvailability, availability, group_rooms, group_view,
    occupancy_label,
};
use serde::Serialize;

#[derive(Serialize)]
struct CardReport<'a> {
    id: String,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<&'a str>,
    member_count: u32,
    open: bool,
    show_more: bool,
    hidden: usize,
    rooms: Vec<RoomLine<'a>>,
}

#[derive(Serialize)]
struct RoomLine<'a> {
    id: &'a str,
    name: &'a str,
    occupancy: String,
    availability: RoomAvailability,
}

pub fn run(file: &Path, expand: &[String], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let content = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {e}", file.display()))?;
    let rooms = Feed::<Room>::from_json(&content)?;
    tracing::debug!(rooms = rooms.len(), file = %file.display(), "Loaded room feed");

    let groups = group_rooms(&rooms);
    let policy = RevealPolicy::from_config(&config.lobby);
    let mut state = RevealState::new();
    for slug in expand {
        if !groups.iter().any(|g| g.slug() == *slug) {
            tracing::warn!(slug = %slug, "No group with this slug");
        }
        state.expand(slug.as_str());
    }

    let cap = config.lobby.max_room_cap;
    let cards: Vec<CardReport> = groups
        .iter()
        .map(|group| {
            let view = group_view(group, &state, &policy);
            CardReport {
                member_count: group.member_count(),
                rooms: view
                    .rooms
                    .iter()
                    .map(|&room| RoomLine {
                        id: &room.id,
                        name: &room.name,
                        occupancy: occupancy_label(room),
                        availability: availability(room, cap),
                    })
                    .collect(),
                id: view.id,
                name: view.name,
                description: view.description,
                thumbnail: view.thumbnail,
                open: view.open,
                show_more: view.show_more,
                hidden: view.hidden,
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    println!("🏛️  {} rooms in {} groups", rooms.len(), cards.len());
    for card in &cards {
        println!();
        let marker = if card.open { "▾" } else { "▸" };
        println!(
            "{marker} {}  [{}]  {} in rooms",
            card.name, card.id, card.member_count
        );
        if let Some(description) = card.description {
            println!("  {description}");
        }
        for room in &card.rooms {
            println!(
                "    {:<32} {:>9}  {}",
                room.name,
                room.occupancy,
                room.availability.label()
            );
        }
        if card.show_more {
            println!(
                "    … {} more (roomdeck groups {} --expand {})",
                card.hidden,
                file.display(),
                card.id
            );
        }
    }

    Ok(())
}
