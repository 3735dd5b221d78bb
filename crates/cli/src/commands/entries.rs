//! `roomdeck entries` — Inspect how a media feed renders as tiles.

use std::path::Path;

use chrono::Utc;
use roomdeck_config::SiteConfig;
use roomdeck_core::{Entry, Feed};
use roomdeck_tiles::{
    AffordanceSet, Attribution, CreateTile, EntryAction, HubPresence, MediaSource,
    PolicyContext, Thumbnail, TileDimensions, action_for, affordances_for, attribution_text,
    create_tile, display_name, presence, tile_size_for_entry,
};
use serde::Serialize;

#[derive(Serialize)]
struct TileReport<'a> {
    id: &'a str,
    kind: String,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<TileDimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<Thumbnail>,
    affordances: AffordanceSet,
    actions: Vec<EntryAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribution: Option<Attribution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence: Option<HubPresence>,
    favorited: bool,
}

#[derive(Serialize)]
struct ListingReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    create: Option<CreateTile>,
    tiles: Vec<TileReport<'a>>,
}

fn report<'a>(entry: &'a Entry, width: u32, context: &PolicyContext) -> TileReport<'a> {
    let (size, error) = match tile_size_for_entry(width, entry) {
        Ok(dims) => (Some(dims), None),
        Err(e) => {
            tracing::warn!(entry = %entry.id, error = %e, "Tile cannot be sized");
            (None, Some(e.to_string()))
        }
    };
    let thumbnail = match (size, entry.images.preview.as_ref()) {
        (Some(dims), Some(preview)) => Some(Thumbnail::for_preview(preview, dims)),
        _ => None,
    };
    let affordances = affordances_for(entry, context);
    let actions = affordances
        .iter()
        .filter_map(|affordance| action_for(entry, affordance))
        .collect();

    TileReport {
        id: &entry.id,
        kind: entry.kind.to_string(),
        name: display_name(entry),
        size,
        error,
        thumbnail,
        affordances,
        actions,
        attribution: attribution_text(entry),
        presence: presence(entry, Utc::now()),
        favorited: entry.favorited,
    }
}

pub fn run(
    file: &Path,
    width: u32,
    source: Option<&str>,
    info_handler: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let content = std::fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {e}", file.display()))?;
    let entries = Feed::<Entry>::from_json(&content)?;
    tracing::debug!(entries = entries.len(), file = %file.display(), "Loaded entry feed");

    let context = PolicyContext { info_handler };
    let create = source.and_then(|s| create_tile(&MediaSource::from(s), width, &config.features));
    let listing = ListingReport {
        create,
        tiles: entries
            .iter()
            .map(|entry| report(entry, width, &context))
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("🖼️  {} entries at {width}px", listing.tiles.len());
    if let Some(create) = &listing.create {
        println!();
        println!("➕ {} ({})", create.label(), create.size);
        if let Some(href) = create.href() {
            println!("   → {href}");
        }
    }

    for tile in &listing.tiles {
        println!();
        let star = if tile.favorited { " ★" } else { "" };
        println!("▪ {} [{}]{star}", tile.name, tile.kind);
        match (&tile.size, &tile.error) {
            (Some(dims), _) => println!("   Size:        {dims}"),
            (None, Some(e)) => println!("   ❌ {e}"),
            (None, None) => {}
        }
        if let Some(thumbnail) = &tile.thumbnail {
            println!("   Preview:     {}", thumbnail.src());
        }
        if !tile.affordances.is_empty() {
            let names: Vec<String> = tile.affordances.iter().map(|a| a.to_string()).collect();
            println!("   Affordances: {}", names.join(", "));
        }
        for action in &tile.actions {
            println!("   {:<19}  {}", action.title(), serde_json::to_string(action)?);
        }
        if let Some(attribution) = &tile.attribution {
            let mut parts = Vec::new();
            if let Some(creator) = &attribution.creator {
                parts.push(format!("by {}", creator.name()));
            }
            if let Some(publisher) = &attribution.publisher_name {
                parts.push(format!("on {publisher}"));
            }
            println!("   Attribution: {}", parts.join(" "));
        }
        if let Some(presence) = &tile.presence {
            match &presence.last_joined {
                Some(when) => println!("   Presence:    {}, joined {when}", presence.occupancy),
                None => println!("   Presence:    {}", presence.occupancy),
            }
        }
    }

    Ok(())
}
