//! `roomdeck tile` — Compute tile dimensions for a viewport.

use roomdeck_tiles::{Breakpoint, compute_tile_size};

pub fn run(
    width: u32,
    image: bool,
    avatar: bool,
    aspect: Option<f64>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let dims = compute_tile_size(width, image, avatar, aspect)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dims)?);
        return Ok(());
    }

    let breakpoint = Breakpoint::for_width(width);
    println!("📐 {dims}");
    println!(
        "   Breakpoint: {breakpoint:?} (base height {})",
        breakpoint.base_height()
    );
    Ok(())
}
