//! `roomdeck nav` — Show header and footer navigation.

use roomdeck_config::SiteConfig;
use roomdeck_lobby::{NavLink, footer, header_links};
use serde_json::json;

fn describe(link: &NavLink) -> String {
    let tab = if link.new_tab { "  ↗" } else { "" };
    format!("{:<20} {}{tab}", link.label, link.href)
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let header = header_links(&config);
    let footer = footer(&config);

    if json {
        let out = json!({ "header": header, "footer": footer });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("🧭 Header");
    for link in &header {
        println!("   {}", describe(link));
    }

    println!();
    println!("🧭 Footer");
    if let Some(powered_by) = &footer.powered_by {
        println!("   {}", describe(powered_by));
    }
    for link in &footer.links {
        println!("   {}", describe(link));
    }
    if let Some(logo) = &footer.company_logo {
        println!("   logo                 {logo}");
    }
    Ok(())
}
