//! `roomdeck config` — Configuration management commands.

use roomdeck_config::SiteConfig;

pub fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match SiteConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let mut warnings = Vec::new();

            if config.features.show_company_logo && config.image("company_logo").is_none() {
                warnings.push("show_company_logo is on but no images.company_logo is set");
            }

            if config.lobby.collapsed_group_prefixes.is_empty() {
                warnings.push("No collapsed group prefixes; every group card starts open");
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            let enabled: Vec<&str> = [
                "show_whats_new_link",
                "show_source_link",
                "show_community_link",
                "enable_spoke",
                "show_docs_link",
                "show_cloud",
                "hide_powered_by",
                "show_terms",
                "show_privacy",
                "show_company_logo",
            ]
            .into_iter()
            .filter(|name| config.features.is_enabled(name) == Some(true))
            .collect();

            println!();
            println!("   Room cap:  {}", config.lobby.max_room_cap);
            println!(
                "   Collapsed: {}",
                config.lobby.collapsed_group_prefixes.join(", ")
            );
            println!("   Features:  {}", enabled.join(", "));
            println!("   Links:     {}", config.links.len());
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub fn path() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = SiteConfig::config_dir().join("config.toml");
    println!("{}", config_path.display());
    Ok(())
}
