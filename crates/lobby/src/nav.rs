//! Header and footer navigation of the landing and docs pages.
//!
//! Every optional link is gated by a [`FeatureFlags`] switch; a few hrefs can
//! be replaced per deployment through `SiteConfig::links`.

use roomdeck_config::{FeatureFlags, SiteConfig};
use serde::Serialize;

const SOURCE_URL: &str = "https://github.com/mozilla/hubs";
const COMMUNITY_URL: &str = "https://conferences.fnal.gov/nu2020/contacts/";
const DOCS_URL: &str = "https://hubs.mozilla.com/docs";
const CLOUD_URL: &str = "https://hubs.mozilla.com/cloud";
const TERMS_URL: &str = "https://github.com/mozilla/hubs/blob/master/TERMS.md";
const PRIVACY_URL: &str = "https://github.com/mozilla/hubs/blob/master/PRIVACY.md";

/// One navigation link. `label` is a message id resolved by the i18n layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub new_tab: bool,
}

impl NavLink {
    fn new(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: href.into(),
            new_tab: false,
        }
    }

    fn in_new_tab(mut self) -> Self {
        self.new_tab = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// "Powered by" credit, unless hidden.
    pub powered_by: Option<NavLink>,
    pub links: Vec<NavLink>,
    /// Company logo image URL.
    pub company_logo: Option<String>,
}

/// Header links in display order.
pub fn header_links(config: &SiteConfig) -> Vec<NavLink> {
    let FeatureFlags {
        show_whats_new_link,
        show_source_link,
        show_community_link,
        enable_spoke,
        show_docs_link,
        show_cloud,
        ..
    } = config.features;

    let candidates = [
        (true, NavLink::new("home.home_link", "/")),
        (
            show_whats_new_link,
            NavLink::new("home.whats_new_link", "/whats-new"),
        ),
        (show_source_link, NavLink::new("home.source_link", SOURCE_URL)),
        (
            show_community_link,
            NavLink::new("home.community_link", config.link("community", COMMUNITY_URL)),
        ),
        (enable_spoke, NavLink::new("editor-name", "/spoke")),
        (
            show_docs_link,
            NavLink::new("home.docs_link", config.link("docs", DOCS_URL)),
        ),
        (show_cloud, NavLink::new("home.cloud_link", CLOUD_URL)),
    ];

    candidates
        .into_iter()
        .filter_map(|(enabled, link)| enabled.then_some(link))
        .collect()
}

pub fn footer(config: &SiteConfig) -> Footer {
    let features = &config.features;

    let powered_by =
        (!features.hide_powered_by).then(|| NavLink::new("home.powered_by_link", CLOUD_URL));

    let mut links = Vec::new();
    if features.show_terms {
        links.push(
            NavLink::new("home.terms_of_use", config.link("terms_of_use", TERMS_URL)).in_new_tab(),
        );
    }
    if features.show_privacy {
        links.push(
            NavLink::new("home.privacy_notice", config.link("privacy_notice", PRIVACY_URL))
                .in_new_tab(),
        );
    }

    let company_logo = if features.show_company_logo {
        config.image("company_logo").map(str::to_string)
    } else {
        None
    };

    Footer {
        powered_by,
        links,
        company_logo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(links: &[NavLink]) -> Vec<&'static str> {
        links.iter().map(|l| l.label).collect()
    }

    #[test]
    fn default_header() {
        let links = header_links(&SiteConfig::default());
        assert_eq!(
            labels(&links),
            vec!["home.home_link", "home.source_link", "home.community_link", "home.docs_link"]
        );
        assert_eq!(links[2].href, COMMUNITY_URL);
    }

    #[test]
    fn every_flag_on_keeps_order() {
        let mut config = SiteConfig::default();
        config.features.show_whats_new_link = true;
        config.features.enable_spoke = true;
        config.features.show_cloud = true;

        let links = header_links(&config);
        assert_eq!(
            labels(&links),
            vec![
                "home.home_link",
                "home.whats_new_link",
                "home.source_link",
                "home.community_link",
                "editor-name",
                "home.docs_link",
                "home.cloud_link",
            ]
        );
    }

    #[test]
    fn link_overrides_apply() {
        let mut config = SiteConfig::default();
        config
            .links
            .insert("docs".into(), "https://docs.conference.example".into());
        let links = header_links(&config);
        let docs = links.iter().find(|l| l.label == "home.docs_link").unwrap();
        assert_eq!(docs.href, "https://docs.conference.example");
    }

    #[test]
    fn default_footer() {
        let footer = footer(&SiteConfig::default());
        assert!(footer.powered_by.is_some());
        assert_eq!(labels(&footer.links), vec!["home.terms_of_use", "home.privacy_notice"]);
        assert!(footer.links.iter().all(|l| l.new_tab));
        assert!(footer.company_logo.is_none());
    }

    #[test]
    fn footer_respects_flags() {
        let mut config = SiteConfig::default();
        config.features.hide_powered_by = true;
        config.features.show_terms = false;
        config.features.show_company_logo = true;
        config
            .images
            .insert("company_logo".into(), "https://cdn/logo.png".into());

        let footer = footer(&config);
        assert!(footer.powered_by.is_none());
        assert_eq!(labels(&footer.links), vec!["home.privacy_notice"]);
        assert_eq!(footer.company_logo.as_deref(), Some("https://cdn/logo.png"));
    }
}
