//! URL-fragment slugs for group cards.

use std::sync::LazyLock;

use regex_lite::Regex;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s_-]").expect("static slug pattern"));
static SPACE_OR_DASH_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("static slug pattern"));
static SPACE_OR_UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("static slug pattern"));

/// Turn a group name into an anchor id: `"Track A: Posters"` → `"track-a-posters"`.
pub fn make_slug(name: &str) -> String {
    let slug = name.to_lowercase();
    let slug = DISALLOWED.replace_all(&slug, "");
    let slug = SPACE_OR_DASH_RUN.replace_all(&slug, " ");
    SPACE_OR_UNDERSCORE_RUN.replace_all(&slug, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_names() {
        assert_eq!(make_slug("Lounge"), "lounge");
        assert_eq!(make_slug("Track A"), "track-a");
        assert_eq!(make_slug("Three Conference Streams"), "three-conference-streams");
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(make_slug("Track A: Posters!"), "track-a-posters");
        assert_eq!(make_slug("Q&A"), "qa");
    }

    #[test]
    fn dash_and_space_runs_collapse() {
        assert_eq!(make_slug("Poster - Session   1"), "poster-session-1");
    }

    #[test]
    fn underscores_become_dashes() {
        assert_eq!(make_slug("room_one__two"), "room-one-two");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(make_slug("Café Übersicht"), "caf-bersicht");
    }
}
