use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::model::Event;

/// Tag that classifies a listing as coming from Unstop.
pub const UNSTOP_TAG: &str = "unstop";

/// Platform filter for the listing view.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    All,
    Devfolio,
    Unstop,
    Devpost,
}

impl Platform {
    /// Human-readable label for filter options.
    pub fn label(self) -> &'static str {
        match self {
            Platform::All => "All Platforms",
            Platform::Devfolio => "Devfolio",
            Platform::Unstop => "Unstop",
            Platform::Devpost => "Devpost",
        }
    }

    /// Whether `event` passes this filter.
    ///
    /// Unstop listings are recognised by tag, every other platform by the
    /// `hostedBy` field compared case-insensitively.
    pub fn matches(self, event: &Event) -> bool {
        match self {
            Platform::All => true,
            Platform::Unstop => event.has_tag(UNSTOP_TAG),
            platform => event.is_hosted_by(&platform.to_string()),
        }
    }
}

/// Case-insensitive substring match against title, description and tags.
/// An empty term matches everything.
pub fn matches_search(event: &Event, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    let contains = |text: &str| text.to_lowercase().contains(&needle);

    event.title.as_deref().is_some_and(contains)
        || event.description.as_deref().is_some_and(contains)
        || event.tags.iter().any(|tag| contains(tag))
}

/// Per-platform listing counts over the unfiltered collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlatformCounts {
    pub all: usize,
    pub devfolio: usize,
    pub unstop: usize,
    pub devpost: usize,
}

impl PlatformCounts {
    pub fn from_events(events: &[Event]) -> Self {
        let count = |platform: Platform| events.iter().filter(|e| platform.matches(e)).count();
        Self {
            all: events.len(),
            devfolio: count(Platform::Devfolio),
            unstop: count(Platform::Unstop),
            devpost: count(Platform::Devpost),
        }
    }

    pub fn get(&self, platform: Platform) -> usize {
        match platform {
            Platform::All => self.all,
            Platform::Devfolio => self.devfolio,
            Platform::Unstop => self.unstop,
            Platform::Devpost => self.devpost,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn event(title: &str, host: &str, tags: &[&str]) -> Event {
        Event {
            title: Some(title.to_string()),
            hosted_by: Some(host.to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_matches_title_description_and_tags() {
        let mut e = event("Smart India Hackathon", "Devfolio", &["GovTech"]);
        e.description = Some("Solve problem statements from ministries".to_string());

        assert!(matches_search(&e, ""));
        assert!(matches_search(&e, "india"));
        assert!(matches_search(&e, "MINISTRIES"));
        assert!(matches_search(&e, "govt"));
        assert!(!matches_search(&e, "devfolio"));
    }

    #[test]
    fn test_search_tolerates_missing_fields() {
        let e = Event::default();
        assert!(matches_search(&e, ""));
        assert!(!matches_search(&e, "a"));
    }

    #[test]
    fn test_unstop_filter_uses_tags_only() {
        let tagged = event("A", "Devfolio", &["unstop"]);
        let hosted = event("B", "Unstop", &[]);

        assert!(Platform::Unstop.matches(&tagged));
        assert!(!Platform::Unstop.matches(&hosted));
    }

    #[test]
    fn test_hosted_platforms_compare_case_insensitively() {
        let e = event("A", "DEVPOST", &[]);
        assert!(Platform::Devpost.matches(&e));
        assert!(!Platform::Devfolio.matches(&e));
        assert!(Platform::All.matches(&e));
        assert!(!Platform::Devpost.matches(&Event::default()));
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!(Platform::from_str("Devfolio").unwrap(), Platform::Devfolio);
        assert_eq!(Platform::from_str("all").unwrap(), Platform::All);
        assert!(Platform::from_str("mlh").is_err());
        assert_eq!(Platform::Unstop.to_string(), "unstop");
    }

    #[test]
    fn test_platform_counts() {
        let events = vec![
            event("A", "Devfolio", &[]),
            event("B", "devfolio", &["unstop"]),
            event("C", "Devpost", &[]),
            event("D", "Unstop", &["unstop"]),
            event("E", "MLH", &[]),
        ];
        let counts = PlatformCounts::from_events(&events);

        assert_eq!(
            counts,
            PlatformCounts {
                all: 5,
                devfolio: 2,
                unstop: 2,
                devpost: 1,
            }
        );
        assert_eq!(counts.get(Platform::Unstop), 2);
    }
}
