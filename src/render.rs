//! Plain-text rendering of listings for the terminal.

use std::fmt;

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::listing::{EventListing, LoadState, PageItem, Platform, SortKey};
use crate::model::{parse_date, Event};

/// Description length shown on a card before it is cut.
pub const DESCRIPTION_LIMIT: usize = 150;

/// Tags shown on a card.
const CARD_TAGS: usize = 3;

const RULE: &str = "------------------------------------------------------------";

/// Short month/day/year (`Mar 5, 2025`), the raw value if it does not parse,
/// `TBA` if absent.
pub fn format_date(raw: Option<&str>) -> String {
    match raw {
        None => "TBA".to_string(),
        Some(raw) if raw.trim().is_empty() => "TBA".to_string(),
        Some(raw) => parse_date(raw)
            .map(|date| date.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// Cut `description` to [`DESCRIPTION_LIMIT`] characters, marking the cut with `...`.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_LIMIT {
        let head: String = description.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{head}...")
    } else {
        description.to_string()
    }
}

/// A single listing as a card.
pub struct EventCard<'a>(pub &'a Event);

impl fmt::Display for EventCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = self.0;

        let host = event.hosted_by.as_deref().unwrap_or_default().to_uppercase();
        if event.verified {
            writeln!(f, "[{host}]  (Verified)")?;
        } else {
            writeln!(f, "[{host}]")?;
        }
        writeln!(f, "{}", event.title())?;

        if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(f, "  {}", truncate_description(description))?;
        }

        let labels = event
            .kind
            .iter()
            .chain(event.tags.iter().take(CARD_TAGS))
            .map(|label| format!("#{label}"))
            .join(" ");
        if !labels.is_empty() {
            writeln!(f, "  {labels}")?;
        }

        writeln!(f, "  Start Date: {}", format_date(event.start_date.as_deref()))?;
        if event.end_date.as_deref().is_some_and(|d| !d.is_empty()) {
            writeln!(f, "  End Date:   {}", format_date(event.end_date.as_deref()))?;
        }
        if event.deadline.as_deref().is_some_and(|d| !d.is_empty()) {
            writeln!(f, "  Deadline:   {}", format_date(event.deadline.as_deref()))?;
        }
        if let Some(url) = event.redirect_url.as_deref() {
            writeln!(f, "  Join Event: {url}")?;
        }
        Ok(())
    }
}

/// Cards separated by rules.
pub struct EventCards<'a>(pub &'a [&'a Event]);

impl fmt::Display for EventCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in self.0 {
            writeln!(f, "{RULE}")?;
            write!(f, "{}", EventCard(event))?;
        }
        if !self.0.is_empty() {
            writeln!(f, "{RULE}")?;
        }
        Ok(())
    }
}

/// The listing page: filters, the current page of cards, pagination bar.
pub struct ListingPage<'a>(pub &'a EventListing);

impl ListingPage<'_> {
    fn filters(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listing = self.0;
        let view = listing.view();
        let counts = listing.platform_counts();

        let platforms = Platform::iter()
            .map(|p| {
                let marker = if p == view.platform { "*" } else { " " };
                format!("{marker}{} ({})", p.label(), counts.get(p))
            })
            .join("  ");
        writeln!(f, "Platform: {platforms}")?;

        let sorts = SortKey::iter()
            .map(|s| {
                let marker = if s == view.sort { "*" } else { " " };
                format!("{marker}{}", s.label())
            })
            .join("  ");
        writeln!(f, "Sort:     {sorts}")?;

        write!(
            f,
            "{} of {} events",
            listing.filtered_len(),
            listing.events().len()
        )?;
        if !view.search.is_empty() {
            write!(f, " for \"{}\"", view.search)?;
        }
        writeln!(f)
    }

    fn pagination(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listing = self.0;
        let Some(showing) = listing.showing() else {
            return Ok(());
        };
        writeln!(
            f,
            "Showing {} to {} of {} events",
            showing.first, showing.last, showing.total
        )?;

        let current = listing.current_page();
        let pages = listing
            .page_numbers()
            .into_iter()
            .map(|item| match item {
                PageItem::Page(page) if page == current => format!("[{page}]"),
                PageItem::Page(page) => page.to_string(),
                PageItem::Ellipsis => "...".to_string(),
            })
            .join(" ");
        let prev = if current > 1 { "< prev" } else { "      " };
        let next = if current < listing.total_pages() {
            "next >"
        } else {
            ""
        };
        writeln!(f, "{prev}  {pages}  {next}")
    }
}

impl fmt::Display for ListingPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listing = self.0;
        writeln!(f, "Latest Events")?;
        writeln!(
            f,
            "Handpicked hackathons and coding events from Devfolio, Unstop, and Devpost"
        )?;
        writeln!(f)?;

        match listing.state() {
            LoadState::Loading => return writeln!(f, "Loading events..."),
            LoadState::Error(message) => {
                writeln!(f, "Oops! Something went wrong")?;
                writeln!(f, "{message}")?;
                return writeln!(f, "Try again with `refresh`.");
            }
            LoadState::Ready => {}
        }

        if listing.events().is_empty() {
            writeln!(f, "No events available")?;
            return writeln!(f, "Check back later for new events.");
        }

        self.filters(f)?;

        let page = listing.page_events();
        if page.is_empty() {
            writeln!(f)?;
            writeln!(f, "No events match your filters")?;
            return writeln!(f, "Try adjusting your search or use `clear` to reset the filters.");
        }

        write!(f, "{}", EventCards(&page))?;
        if listing.is_paginated() {
            self.pagination(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(events: Vec<Event>) -> EventListing {
        let mut listing = EventListing::new();
        let ticket = listing.begin_refresh();
        listing.complete_fetch(ticket, Ok(events));
        listing
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2025-03-05")), "Mar 5, 2025");
        assert_eq!(format_date(Some("2024-12-25T18:30:00Z")), "Dec 25, 2024");
        assert_eq!(format_date(Some("Rolling")), "Rolling");
        assert_eq!(format_date(Some("")), "TBA");
        assert_eq!(format_date(None), "TBA");
    }

    #[test]
    fn test_truncate_description() {
        let short = "A weekend of building.";
        assert_eq!(truncate_description(short), short);

        let exact = "x".repeat(DESCRIPTION_LIMIT);
        assert_eq!(truncate_description(&exact), exact);

        let long = "é".repeat(DESCRIPTION_LIMIT + 20);
        let cut = truncate_description(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), DESCRIPTION_LIMIT + 3);
    }

    #[test]
    fn test_card_shows_optional_sections_only_when_present() {
        let event = Event {
            title: Some("ETHIndia".to_string()),
            hosted_by: Some("Devfolio".to_string()),
            kind: Some("Hackathon".to_string()),
            tags: ["web3", "defi", "zk", "l2"].map(String::from).to_vec(),
            verified: true,
            redirect_url: Some("https://ethindia.co".to_string()),
            ..Default::default()
        };
        let card = EventCard(&event).to_string();

        assert!(card.contains("[DEVFOLIO]  (Verified)"));
        assert!(card.contains("#Hackathon #web3 #defi #zk"));
        assert!(!card.contains("#l2"));
        assert!(card.contains("Start Date: TBA"));
        assert!(!card.contains("End Date"));
        assert!(!card.contains("Deadline"));
        assert!(card.contains("Join Event: https://ethindia.co"));
    }

    #[test]
    fn test_listing_page_states() {
        let listing = EventListing::new();
        assert!(ListingPage(&listing).to_string().contains("Loading events..."));

        let mut listing = EventListing::new();
        let ticket = listing.begin_refresh();
        listing.complete_fetch(
            ticket,
            Err(crate::Error::Api {
                operation: crate::model::Operation::GetEvents,
                message: "Network Error".to_string(),
            }),
        );
        let page = ListingPage(&listing).to_string();
        assert!(page.contains("Oops! Something went wrong"));
        assert!(page.contains("Network Error"));

        let listing = loaded(Vec::new());
        assert!(ListingPage(&listing).to_string().contains("No events available"));
    }

    #[test]
    fn test_listing_page_with_pagination() {
        let events: Vec<Event> = (0..12)
            .map(|i| Event {
                title: Some(format!("Hack {i:02}")),
                hosted_by: Some("Devpost".to_string()),
                ..Default::default()
            })
            .collect();
        let mut listing = loaded(events);
        listing.set_search("hack");

        let page = ListingPage(&listing).to_string();
        assert!(page.contains("12 of 12 events for \"hack\""));
        assert!(page.contains("*All Platforms (12)"));
        assert!(page.contains(" Devpost (12)"));
        assert!(page.contains("Showing 1 to 9 of 12 events"));
        assert!(page.contains("[1] 2  next >"));
        assert!(page.contains("Hack 08"));
        assert!(!page.contains("Hack 09"));

        listing.set_search("nope");
        let page = ListingPage(&listing).to_string();
        assert!(page.contains("No events match your filters"));
        assert!(!page.contains("Showing"));
    }
}
