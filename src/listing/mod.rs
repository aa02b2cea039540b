//! Client-side view over the fetched listings: search, platform filter,
//! sort and pagination, plus the load state of the last fetch.

mod filter;
mod paginate;
mod sort;

use std::future::Future;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, warn};

pub use filter::*;
pub use paginate::*;
pub use sort::*;

use crate::error::Result;
use crate::model::Event;

/// Anything that can produce the full listing collection.
pub trait EventSource {
    fn fetch_events(&self) -> impl Future<Output = Result<Vec<Event>>> + Send;
}

/// Where the listing is in its fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LoadState {
    Loading,
    Error(String),
    Ready,
}

/// Identifies one fetch started with [`EventListing::begin_refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// User-controlled inputs of the listing view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub search: String,
    pub platform: Platform,
    pub sort: SortKey,
    /// 1-based.
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            platform: Platform::default(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

/// "Showing `first` to `last` of `total`", 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Showing {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

/// The listing view: owns the fetched collection and derives the visible page.
///
/// Any change to the collection, search term, platform or sort key recomputes
/// the filtered sequence and resets the current page to 1.
#[derive(Debug)]
pub struct EventListing {
    events: Vec<Event>,
    /// Indices into `events`, filtered and sorted.
    visible: Vec<usize>,
    view: ViewState,
    state: LoadState,
    latest_fetch: u64,
}

impl Default for EventListing {
    fn default() -> Self {
        Self::new()
    }
}

impl EventListing {
    /// An empty listing waiting for its first fetch.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            visible: Vec::new(),
            view: ViewState::default(),
            state: LoadState::Loading,
            latest_fetch: 0,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The full, unfiltered collection.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Enter `Loading` and hand out the ticket the result must be delivered with.
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.latest_fetch += 1;
        self.state = LoadState::Loading;
        FetchTicket(self.latest_fetch)
    }

    /// Apply the outcome of a fetch.
    ///
    /// Results for anything but the most recent ticket are dropped; returns
    /// whether the result was applied.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Event>>) -> bool {
        if ticket.0 != self.latest_fetch {
            debug!(
                ticket = ticket.0,
                latest = self.latest_fetch,
                "discarding stale fetch result"
            );
            return false;
        }

        match result {
            Ok(events) => {
                debug!(count = events.len(), "listing loaded");
                self.events = events;
                self.state = LoadState::Ready;
                self.recompute();
            }
            Err(e) => {
                warn!(error = %e, "error fetching events");
                self.state = LoadState::Error(e.to_string());
            }
        }
        true
    }

    /// Fetch the collection from `source` and apply it.
    pub async fn refresh<S: EventSource>(&mut self, source: &S) {
        let ticket = self.begin_refresh();
        let result = source.fetch_events().await;
        self.complete_fetch(ticket, result);
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.view.search != term {
            self.view.search = term;
            self.recompute();
        }
    }

    pub fn set_platform(&mut self, platform: Platform) {
        if self.view.platform != platform {
            self.view.platform = platform;
            self.recompute();
        }
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if self.view.sort != sort {
            self.view.sort = sort;
            self.recompute();
        }
    }

    /// Back to no search term, every platform, ending-soon order.
    pub fn clear_filters(&mut self) {
        let cleared = ViewState::default();
        if self.view.search != cleared.search
            || self.view.platform != cleared.platform
            || self.view.sort != cleared.sort
        {
            self.view = cleared;
            self.recompute();
        }
    }

    /// Jump to `page`, clamped to the available pages.
    pub fn go_to_page(&mut self, page: usize) {
        self.view.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn next_page(&mut self) {
        if self.view.page < self.total_pages() {
            self.view.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.view.page > 1 {
            self.view.page -= 1;
        }
    }

    pub fn current_page(&self) -> usize {
        self.view.page
    }

    /// Number of listings passing the current search and platform filter.
    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    /// The filtered, sorted sequence.
    pub fn filtered(&self) -> impl Iterator<Item = &Event> + '_ {
        self.visible.iter().map(|&i| &self.events[i])
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.visible.len())
    }

    /// Listings on the current page.
    pub fn page_events(&self) -> Vec<&Event> {
        page_slice(&self.visible, self.view.page)
            .iter()
            .map(|&i| &self.events[i])
            .collect()
    }

    pub fn page_numbers(&self) -> Vec<PageItem> {
        page_window(self.view.page, self.total_pages())
    }

    /// Whether the filtered sequence spans more than one page.
    pub fn is_paginated(&self) -> bool {
        self.visible.len() > PAGE_SIZE
    }

    pub fn showing(&self) -> Option<Showing> {
        let bounds = page_bounds(self.visible.len(), self.view.page);
        (!bounds.is_empty()).then(|| Showing {
            first: bounds.start + 1,
            last: bounds.end,
            total: self.visible.len(),
        })
    }

    pub fn platform_counts(&self) -> PlatformCounts {
        PlatformCounts::from_events(&self.events)
    }

    fn recompute(&mut self) {
        let events = &self.events;
        let view = &self.view;
        let mut visible: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| matches_search(e, &view.search) && view.platform.matches(e))
            .map(|(i, _)| i)
            .collect();

        let mut order = event_order(view.sort, Utc::now());
        visible.sort_by(|&a, &b| order(&events[a], &events[b]));

        self.visible = visible;
        self.view.page = 1;
    }
}
