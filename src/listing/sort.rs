use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use feruca::Collator;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::model::Event;

/// Ordering applied to the filtered listings.
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
pub enum SortKey {
    /// Ending soon first, then most recently ended.
    #[default]
    Newest,
    /// Earliest start first.
    Oldest,
    /// Closest upcoming deadline first, then most recently passed.
    Deadline,
    Alphabetical,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Ending Soon",
            SortKey::Oldest => "Oldest First",
            SortKey::Deadline => "Deadline",
            SortKey::Alphabetical => "A-Z",
        }
    }
}

/// Comparator for `key`, with `now` splitting upcoming from past dates.
pub fn event_order(key: SortKey, now: DateTime<Utc>) -> impl FnMut(&Event, &Event) -> Ordering {
    let mut collator = Collator::default();
    move |a: &Event, b: &Event| match key {
        SortKey::Newest => ending_soon_order(a.ends_at(), b.ends_at(), now),
        SortKey::Oldest => dated_first(a.starts_at(), b.starts_at()),
        SortKey::Deadline => ending_soon_order(a.deadline_or_end(), b.deadline_or_end(), now),
        SortKey::Alphabetical => title_order(&mut collator, a, b),
    }
}

/// Stable in-place sort of `events` by `key`.
pub fn sort_events(events: &mut [&Event], key: SortKey, now: DateTime<Utc>) {
    let mut order = event_order(key, now);
    events.sort_by(|a, b| order(*a, *b));
}

/// Two-partition order on dates.
///
/// Dates on or after `now` come first, ascending. Dates before `now` come
/// next, descending. Missing dates come last.
pub fn ending_soon_order(
    a: Option<DateTime<Utc>>,
    b: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match (a >= now, b >= now) {
            (true, true) => a.cmp(&b),
            (false, false) => b.cmp(&a),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        },
        (a, b) => dated_first(a, b),
    }
}

/// Ascending by date, with missing dates last.
fn dated_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Title order under the Unicode collation algorithm (CLDR root), untitled
/// listings last.
///
/// Accents and case only break ties between otherwise equal titles, so
/// `École` sorts between `Alpha` and `Zeta` and `apple` precedes `Apple`.
/// Titles the collator ranks equal fall back to their exact text.
pub fn title_order(collator: &mut Collator, a: &Event, b: &Event) -> Ordering {
    match (a.title.as_deref(), b.title.as_deref()) {
        (Some(a), Some(b)) => collator.collate(a, b).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
