use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::api;
use crate::error::Result;
use crate::model::{Ack, Event, Operation};

#[derive(Deserialize)]
struct SampleEvents {
    #[serde(default)]
    events: Option<Vec<Value>>,
}

/// Decode each record on its own, skipping the ones that are not listings.
fn listings(records: Vec<Value>) -> Vec<Event> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed listing");
                None
            }
        })
        .collect()
}

#[instrument(skip(client))]
pub(crate) async fn get_events(client: &reqwest::Client, base_url: &str) -> Result<Vec<Event>> {
    let records: Option<Vec<Value>> = api::call(
        client,
        base_url,
        Method::GET,
        "/events",
        None::<&()>,
        Operation::GetEvents,
    )
    .await?;
    let events = listings(records.unwrap_or_default());
    debug!(count = events.len(), "fetched events");
    Ok(events)
}

#[instrument(skip(client, event), fields(title = event.title()))]
pub(crate) async fn add_event(
    client: &reqwest::Client,
    base_url: &str,
    event: &Event,
) -> Result<Ack> {
    api::call(
        client,
        base_url,
        Method::POST,
        "/events",
        Some(event),
        Operation::AddEvent,
    )
    .await
}

#[instrument(skip(client))]
pub(crate) async fn scrape_events(client: &reqwest::Client, base_url: &str) -> Result<Ack> {
    api::call(
        client,
        base_url,
        Method::GET,
        "/events/scrape",
        None::<&()>,
        Operation::ScrapeEvents,
    )
    .await
}

#[instrument(skip(client))]
pub(crate) async fn get_sample_events(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<Event>> {
    let sample: Option<SampleEvents> = api::call(
        client,
        base_url,
        Method::GET,
        "/events/sample",
        None::<&()>,
        Operation::GetSampleEvents,
    )
    .await?;
    let events = listings(sample.and_then(|s| s.events).unwrap_or_default());
    debug!(count = events.len(), "fetched sample events");
    Ok(events)
}
