use reqwest::Method;
use serde::Deserialize;
use tracing::instrument;

use crate::api;
use crate::error::Result;
use crate::model::{Ack, Operation, SchedulerStatus};

#[derive(Deserialize)]
struct StatusEnvelope {
    #[serde(default)]
    data: SchedulerStatus,
}

#[instrument(skip(client))]
pub(crate) async fn get_status(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<SchedulerStatus> {
    let envelope: Option<StatusEnvelope> = api::call(
        client,
        base_url,
        Method::GET,
        "/scheduler/status",
        None::<&()>,
        Operation::GetSchedulerStatus,
    )
    .await?;
    Ok(envelope.map(|e| e.data).unwrap_or_default())
}

#[instrument(skip(client))]
pub(crate) async fn start(client: &reqwest::Client, base_url: &str) -> Result<Ack> {
    control(client, base_url, "/scheduler/start", Operation::StartScheduler).await
}

#[instrument(skip(client))]
pub(crate) async fn stop(client: &reqwest::Client, base_url: &str) -> Result<Ack> {
    control(client, base_url, "/scheduler/stop", Operation::StopScheduler).await
}

#[instrument(skip(client))]
pub(crate) async fn trigger(client: &reqwest::Client, base_url: &str) -> Result<Ack> {
    control(client, base_url, "/scheduler/trigger", Operation::TriggerManualScraping).await
}

async fn control(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    operation: Operation,
) -> Result<Ack> {
    api::call(client, base_url, Method::POST, path, None::<&()>, operation).await
}
