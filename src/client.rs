use tracing::instrument;

use crate::api;
use crate::config::Config;
use crate::error::Result;
use crate::listing::EventSource;
use crate::model::*;

/// The main entry point for talking to the events service.
///
/// `EventHubClient` wraps a [`reqwest::Client`] and the service base URL and
/// exposes one method per remote endpoint. Each method issues a single
/// request: no retries, no caching, no timeout beyond what the wrapped
/// client is configured with.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> hackscope::Result<()> {
/// use hackscope::EventHubClient;
///
/// let client = EventHubClient::new("https://events.example.com")?;
/// let events = client.get_events().await?;
/// println!("Found {} events", events.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EventHubClient {
    http: reqwest::Client,
    base_url: String,
}

impl EventHubClient {
    /// Create a new client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::from_config(&Config::new(base_url)?))
    }

    /// Create a client for the service named by `config`, with a default
    /// [`reqwest::Client`].
    pub fn from_config(config: &Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            http: client,
            base_url: config.backend_url.clone(),
        }
    }

    /// The service base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every listing the service holds.
    #[instrument(skip(self))]
    pub async fn get_events(&self) -> Result<Vec<Event>> {
        api::events::get_events(&self.http, &self.base_url).await
    }

    /// Submit a new listing. Returns the server's acknowledgement.
    #[instrument(skip(self, event))]
    pub async fn add_event(&self, event: &Event) -> Result<Ack> {
        api::events::add_event(&self.http, &self.base_url, event).await
    }

    /// Ask the service to scrape its sources now and return what it found.
    #[instrument(skip(self))]
    pub async fn scrape_events(&self) -> Result<Ack> {
        api::events::scrape_events(&self.http, &self.base_url).await
    }

    /// Fetch the service's built-in sample listings.
    #[instrument(skip(self))]
    pub async fn get_sample_events(&self) -> Result<Vec<Event>> {
        api::events::get_sample_events(&self.http, &self.base_url).await
    }

    /// Fetch the scraping scheduler's state, unwrapped from its `data` envelope.
    #[instrument(skip(self))]
    pub async fn get_scheduler_status(&self) -> Result<SchedulerStatus> {
        api::scheduler::get_status(&self.http, &self.base_url).await
    }

    /// Start periodic scraping. Returns the server's acknowledgement.
    #[instrument(skip(self))]
    pub async fn start_scheduler(&self) -> Result<Ack> {
        api::scheduler::start(&self.http, &self.base_url).await
    }

    /// Stop periodic scraping. Returns the server's acknowledgement.
    #[instrument(skip(self))]
    pub async fn stop_scheduler(&self) -> Result<Ack> {
        api::scheduler::stop(&self.http, &self.base_url).await
    }

    /// Run one scrape through the scheduler outside its regular cadence.
    #[instrument(skip(self))]
    pub async fn trigger_manual_scraping(&self) -> Result<Ack> {
        api::scheduler::trigger(&self.http, &self.base_url).await
    }
}

impl EventSource for EventHubClient {
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        self.get_events().await
    }
}
