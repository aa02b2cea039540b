use serde::Serialize;
use strum_macros::Display;

/// Server-defined acknowledgement returned by create, scrape and control calls.
pub type Ack = serde_json::Value;

/// Opaque scheduler state, the `data` member of the status response.
pub type SchedulerStatus = serde_json::Value;

/// The remote calls this client knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    GetEvents,
    AddEvent,
    ScrapeEvents,
    GetSampleEvents,
    GetSchedulerStatus,
    StartScheduler,
    StopScheduler,
    TriggerManualScraping,
}

impl Operation {
    /// Message reported when the server gives no error string of its own.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::GetEvents => "Failed to fetch events",
            Operation::AddEvent => "Failed to add event",
            Operation::ScrapeEvents => "Failed to scrape events",
            Operation::GetSampleEvents => "Failed to fetch sample events",
            Operation::GetSchedulerStatus => "Failed to fetch scheduler status",
            Operation::StartScheduler => "Failed to start scheduler",
            Operation::StopScheduler => "Failed to stop scheduler",
            Operation::TriggerManualScraping => "Failed to trigger manual scraping",
        }
    }
}
