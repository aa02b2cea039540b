//! Client and listing pipeline for browsing hackathon and tech-event listings
//! served by a remote events service.

pub use client::EventHubClient;
pub use config::Config;
pub use error::{Error, Result};
pub use listing::{EventListing, EventSource, LoadState, Platform, SortKey};
pub use model::*;

pub mod browse;
pub mod client;
pub mod config;
pub mod error;
pub mod listing;
pub mod model;
pub mod pages;
pub mod render;

pub(crate) mod api;
