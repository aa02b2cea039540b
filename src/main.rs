use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use hackscope::browse::{BrowseCommand, HELP};
use hackscope::config::BACKEND_URL_VAR;
use hackscope::pages::{ContactForm, Route, CONTACT_PAGE, HOME_PAGE};
use hackscope::render::{EventCards, ListingPage};
use hackscope::{Config, Event, EventHubClient, EventListing, LoadState, Platform, SortKey};

#[derive(Parser)]
#[command(name = "hackscope")]
#[command(about = "Browse hackathons and tech events from Devfolio, Unstop and Devpost")]
struct Cli {
    /// Base URL of the events service
    #[arg(long, global = true, env = BACKEND_URL_VAR)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of listings
    Events {
        /// Match against title, description and tags
        #[arg(short, long, default_value = "")]
        search: String,

        /// all, devfolio, unstop or devpost
        #[arg(short, long, default_value_t = Platform::All)]
        platform: Platform,

        /// newest, oldest, deadline or alphabetical
        #[arg(long, default_value_t = SortKey::Newest)]
        sort: SortKey,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Browse listings interactively
    Browse,
    /// Show the service's sample listings
    Sample,
    /// Submit a listing read from a JSON file
    Add {
        file: PathBuf,
    },
    /// Ask the service to scrape its sources now
    Scrape,
    /// Inspect or control the scraping scheduler
    Scheduler {
        #[command(subcommand)]
        action: SchedulerAction,
    },
    /// Render the page a path leads to
    Page {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum SchedulerAction {
    /// Show the scheduler state
    Status,
    /// Start periodic scraping
    Start,
    /// Stop periodic scraping
    Stop,
    /// Run one scrape now
    Trigger,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hackscope=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let backend_url = cli.backend_url;
    let client = || -> Result<EventHubClient> {
        let url = backend_url.clone().with_context(|| {
            format!("no backend url: pass --backend-url or set {BACKEND_URL_VAR}")
        })?;
        Ok(EventHubClient::from_config(&Config::new(url)?))
    };

    match cli.command {
        Commands::Events {
            search,
            platform,
            sort,
            page,
        } => cmd_events(&client()?, search, platform, sort, page).await,
        Commands::Browse => cmd_browse(&client()?).await,
        Commands::Sample => cmd_sample(&client()?).await,
        Commands::Add { file } => cmd_add(&client()?, &file).await,
        Commands::Scrape => print_json(&client()?.scrape_events().await?),
        Commands::Scheduler { action } => cmd_scheduler(&client()?, action).await,
        Commands::Page { path } => match Route::resolve(&path) {
            Route::Events => {
                cmd_events(&client()?, String::new(), Platform::All, SortKey::Newest, 1).await
            }
            Route::Home => {
                print!("{HOME_PAGE}");
                Ok(())
            }
            Route::Contact => {
                print!("{CONTACT_PAGE}");
                Ok(())
            }
        },
        Commands::Contact {
            name,
            email,
            message,
        } => {
            ContactForm {
                name,
                email,
                message,
            }
            .submit();
            println!("Thanks! Your message has been received.");
            Ok(())
        }
    }
}

async fn cmd_events(
    client: &EventHubClient,
    search: String,
    platform: Platform,
    sort: SortKey,
    page: usize,
) -> Result<()> {
    let mut listing = EventListing::new();
    listing.refresh(client).await;
    listing.set_search(search);
    listing.set_platform(platform);
    listing.set_sort(sort);
    listing.go_to_page(page);

    print!("{}", ListingPage(&listing));
    if let LoadState::Error(message) = listing.state() {
        bail!("{message}");
    }
    Ok(())
}

async fn cmd_browse(client: &EventHubClient) -> Result<()> {
    let mut listing = EventListing::new();
    print!("{}", ListingPage(&listing));
    listing.refresh(client).await;
    print!("{}", ListingPage(&listing));
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<BrowseCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        debug!(?command, "browse command");

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                print!("{HELP}");
                continue;
            }
            BrowseCommand::Refresh => {
                println!("Loading events...");
                listing.refresh(client).await;
            }
            command => {
                command.apply(&mut listing);
            }
        }
        print!("{}", ListingPage(&listing));
    }
    Ok(())
}

async fn cmd_sample(client: &EventHubClient) -> Result<()> {
    let events = client.get_sample_events().await?;
    let events: Vec<&Event> = events.iter().collect();
    println!("{} sample events", events.len());
    print!("{}", EventCards(&events));
    Ok(())
}

async fn cmd_add(client: &EventHubClient, file: &Path) -> Result<()> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let event: Event = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid event", file.display()))?;
    info!(title = event.title(), "submitting event");
    print_json(&client.add_event(&event).await?)
}

async fn cmd_scheduler(client: &EventHubClient, action: SchedulerAction) -> Result<()> {
    let response = match action {
        SchedulerAction::Status => client.get_scheduler_status().await?,
        SchedulerAction::Start => client.start_scheduler().await?,
        SchedulerAction::Stop => client.stop_scheduler().await?,
        SchedulerAction::Trigger => client.trigger_manual_scraping().await?,
    };
    print_json(&response)
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
