//! Commands accepted by an interactive listing session.

use std::str::FromStr;

use crate::listing::{EventListing, Platform, SortKey};

pub const HELP: &str = "\
Commands:
  search <term>      filter by title, description or tag
  clear-search       drop the search term
  platform <name>    all | devfolio | unstop | devpost
  sort <key>         newest | oldest | deadline | alphabetical
  page <n>           jump to page n
  next, prev         move one page
  clear              reset search, platform and sort
  refresh            fetch the listings again
  help               show this help
  quit               leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Platform(Platform),
    Sort(SortKey),
    Page(usize),
    Next,
    Prev,
    Clear,
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    Missing {
        command: &'static str,
        expected: &'static str,
    },
    #[error("invalid {what} `{value}`")]
    Invalid { what: &'static str, value: String },
}

impl FromStr for BrowseCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        let argument = |command: &'static str, expected: &'static str| {
            if rest.is_empty() {
                Err(ParseCommandError::Missing { command, expected })
            } else {
                Ok(rest)
            }
        };

        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(BrowseCommand::Search(
                argument("search", "a term")?.to_string(),
            )),
            "clear-search" => Ok(BrowseCommand::Search(String::new())),
            "platform" => {
                let value = argument("platform", "a platform name")?;
                Platform::from_str(value)
                    .map(BrowseCommand::Platform)
                    .map_err(|_| ParseCommandError::Invalid {
                        what: "platform",
                        value: value.to_string(),
                    })
            }
            "sort" => {
                let value = argument("sort", "a sort key")?;
                SortKey::from_str(value)
                    .map(BrowseCommand::Sort)
                    .map_err(|_| ParseCommandError::Invalid {
                        what: "sort key",
                        value: value.to_string(),
                    })
            }
            "page" | "p" => {
                let value = argument("page", "a page number")?;
                value
                    .parse()
                    .map(BrowseCommand::Page)
                    .map_err(|_| ParseCommandError::Invalid {
                        what: "page",
                        value: value.to_string(),
                    })
            }
            "next" | "n" => Ok(BrowseCommand::Next),
            "prev" | "previous" => Ok(BrowseCommand::Prev),
            "clear" => Ok(BrowseCommand::Clear),
            "refresh" | "r" => Ok(BrowseCommand::Refresh),
            "help" | "?" => Ok(BrowseCommand::Help),
            "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
            _ => Err(ParseCommandError::Unknown(word.to_string())),
        }
    }
}

impl BrowseCommand {
    /// Apply a view command to `listing`.
    ///
    /// `Refresh`, `Help` and `Quit` need the caller and are left untouched;
    /// returns whether the listing was handled here.
    pub fn apply(&self, listing: &mut EventListing) -> bool {
        match self {
            BrowseCommand::Search(term) => listing.set_search(term.as_str()),
            BrowseCommand::Platform(platform) => listing.set_platform(*platform),
            BrowseCommand::Sort(sort) => listing.set_sort(*sort),
            BrowseCommand::Page(page) => listing.go_to_page(*page),
            BrowseCommand::Next => listing.next_page(),
            BrowseCommand::Prev => listing.prev_page(),
            BrowseCommand::Clear => listing.clear_filters(),
            BrowseCommand::Refresh | BrowseCommand::Help | BrowseCommand::Quit => return false,
        }
        true
    }
}
