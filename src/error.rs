use crate::model::Operation;

/// All errors that can occur while talking to the events service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A call to the events service failed.
    ///
    /// The message is the server-provided `error` string when the response
    /// carried one, otherwise the fallback for the operation.
    #[error("{message}")]
    Api {
        operation: Operation,
        message: String,
    },

    /// The backend base URL is missing or unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// An endpoint path could not be joined onto the base URL.
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl Error {
    /// A failed call reporting the operation's fixed fallback message.
    pub(crate) fn fallback(operation: Operation) -> Self {
        Error::Api {
            operation,
            message: operation.fallback_message().to_string(),
        }
    }

    /// A failed call reporting `message`, or the fallback when there is none.
    pub(crate) fn api(operation: Operation, message: Option<String>) -> Self {
        match message {
            Some(message) if !message.is_empty() => Error::Api { operation, message },
            _ => Error::fallback(operation),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
