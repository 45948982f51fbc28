use thiserror::Error;

/// Errors raised while reading relay configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {name} is not set")]
    Missing { name: &'static str },

    #[error("environment variable {name} is empty")]
    Empty { name: &'static str },

    #[error("invalid SMTP port {value:?}: {source}")]
    Port {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Errors raised while handing a message to the SMTP relay.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("smtp server rejected message with code {code}: {message}")]
    Rejected { code: String, message: String },
}
