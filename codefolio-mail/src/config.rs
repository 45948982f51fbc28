use std::net::SocketAddr;

use secrecy::SecretString;

use crate::errors::ConfigError;

/// Listen address used when `CODEFOLIO_MAIL_BIND` is not set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
/// SMTP relay used when `MAIL_SMTP_HOST` is not set.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
/// Implicit-TLS submission port; any other port negotiates STARTTLS.
pub const SMTPS_PORT: u16 = 465;

const MAIL_USER: &str = "MAIL_USER";
const MAIL_PASS: &str = "MAIL_PASS";
const MAIL_SMTP_HOST: &str = "MAIL_SMTP_HOST";
const MAIL_SMTP_PORT: &str = "MAIL_SMTP_PORT";
const MAIL_BIND: &str = "CODEFOLIO_MAIL_BIND";

/// Relay settings resolved from the environment.
#[derive(Debug)]
pub struct MailConfig {
    /// Mailbox receiving submissions; doubles as the SMTP login.
    pub user: String,
    pub password: SecretString,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub bind: SocketAddr,
}

impl MailConfig {
    /// Read the relay settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user = required(&lookup, MAIL_USER)?;
        let password = SecretString::from(required(&lookup, MAIL_PASS)?);
        let smtp_host = optional(&lookup, MAIL_SMTP_HOST)
            .unwrap_or_else(|| String::from(DEFAULT_SMTP_HOST));

        let smtp_port = match optional(&lookup, MAIL_SMTP_PORT) {
            None => SMTPS_PORT,
            Some(value) => value.parse::<u16>().map_err(|source| {
                ConfigError::Port {
                    value: value.clone(),
                    source,
                }
            })?,
        };

        let bind_value = optional(&lookup, MAIL_BIND)
            .unwrap_or_else(|| String::from(DEFAULT_BIND_ADDR));
        let bind = bind_value.parse::<SocketAddr>().map_err(|source| {
            ConfigError::BindAddr {
                value: bind_value.clone(),
                source,
            }
        })?;

        Ok(Self {
            user,
            password,
            smtp_host,
            smtp_port,
            bind,
        })
    }

    /// Whether the SMTP session starts in TLS rather than upgrading.
    pub fn implicit_tls(&self) -> bool {
        self.smtp_port == SMTPS_PORT
    }
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Err(ConfigError::Missing { name }),
        Some(value) if value.trim().is_empty() => {
            Err(ConfigError::Empty { name })
        },
        Some(value) => Ok(value.trim().to_string()),
    }
}
