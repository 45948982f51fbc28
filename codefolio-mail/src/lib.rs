//! Mail relay behind the portfolio contact form.
//!
//! The crate is split into two layers:
//! - wire types ([`SendEmailRequest`], [`SendEmailResponse`]) shared with the
//!   desktop client and always compiled;
//! - the HTTP relay itself (enabled by the default `server` feature), which
//!   accepts `POST /api/sendEmail` and forwards the message to an SMTP
//!   relay through a [`MailTransport`].
//!
//! Front-ends that only submit the form should depend on this crate with
//! `default-features = false`.

mod wire;

#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod errors;
#[cfg(feature = "server")]
mod message;
#[cfg(feature = "server")]
mod server;
#[cfg(feature = "server")]
mod transport;

pub use wire::{SEND_EMAIL_PATH, SendEmailRequest, SendEmailResponse};

#[cfg(feature = "server")]
pub use config::{DEFAULT_BIND_ADDR, DEFAULT_SMTP_HOST, MailConfig};
#[cfg(feature = "server")]
pub use errors::{ConfigError, TransportError};
#[cfg(feature = "server")]
pub use message::OutgoingMail;
#[cfg(feature = "server")]
pub use server::{RelayState, handle_send_email, router, serve};
#[cfg(feature = "server")]
pub use transport::{MailTransport, SmtpRelay};
