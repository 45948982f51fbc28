use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::config::MailConfig;
use crate::errors::TransportError;
use crate::message::OutgoingMail;

/// Delivery backend for composed messages.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), TransportError>;
}

/// Transport submitting messages to an authenticated SMTP relay.
pub struct SmtpRelay {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpRelay {
    /// Build a pooled SMTP client from the relay settings. No connection
    /// is opened until the first message is sent.
    pub fn new(config: &MailConfig) -> Result<Self, TransportError> {
        let credentials = Credentials::new(
            config.user.clone(),
            config.password.expose_secret().to_owned(),
        );

        let builder = if config.implicit_tls() {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(
                &config.smtp_host,
            )?
        };

        let mailer = builder
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self { mailer })
    }
}

#[async_trait]
impl MailTransport for SmtpRelay {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), TransportError> {
        let message = build_message(mail)?;
        let response = self.mailer.send(message).await?;

        if response.is_positive() {
            return Ok(());
        }

        Err(TransportError::Rejected {
            code: response.code().to_string(),
            message: response.message().collect::<Vec<_>>().join(" "),
        })
    }
}

/// Convert a composed notification into a multipart text/HTML message.
pub(crate) fn build_message(
    mail: &OutgoingMail,
) -> Result<Message, TransportError> {
    let from = mail.from.parse::<Mailbox>()?;
    let to = mail.to.parse::<Mailbox>()?;
    let reply_to = mail.reply_to.parse::<Mailbox>()?;

    let body = MultiPart::alternative()
        .singlepart(
            SinglePart::builder()
                .header(ContentType::TEXT_PLAIN)
                .body(mail.text.clone()),
        )
        .singlepart(
            SinglePart::builder()
                .header(ContentType::TEXT_HTML)
                .body(mail.html.clone()),
        );

    let message = Message::builder()
        .from(from)
        .reply_to(reply_to)
        .to(to)
        .subject(mail.subject.as_str())
        .multipart(body)?;

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::build_message;
    use crate::errors::TransportError;
    use crate::message::OutgoingMail;
    use crate::wire::SendEmailRequest;

    fn mail(email: &str) -> OutgoingMail {
        OutgoingMail::compose(
            &SendEmailRequest {
                name: String::from("Ada"),
                email: String::from(email),
                message: String::from("Hello"),
            },
            "inbox@example.com",
        )
    }

    #[test]
    fn given_composed_mail_when_built_then_headers_and_both_bodies_are_present()
    {
        let message =
            build_message(&mail("ada@example.com")).expect("message should build");
        let raw = String::from_utf8(message.formatted())
            .expect("formatted message should be utf-8");

        assert!(raw.contains("From: ada@example.com"));
        assert!(raw.contains("Reply-To: ada@example.com"));
        assert!(raw.contains("To: inbox@example.com"));
        assert!(raw.contains("Subject: New Contact Form Submission from Ada"));
        assert!(raw.contains("text/plain"));
        assert!(raw.contains("text/html"));
    }

    #[test]
    fn given_malformed_sender_when_built_then_address_error_is_returned() {
        let err = build_message(&mail("not an address"))
            .expect_err("malformed sender should fail");

        assert!(matches!(err, TransportError::Address(_)));
    }
}
