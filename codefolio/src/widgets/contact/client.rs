use codefolio_mail::{SEND_EMAIL_PATH, SendEmailRequest, SendEmailResponse};

use super::errors::ContactError;

/// HTTP client for the mail relay.
#[derive(Debug, Clone)]
pub(crate) struct ContactClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ContactClient {
    pub(crate) fn new(api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!(
                "{}{SEND_EMAIL_PATH}",
                api_base.trim_end_matches('/')
            ),
        }
    }

    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Post a submission. Succeeds only on a 2xx reply reporting success.
    pub(crate) async fn send(
        &self,
        request: &SendEmailRequest,
    ) -> Result<(), ContactError> {
        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();

        let body = match response.json::<SendEmailResponse>().await {
            Ok(body) => body,
            Err(err) if status.is_success() => return Err(err.into()),
            Err(_) => {
                return Err(ContactError::Rejected {
                    status: status.as_u16(),
                    error: String::from("unreadable response body"),
                });
            },
        };

        if status.is_success() && body.success {
            return Ok(());
        }

        Err(ContactError::Rejected {
            status: status.as_u16(),
            error: body.error.unwrap_or_else(|| String::from("unknown error")),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use codefolio_mail::{
        MailTransport, OutgoingMail, RelayState, SendEmailRequest,
        TransportError, router,
    };
    use tokio::net::TcpListener;

    use super::ContactClient;
    use crate::widgets::contact::errors::ContactError;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<OutgoingMail>>,
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(
            &self,
            mail: &OutgoingMail,
        ) -> Result<(), TransportError> {
            self.sent
                .lock()
                .expect("recording lock should not be poisoned")
                .push(mail.clone());
            Ok(())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl MailTransport for FailingTransport {
        async fn send(
            &self,
            _mail: &OutgoingMail,
        ) -> Result<(), TransportError> {
            Err(TransportError::Rejected {
                code: String::from("421"),
                message: String::from("service not available"),
            })
        }
    }

    async fn spawn_relay(transport: Arc<dyn MailTransport>) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral port should bind");
        let addr = listener.local_addr().expect("listener address");
        let app = router(RelayState::new(
            transport,
            String::from("inbox@example.com"),
        ));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        addr
    }

    fn request() -> SendEmailRequest {
        SendEmailRequest {
            name: String::from("Ada"),
            email: String::from("ada@example.com"),
            message: String::from("Hello from the test suite"),
        }
    }

    #[test]
    fn given_base_with_trailing_slash_when_built_then_endpoint_has_single_slash()
    {
        let client = ContactClient::new("http://127.0.0.1:3000/");
        assert_eq!(client.endpoint(), "http://127.0.0.1:3000/api/sendEmail");
    }

    #[tokio::test]
    async fn given_running_relay_when_submitted_then_mail_is_delivered() {
        let transport = Arc::new(RecordingTransport::default());
        let addr = spawn_relay(transport.clone()).await;
        let client = ContactClient::new(&format!("http://{addr}"));

        client.send(&request()).await.expect("submission should succeed");

        let sent = transport
            .sent
            .lock()
            .expect("recording lock should not be poisoned");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to, "ada@example.com");
    }

    #[tokio::test]
    async fn given_failing_transport_when_submitted_then_rejection_is_reported()
    {
        let addr = spawn_relay(Arc::new(FailingTransport)).await;
        let client = ContactClient::new(&format!("http://{addr}"));

        let err = client
            .send(&request())
            .await
            .expect_err("submission should fail");

        match err {
            ContactError::Rejected { status, error } => {
                assert_eq!(status, 500);
                assert_eq!(error, "Failed to send email");
            },
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn given_blank_fields_when_submitted_then_relay_reports_missing_fields()
    {
        let addr = spawn_relay(Arc::new(RecordingTransport::default())).await;
        let client = ContactClient::new(&format!("http://{addr}"));

        let err = client
            .send(&codefolio_mail::SendEmailRequest::default())
            .await
            .expect_err("blank submission should fail");

        assert!(matches!(
            err,
            ContactError::Rejected { ref error, .. } if error == "Missing required fields"
        ));
    }

    #[tokio::test]
    async fn given_unreachable_relay_when_submitted_then_transport_error_is_returned()
     {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral port should bind");
        let addr = listener.local_addr().expect("listener address");
        drop(listener);

        let client = ContactClient::new(&format!("http://{addr}"));
        let err = client
            .send(&request())
            .await
            .expect_err("closed port should fail");

        assert!(matches!(err, ContactError::Transport(_)));
    }
}
