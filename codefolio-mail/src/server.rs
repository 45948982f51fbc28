use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use tokio::net::TcpListener;

use crate::message::OutgoingMail;
use crate::transport::MailTransport;
use crate::wire::{SEND_EMAIL_PATH, SendEmailRequest, SendEmailResponse};

const METHOD_NOT_ALLOWED: &str = "Method not allowed";
const SEND_FAILED: &str = "Failed to send email";
const MISSING_FIELDS: &str = "Missing required fields";

/// Shared handler state.
pub struct RelayState {
    transport: Arc<dyn MailTransport>,
    mailbox: String,
}

impl RelayState {
    pub fn new(transport: Arc<dyn MailTransport>, mailbox: String) -> Self {
        Self { transport, mailbox }
    }
}

/// Build the relay router.
pub fn router(state: RelayState) -> Router {
    Router::new()
        .route(SEND_EMAIL_PATH, any(send_email))
        .with_state(Arc::new(state))
}

/// Bind `addr` and serve the relay until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: RelayState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    log::info!("mail relay listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                log::warn!("failed to listen for shutdown signal: {err}");
            }
        })
        .await
}

async fn send_email(
    State(state): State<Arc<RelayState>>,
    method: Method,
    body: Bytes,
) -> Response {
    let (status, payload) = handle_send_email(&state, &method, &body).await;
    json_response(status, payload)
}

/// Validate a submission and forward it through the transport.
pub async fn handle_send_email(
    state: &RelayState,
    method: &Method,
    body: &[u8],
) -> (StatusCode, SendEmailResponse) {
    if *method != Method::POST {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            SendEmailResponse::failure(METHOD_NOT_ALLOWED),
        );
    }

    let request = match serde_json::from_slice::<SendEmailRequest>(body) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("rejected contact submission with invalid body: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                SendEmailResponse::failure(SEND_FAILED)
                    .with_details(format!("invalid request body: {err}")),
            );
        },
    };

    let missing = request.missing_fields();
    if !missing.is_empty() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            SendEmailResponse::failure(MISSING_FIELDS)
                .with_details(format!("required: {}", missing.join(", "))),
        );
    }

    let mail = OutgoingMail::compose(&request, &state.mailbox);
    match state.transport.send(&mail).await {
        Ok(()) => {
            log::info!("contact submission relayed");
            (StatusCode::OK, SendEmailResponse::ok())
        },
        Err(err) => {
            log::warn!("contact submission relay failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                SendEmailResponse::failure(SEND_FAILED)
                    .with_details(err.to_string()),
            )
        },
    }
}

fn json_response<T: serde::Serialize>(
    status: StatusCode,
    payload: T,
) -> Response {
    (status, Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::http::{Method, StatusCode};

    use super::{RelayState, handle_send_email};
    use crate::errors::TransportError;
    use crate::message::OutgoingMail;
    use crate::transport::MailTransport;

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

    struct RejectingTransport;

    #[async_trait]
    impl MailTransport for RejectingTransport {
        async fn send(
            &self,
            _mail: &OutgoingMail,
        ) -> Result<(), TransportError> {
            Err(TransportError::Rejected {
                code: String::from("535"),
                message: String::from("authentication failed"),
            })
        }
    }

    fn state_with(transport: Arc<dyn MailTransport>) -> RelayState {
        RelayState::new(transport, String::from("inbox@example.com"))
    }

    const VALID_BODY: &[u8] =
        br#"{"name":"Ada","email":"ada@example.com","message":"Hi there"}"#;

    #[tokio::test]
    async fn given_get_request_when_handled_then_method_not_allowed() {
        let transport = Arc::new(RecordingTransport::default());
        let state = state_with(transport.clone());

        let (status, body) =
            handle_send_email(&state, &Method::GET, VALID_BODY).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Method not allowed"));
        assert!(
            transport
                .sent
                .lock()
                .expect("recording lock should not be poisoned")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn given_valid_submission_when_handled_then_mail_is_relayed() {
        let transport = Arc::new(RecordingTransport::default());
        let state = state_with(transport.clone());

        let (status, body) =
            handle_send_email(&state, &Method::POST, VALID_BODY).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.success);
        assert!(body.error.is_none());

        let sent = transport
            .sent
            .lock()
            .expect("recording lock should not be poisoned");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "inbox@example.com");
        assert_eq!(sent[0].subject, "New Contact Form Submission from Ada");
    }

    #[tokio::test]
    async fn given_blank_fields_when_handled_then_missing_fields_error() {
        let state = state_with(Arc::new(RecordingTransport::default()));

        let (status, body) = handle_send_email(
            &state,
            &Method::POST,
            br#"{"name":"Ada","email":"","message":""}"#,
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("Missing required fields"));
        assert_eq!(body.details.as_deref(), Some("required: email, message"));
    }

    #[tokio::test]
    async fn given_malformed_json_when_handled_then_send_failure_with_details()
    {
        let state = state_with(Arc::new(RecordingTransport::default()));

        let (status, body) =
            handle_send_email(&state, &Method::POST, b"{ not json").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("Failed to send email"));
        assert!(
            body.details
                .as_deref()
                .is_some_and(|details| details.starts_with("invalid request body"))
        );
    }

    #[tokio::test]
    async fn given_transport_error_when_handled_then_failure_carries_cause() {
        let state = state_with(Arc::new(RejectingTransport));

        let (status, body) =
            handle_send_email(&state, &Method::POST, VALID_BODY).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some("Failed to send email"));
        assert!(
            body.details
                .as_deref()
                .is_some_and(|details| details.contains("535"))
        );
    }
}
