use async_trait::async_trait;
use gloo_net::http::Request;
use log::info;

use super::error::SubmissionError;
use super::model::{Ack, ContactFormInput, FormPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends the contact payload somewhere and reports what came back.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &FormPayload,
    ) -> Result<TransportResponse, SubmissionError>;
}

/// Browser fetch through gloo-net.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl FormTransport for GlooTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        payload: &FormPayload,
    ) -> Result<TransportResponse, SubmissionError> {
        let request = Request::post(endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(TransportResponse { status, body })
    }
}

/// One POST of `input` to `endpoint`. Only a 2xx status counts as success.
pub async fn send_contact<T>(
    transport: &T,
    endpoint: &str,
    input: &ContactFormInput,
) -> Result<Ack, SubmissionError>
where
    T: FormTransport + ?Sized,
{
    let payload = FormPayload::from(input);
    info!("Sending contact form to {}", endpoint);

    let response = transport.post_json(endpoint, &payload).await?;
    if !response.is_success() {
        return Err(SubmissionError::Rejected {
            status: response.status,
        });
    }

    info!("Contact form accepted with status {}", response.status);
    Ok(Ack::from_body(&response.body))
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// In-memory transport with a canned answer.
    pub struct FakeTransport {
        answer: Result<TransportResponse, SubmissionError>,
        pub calls: Cell<usize>,
        pub last_payload: RefCell<Option<FormPayload>>,
    }

    impl FakeTransport {
        pub fn status(status: u16, body: &str) -> Self {
            Self::answering(Ok(TransportResponse {
                status,
                body: body.to_string(),
            }))
        }

        pub fn network_down() -> Self {
            Self::answering(Err(SubmissionError::Transport(
                "TypeError: Failed to fetch".to_string(),
            )))
        }

        fn answering(answer: Result<TransportResponse, SubmissionError>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
                last_payload: RefCell::new(None),
            }
        }
    }

    #[async_trait(?Send)]
    impl FormTransport for FakeTransport {
        async fn post_json(
            &self,
            _endpoint: &str,
            payload: &FormPayload,
        ) -> Result<TransportResponse, SubmissionError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_payload.borrow_mut() = Some(payload.clone());
            self.answer.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::fake::FakeTransport;
    use super::*;

    fn ada() -> ContactFormInput {
        ContactFormInput::new("Ada", "ada@example.com", "Hi")
    }

    #[test]
    fn success_only_on_2xx() {
        assert!(TransportResponse { status: 200, body: String::new() }.is_success());
        assert!(TransportResponse { status: 204, body: String::new() }.is_success());
        assert!(!TransportResponse { status: 302, body: String::new() }.is_success());
        assert!(!TransportResponse { status: 199, body: String::new() }.is_success());
    }

    #[test]
    fn ok_response_becomes_ack() {
        let transport = FakeTransport::status(200, r#"{"ok":true}"#);
        let ack = block_on(send_contact(&transport, "https://forms.test/f/x", &ada())).unwrap();

        assert_eq!(ack.ok, Some(true));
        assert_eq!(transport.calls.get(), 1);
        let sent = transport.last_payload.borrow().clone().unwrap();
        assert_eq!(sent.name, "Ada");
        assert_eq!(sent.subject, crate::config::FORM_SUBJECT);
    }

    #[test]
    fn server_error_is_rejection() {
        let transport = FakeTransport::status(500, r#"{"error":"boom"}"#);
        let err = block_on(send_contact(&transport, "https://forms.test/f/x", &ada())).unwrap_err();
        assert_eq!(err, SubmissionError::Rejected { status: 500 });
    }

    #[test]
    fn network_failure_passes_through() {
        let transport = FakeTransport::network_down();
        let err = block_on(send_contact(&transport, "https://forms.test/f/x", &ada())).unwrap_err();
        assert!(matches!(err, SubmissionError::Transport(_)));
    }
}
