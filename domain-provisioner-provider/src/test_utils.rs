//! Helpers for exercising the clients against a local wiremock server

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use crate::types::AwsCredentials;

struct SequentialResponderState {
    responses: Vec<ResponseTemplate>,
    call_count: AtomicUsize,
}

/// Returns the given responses in order, repeating the last one.
///
/// Clone it before mounting to read the call count afterwards.
#[derive(Clone)]
pub(crate) struct SequentialResponder {
    state: Arc<SequentialResponderState>,
}

impl SequentialResponder {
    pub(crate) fn new(responses: Vec<ResponseTemplate>) -> Self {
        assert!(
            !responses.is_empty(),
            "SequentialResponder requires at least one response"
        );
        Self {
            state: Arc::new(SequentialResponderState {
                responses,
                call_count: AtomicUsize::new(0),
            }),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.state.call_count.load(Ordering::SeqCst)
    }
}

impl Respond for SequentialResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let count = self.state.call_count.fetch_add(1, Ordering::SeqCst);
        let idx = count.min(self.state.responses.len() - 1);
        self.state.responses[idx].clone()
    }
}

/// Start a server answering every request from `responses`.
pub(crate) async fn start_sequence(
    responses: Vec<ResponseTemplate>,
) -> (MockServer, SequentialResponder) {
    let server = MockServer::start().await;
    let responder = SequentialResponder::new(responses);
    Mock::given(any())
        .respond_with(responder.clone())
        .mount(&server)
        .await;
    (server, responder)
}

/// A response with a body and no extra headers.
pub(crate) fn respond(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_string(body)
}

pub(crate) fn test_credentials() -> AwsCredentials {
    AwsCredentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
}
