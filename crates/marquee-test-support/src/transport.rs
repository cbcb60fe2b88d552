//! Scripted HTTP transport for gateway and orchestration tests.
//!
//! Replies are keyed by route: the URL with the test base and the `api_key`
//! parameter stripped, e.g. `/movie/7` or `/search/movie?query=matrix`.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use marquee_gateway::{GatewayConfig, HttpTransport, MovieGateway, TransportError};
use serde::Serialize;
use tokio::sync::oneshot;

use crate::fixtures::json_body;

/// Base URL used by [`gateway`].
pub const TEST_BASE_URL: &str = "https://tmdb.test/3";
/// API key used by [`gateway`].
pub const TEST_API_KEY: &str = "test-key";

type GateReply = Result<String, TransportError>;

enum Reply {
    Body(String),
    Fail(TransportError),
    Gated(oneshot::Receiver<GateReply>),
}

/// Fake transport answering from a per-route script.
///
/// Body and failure replies are sticky once they are the last scripted reply
/// for a route; gated replies are consumed. Unscripted routes answer 404.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<HashMap<String, VecDeque<Reply>>>,
    requests: RefCell<Vec<String>>,
}

/// Handle releasing a gated reply.
pub struct Gate {
    sender: oneshot::Sender<GateReply>,
}

impl Gate {
    /// Release the request with a JSON body.
    pub fn release_json<T: Serialize>(self, value: &T) {
        self.sender.send(Ok(json_body(value))).ok();
    }

    /// Release the request with a transport failure.
    pub fn fail(self, err: TransportError) {
        self.sender.send(Err(err)).ok();
    }
}

impl ScriptedTransport {
    /// Empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw body for a route.
    pub fn respond(&self, route: &str, body: impl Into<String>) {
        self.push(route, Reply::Body(body.into()));
    }

    /// Queue a JSON-encoded fixture for a route.
    pub fn respond_json<T: Serialize>(&self, route: &str, value: &T) {
        self.respond(route, json_body(value));
    }

    /// Queue an HTTP status failure for a route.
    pub fn fail_status(&self, route: &str, status: u16) {
        self.push(route, Reply::Fail(TransportError::Status { status }));
    }

    /// Queue a network failure for a route.
    pub fn fail_network(&self, route: &str) {
        self.push(
            route,
            Reply::Fail(TransportError::Network {
                detail: "connection reset".to_string(),
            }),
        );
    }

    /// Queue a reply that stays pending until the returned gate is released.
    #[must_use]
    pub fn gate(&self, route: &str) -> Gate {
        let (sender, receiver) = oneshot::channel();
        self.push(route, Reply::Gated(receiver));
        Gate { sender }
    }

    /// Routes requested so far, in issue order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Number of times a route was requested.
    #[must_use]
    pub fn request_count(&self, route: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|requested| requested.as_str() == route)
            .count()
    }

    fn push(&self, route: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry(route.to_string())
            .or_default()
            .push_back(reply);
    }

    fn next_reply(&self, route: &str) -> Reply {
        let mut replies = self.replies.borrow_mut();
        let Some(queue) = replies.get_mut(route) else {
            return Reply::Fail(TransportError::Status { status: 404 });
        };
        match queue.front() {
            Some(Reply::Body(body)) if queue.len() == 1 => Reply::Body(body.clone()),
            Some(Reply::Fail(err)) if queue.len() == 1 => Reply::Fail(err.clone()),
            Some(_) => queue
                .pop_front()
                .unwrap_or(Reply::Fail(TransportError::Status { status: 404 })),
            None => Reply::Fail(TransportError::Status { status: 404 }),
        }
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        let Some(route) = route_key(url) else {
            return Err(TransportError::Status { status: 401 });
        };
        self.requests.borrow_mut().push(route.clone());
        match self.next_reply(&route) {
            Reply::Body(body) => Ok(body),
            Reply::Fail(err) => Err(err),
            Reply::Gated(receiver) => receiver.await.unwrap_or_else(|_| {
                Err(TransportError::Network {
                    detail: "gate dropped".to_string(),
                })
            }),
        }
    }
}

/// Gateway over a scripted transport with the test base URL and key.
#[must_use]
pub fn gateway(transport: ScriptedTransport) -> MovieGateway<ScriptedTransport> {
    MovieGateway::new(
        GatewayConfig::new(TEST_API_KEY).with_base_url(TEST_BASE_URL),
        transport,
    )
}

/// Strip the base URL and API key from a request URL.
///
/// Returns `None` when the request did not carry the test API key.
fn route_key(url: &str) -> Option<String> {
    let relative = url.strip_prefix(TEST_BASE_URL).unwrap_or(url);
    let (path, query) = relative.split_once('?').unwrap_or((relative, ""));
    let expected_key = format!("api_key={TEST_API_KEY}");
    let mut has_key = false;
    let params: Vec<&str> = query
        .split('&')
        .filter(|param| {
            if *param == expected_key {
                has_key = true;
                false
            } else {
                !param.is_empty()
            }
        })
        .collect();
    if !has_key {
        return None;
    }
    if params.is_empty() {
        Some(path.to_string())
    } else {
        Some(format!("{path}?{}", params.join("&")))
    }
}
