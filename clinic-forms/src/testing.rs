//! Canned endpoint responses for driving chains in tests.

use crate::chain::{FetchRequest, SelectorChain};
use clinic_core::records::Choice;
use std::collections::{HashMap, VecDeque};

pub(crate) struct FakeServer {
    responses: HashMap<String, String>,
}

impl FakeServer {
    pub(crate) fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    pub(crate) fn with(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.to_string());
        self
    }

    pub(crate) fn answer(&self, request: &FetchRequest) -> anyhow::Result<Vec<Choice>> {
        let body = self
            .responses
            .get(&request.url)
            .ok_or_else(|| anyhow::anyhow!("404 for {}", request.url))?;
        request.kind().decode(body)
    }
}

/// Serve requests in FIFO order until none remain. Returns the urls served.
pub(crate) fn drive(
    chain: &mut SelectorChain,
    requests: Vec<FetchRequest>,
    server: &FakeServer,
) -> Vec<String> {
    let mut queue: VecDeque<FetchRequest> = requests.into();
    let mut served = Vec::new();
    while let Some(request) = queue.pop_front() {
        served.push(request.url.clone());
        match server.answer(&request) {
            Ok(choices) => queue.extend(chain.apply_records(&request, choices)),
            Err(e) => chain.apply_failure(&request, &e),
        }
    }
    served
}
