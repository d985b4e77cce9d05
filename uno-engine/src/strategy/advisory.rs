use std::{fmt::Debug, thread, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::{HeuristicStrategy, Strategy};
use crate::{
    card::{Card, CardColor},
    rules,
    state::{Direction, GameState},
    turn::Decision,
};

/// Retry behavior of the advisory call, kept as data so tests can pin
/// the bound and zero the backoff.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            backoff: Duration::from_millis(250),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AdvisoryConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl AdvisoryConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_secs(5),
            retry: RetryPolicy::default(),
        }
    }
}

/// The compact round snapshot sent to the reasoning service.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    pub current_color: CardColor,
    pub current_card: String,
    pub direction: Direction,
    pub opponent_hand_sizes: Vec<usize>,
    pub recent_actions: Vec<String>,
    pub own_hand: Vec<String>,
}

impl AdviceRequest {
    fn from_snapshot(state: &GameState, hand: &[Card]) -> Self {
        Self {
            current_color: state.current_color(),
            current_card: state.current_card().to_string(),
            direction: state.direction(),
            opponent_hand_sizes: state.opponent_hand_sizes(),
            recent_actions: state.recent_actions().map(str::to_string).collect(),
            own_hand: hand.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Either an index into the `ownHand` sequence of the request, or the
/// word "draw".
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    HandIndex(usize),
    Keyword(String),
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceResponse {
    pub selection: Selection,
    pub chosen_color: Option<String>,
    pub rationale: String,
}

impl AdviceResponse {
    /// Turns the service's answer into a decision the engine would
    /// accept, or reports why it cannot be trusted.
    fn into_decision(self, state: &GameState, hand: &[Card]) -> Result<Decision, AdvisoryError> {
        match self.selection {
            Selection::Keyword(word) if word.eq_ignore_ascii_case("draw") => Ok(Decision::Draw),
            Selection::Keyword(word) => Err(AdvisoryError::InvalidAdvice(format!(
                "unknown selection {word:?}"
            ))),
            Selection::HandIndex(index) => {
                let card = hand.get(index).ok_or_else(|| {
                    AdvisoryError::InvalidAdvice(format!(
                        "hand index {index} is out of range for a hand of {}",
                        hand.len()
                    ))
                })?;

                if !rules::is_legal(card, state.current_card()) {
                    return Err(AdvisoryError::InvalidAdvice(format!(
                        "{card} is not playable right now"
                    )));
                }

                let chosen_color = if card.is_wild_family() {
                    let raw = self.chosen_color.ok_or_else(|| {
                        AdvisoryError::InvalidAdvice(format!("{card} was picked without a color"))
                    })?;
                    let color = raw.parse::<CardColor>().map_err(|_| {
                        AdvisoryError::InvalidAdvice(format!("unknown color {raw:?}"))
                    })?;
                    Some(color)
                } else {
                    None
                };

                Ok(Decision::Play {
                    hand_index: index,
                    chosen_color,
                })
            }
        }
    }
}

/// Always recovered locally; a round never fails because of these.
#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("transport failed: {0}")]
    Transport(#[from] Box<ureq::Error>),
    #[error("service answered with status {0}")]
    Status(u16),
    #[error("response body could not be decoded: {0}")]
    Decode(#[from] std::io::Error),
    #[error("unusable advice: {0}")]
    InvalidAdvice(String),
}

pub trait AdvisoryTransport: Debug {
    fn request_advice(&self, request: &AdviceRequest) -> Result<AdviceResponse, AdvisoryError>;
}

/// Blocking JSON POST to the reasoning service, bounded by the
/// configured timeout.
#[derive(Debug)]
pub struct HttpTransport {
    agent: ureq::Agent,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &AdvisoryConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self {
            agent,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl AdvisoryTransport for HttpTransport {
    fn request_advice(&self, request: &AdviceRequest) -> Result<AdviceResponse, AdvisoryError> {
        let mut http_request = self.agent.post(&self.endpoint);
        if let Some(key) = &self.api_key {
            http_request = http_request.set("Authorization", &format!("Bearer {key}"));
        }

        match http_request.send_json(request) {
            Ok(response) => Ok(response.into_json()?),
            Err(ureq::Error::Status(code, _)) => Err(AdvisoryError::Status(code)),
            Err(error) => Err(AdvisoryError::Transport(Box::new(error))),
        }
    }
}

/// The Genius tier: asks a remote reasoning service for each move, with
/// a bounded retry, and plays the heuristic's move for the turn when the
/// service times out, errors, or answers nonsense. The service is never
/// in a position to stall the round.
#[derive(Debug)]
pub struct AdvisoryStrategy<T: AdvisoryTransport> {
    transport: T,
    retry: RetryPolicy,
    fallback: HeuristicStrategy,
}

impl AdvisoryStrategy<HttpTransport> {
    pub fn over_http(config: AdvisoryConfig) -> Self {
        let transport = HttpTransport::new(&config);
        Self::new(transport, config.retry)
    }
}

impl<T: AdvisoryTransport> AdvisoryStrategy<T> {
    pub fn new(transport: T, retry: RetryPolicy) -> Self {
        Self {
            transport,
            retry,
            fallback: HeuristicStrategy,
        }
    }
}

impl<T: AdvisoryTransport> Strategy for AdvisoryStrategy<T> {
    fn decide(&self, state: &GameState, hand: &[Card]) -> Decision {
        let request = AdviceRequest::from_snapshot(state, hand);

        for attempt in 1..=self.retry.max_attempts {
            let advice = self
                .transport
                .request_advice(&request)
                .and_then(|response| {
                    info!(rationale = %response.rationale, "advice received");
                    response.into_decision(state, hand)
                });

            match advice {
                Ok(decision) => return decision,
                Err(error) => {
                    warn!(attempt, %error, "advisory attempt failed");
                    if attempt < self.retry.max_attempts {
                        thread::sleep(self.retry.backoff);
                    }
                }
            }
        }

        warn!("advisory service unavailable, deciding with the heuristic");
        self.fallback.decide(state, hand)
    }
}
