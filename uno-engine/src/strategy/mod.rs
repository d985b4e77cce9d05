use std::fmt::Debug;

use strum_macros::{Display, EnumIter, EnumString};

use crate::{card::Card, state::GameState, turn::Decision};

pub mod advisory;
pub mod heuristic;
pub mod random;

pub use advisory::{
    AdvisoryConfig, AdvisoryStrategy, AdvisoryTransport, HttpTransport, RetryPolicy,
};
pub use heuristic::HeuristicStrategy;
pub use random::RandomStrategy;

/// A computer player's turn policy.
pub trait Strategy: Debug {
    /// Picks a decision for `hand` against the current card. May use
    /// internal randomness or external services, but reads `state` as a
    /// snapshot and must come back with a decision the engine will
    /// accept.
    fn decide(&self, state: &GameState, hand: &[Card]) -> Decision;
}

#[derive(Clone, Copy, Debug, Display, EnumString, EnumIter, PartialEq, Eq)]
pub enum Difficulty {
    Rookie,
    Smart,
    Genius,
}

impl Difficulty {
    /// The strategy a bot of this tier plays with. Genius needs a
    /// reasoning service to talk to; without one it plays with the
    /// heuristic instead.
    pub fn into_strategy(self, advisory: Option<AdvisoryConfig>) -> Box<dyn Strategy> {
        match self {
            Difficulty::Rookie => Box::new(RandomStrategy),
            Difficulty::Smart => Box::new(HeuristicStrategy),
            Difficulty::Genius => match advisory {
                Some(config) => Box::new(AdvisoryStrategy::over_http(config)),
                None => Box::new(HeuristicStrategy),
            },
        }
    }
}
