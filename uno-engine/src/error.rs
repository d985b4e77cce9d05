use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    /// A strategy (or a human input layer that skipped its own
    /// validation) handed the engine a decision that breaks the rules.
    /// This is a bug in the caller, not a game condition.
    #[error("Illegal decision: {0}")]
    IllegalDecision(String),
    #[error("Invalid color choice: {0}")]
    InvalidColorChoice(String),
    /// Draw pile, discard pile and hands together cannot supply the
    /// requested cards. Unreachable while card conservation holds.
    #[error("Deck cannot supply {requested} more cards")]
    DeckExhausted { requested: usize },
    #[error("The round is already over")]
    RoundOver,
    /// The current seat is not driven by this call: `play_turn` was
    /// asked to act for a human, or `play_human_turn` for a bot.
    #[error("The current seat is decided elsewhere")]
    ExternalSeat,
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
