use crate::{
    card::{CardColor, PlayedCard},
    rules::CardEffect,
};

/// One player's choice for their turn. `chosen_color` is mandatory iff
/// the named card is wild-family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Play {
        hand_index: usize,
        chosen_color: Option<CardColor>,
    },
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnRecord {
    Played {
        card: PlayedCard,
        effect: CardEffect,
    },
    Drew,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player_id: u64,
    pub record: TurnRecord,
    pub round_over: bool,
}
