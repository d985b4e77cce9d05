use crate::{
    card::{Card, ColoredKind, PlayedCard},
    constants::{DRAW_TWO_PENALTY, WILD_DRAW_FOUR_PENALTY},
    error::{Result, UnoError},
    turn::Decision,
};

/// What a played card does to the turn order, beyond becoming the
/// current card. Color binding is already carried by [`PlayedCard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardEffect {
    None,
    SkipNext,
    Reverse,
    /// The next player draws this many cards and loses their turn.
    ForcedDraw(u8),
}

/// A card is playable iff it shares the current color, matches the
/// current card's kind (numbers only match the same number), or is
/// wild-family.
pub fn is_legal(card: &Card, top: &PlayedCard) -> bool {
    let Card::Colored(color, kind) = card else {
        return true;
    };

    if *color == top.color() {
        return true;
    }

    match top {
        PlayedCard::Colored(_, top_kind) => kind == top_kind,
        // A bound wild only matches by color.
        PlayedCard::Wild(_) | PlayedCard::WildDrawFour(_) => false,
    }
}

pub fn legal_indices(hand: &[Card], top: &PlayedCard) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| is_legal(card, top))
        .map(|(index, _)| index)
        .collect()
}

pub fn effect_of(card: &PlayedCard) -> CardEffect {
    match card {
        PlayedCard::Colored(_, kind) => match kind {
            ColoredKind::Number(_) => CardEffect::None,
            ColoredKind::Skip => CardEffect::SkipNext,
            ColoredKind::Reverse => CardEffect::Reverse,
            ColoredKind::DrawTwo => CardEffect::ForcedDraw(DRAW_TWO_PENALTY),
        },
        PlayedCard::Wild(_) => CardEffect::None,
        PlayedCard::WildDrawFour(_) => CardEffect::ForcedDraw(WILD_DRAW_FOUR_PENALTY),
    }
}

/// Checks a decision against the hand it came from and the current card.
/// Drawing is always allowed; a play must name a card in the hand that
/// is legal right now, with a color choice exactly when the card is
/// wild-family.
pub(crate) fn validate(decision: &Decision, hand: &[Card], top: &PlayedCard) -> Result<()> {
    let Decision::Play {
        hand_index,
        chosen_color,
    } = decision
    else {
        return Ok(());
    };

    let Some(card) = hand.get(*hand_index) else {
        return Err(UnoError::IllegalDecision(format!(
            "hand index {hand_index} is out of range for a hand of {}",
            hand.len()
        )));
    };

    if !is_legal(card, top) {
        return Err(UnoError::IllegalDecision(format!(
            "{card} cannot be played on {top}"
        )));
    }

    match (card.is_wild_family(), chosen_color) {
        (true, None) => Err(UnoError::InvalidColorChoice(format!(
            "playing {card} requires choosing a color"
        ))),
        (false, Some(color)) => Err(UnoError::InvalidColorChoice(format!(
            "{card} keeps its printed color, but {color} was chosen"
        ))),
        _ => Ok(()),
    }
}
