use core::fmt;
use std::fmt::Display;

use serde::Serialize;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// The four real colors. Declaration order is the fixed tie-break
/// priority used when a strategy has to pick between equally held colors.
#[derive(
    Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Serialize,
)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColoredKind {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl ColoredKind {
    pub fn into_played_card(self, color: CardColor) -> PlayedCard {
        PlayedCard::Colored(color, self)
    }
}

/// A card as it sits in the draw pile or a hand. Wild-family cards carry
/// no color here; they are bound to one when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Card {
    Colored(CardColor, ColoredKind),
    Wild,
    WildDrawFour,
}

impl Card {
    pub fn is_wild_family(&self) -> bool {
        matches!(self, Card::Wild | Card::WildDrawFour)
    }

    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::WildDrawFour => None,
        }
    }

    /// Binds the card to a color, producing the value that goes onto the
    /// discard pile. `chosen` is only consulted for wild-family cards; a
    /// colored card always keeps its printed color.
    pub fn into_played_card(self, chosen: CardColor) -> PlayedCard {
        match self {
            Card::Colored(color, kind) => PlayedCard::Colored(color, kind),
            Card::Wild => PlayedCard::Wild(chosen),
            Card::WildDrawFour => PlayedCard::WildDrawFour(chosen),
        }
    }
}

/// A card on the discard pile, with its color binding resolved. The top
/// of the discard pile is what legality checks run against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayedCard {
    Colored(CardColor, ColoredKind),
    Wild(CardColor),
    WildDrawFour(CardColor),
}

impl PlayedCard {
    pub fn color(&self) -> CardColor {
        match self {
            PlayedCard::Colored(color, _) => *color,
            PlayedCard::Wild(color) => *color,
            PlayedCard::WildDrawFour(color) => *color,
        }
    }

    pub fn is_wild_family(&self) -> bool {
        matches!(self, PlayedCard::Wild(_) | PlayedCard::WildDrawFour(_))
    }

    /// Strips the color binding again, for recycling the discard pile
    /// into a fresh draw pile. A wild played as Red goes back to being a
    /// plain wild.
    pub fn unbind(self) -> Card {
        match self {
            PlayedCard::Colored(color, kind) => Card::Colored(color, kind),
            PlayedCard::Wild(_) => Card::Wild,
            PlayedCard::WildDrawFour(_) => Card::WildDrawFour,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, kind) => {
                write!(f, "{} {}", color, {
                    match kind {
                        ColoredKind::Number(number) => number.to_string(),
                        ColoredKind::Skip => "Skip".to_string(),
                        ColoredKind::Reverse => "Reverse".to_string(),
                        ColoredKind::DrawTwo => "Draw Two".to_string(),
                    }
                })
            }
            Card::Wild => write!(f, "Wild"),
            Card::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

impl Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayedCard::Colored(_, _) => write!(f, "{}", self.unbind()),
            PlayedCard::Wild(color) => write!(f, "Wild ({})", color),
            PlayedCard::WildDrawFour(color) => write!(f, "Wild Draw Four ({})", color),
        }
    }
}
