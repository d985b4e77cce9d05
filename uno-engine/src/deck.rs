use rand::{seq::SliceRandom, thread_rng};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::{
    card::{Card, CardColor, ColoredKind, PlayedCard},
    constants::*,
    error::{Result, UnoError},
};

/// Draw pile and discard pile. The front of the draw pile is its top;
/// the back of the discard pile is its top (the current card).
#[derive(Debug)]
pub struct Deck {
    pub(crate) draw_pile: Vec<Card>,
    pub(crate) discard_pile: Vec<PlayedCard>,
}

impl Deck {
    /// The standard 108-card deck, unshuffled.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        // Colored Cards
        for color in CardColor::iter() {
            // Skip Cards
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredKind::Skip));
            }

            // Reverse Cards
            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredKind::Reverse));
            }

            // Draw Two Cards
            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredKind::DrawTwo));
            }

            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredKind::Number(*number)));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::WildDrawFour);
        }

        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
        }
    }

    pub(crate) fn shuffle(&mut self) {
        let mut rng = thread_rng();
        self.draw_pile.shuffle(&mut rng);
    }

    /// Draws `count` cards from the top of the draw pile, recycling the
    /// discard pile when the draw pile runs dry mid-request.
    pub(crate) fn draw(&mut self, count: usize) -> Result<Vec<Card>> {
        if self.draw_pile.len() < count {
            self.reshuffle_from_discard();
        }

        if self.draw_pile.len() < count {
            return Err(UnoError::DeckExhausted {
                requested: count - self.draw_pile.len(),
            });
        }

        Ok(self.draw_pile.drain(0..count).collect::<Vec<_>>())
    }

    pub(crate) fn draw_one(&mut self) -> Result<Card> {
        Ok(self
            .draw(1)?
            .pop()
            .expect("draw(1) returned Ok, so it holds exactly one card"))
    }

    pub(crate) fn discard(&mut self, card: PlayedCard) {
        self.discard_pile.push(card);
    }

    /// Removes and binds the first non-wild card of the draw pile, for
    /// the opening discard. Wild-family cards are left where they sit.
    pub(crate) fn flip_first_colored(&mut self) -> PlayedCard {
        let position = self
            .draw_pile
            .iter()
            .position(|card| matches!(card, Card::Colored(_, _)))
            .expect("a freshly dealt draw pile always holds colored cards");

        let Card::Colored(color, kind) = self.draw_pile.remove(position) else {
            unreachable!("position() only matched colored cards");
        };

        let flipped = kind.into_played_card(color);
        self.discard_pile.push(flipped);
        flipped
    }

    /// Everything but the top discard goes back into the draw pile, with
    /// wild color bindings stripped, and gets shuffled.
    fn reshuffle_from_discard(&mut self) {
        if self.discard_pile.len() < 2 {
            return;
        }

        let top = self
            .discard_pile
            .pop()
            .expect("len checked right above");
        let recycled = self.discard_pile.drain(..).map(PlayedCard::unbind);
        self.draw_pile.extend(recycled);
        self.discard_pile.push(top);
        self.shuffle();

        debug!(
            draw_pile = self.draw_pile.len(),
            "discard pile recycled into draw pile"
        );
    }

    pub fn top_card(&self) -> &PlayedCard {
        self.discard_pile
            .last()
            .expect("the discard pile holds at least the opening card")
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    pub(crate) fn cards_count(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }
}
