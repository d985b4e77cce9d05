use rand::{seq::IteratorRandom, thread_rng};
use strum::IntoEnumIterator;

use super::Strategy;
use crate::{
    card::{Card, CardColor, ColoredKind},
    rules,
    state::GameState,
    turn::Decision,
};

const DENIAL_BONUS: i32 = 3;
const KEEPS_WILDS_FOR_LAST_BONUS: i32 = 2;
const COLOR_MAJORITY_BONUS: i32 = 1;

/// Opponents at or below this many cards are about to win.
const ENDANGERED_HAND_SIZE: usize = 2;

/// The Smart tier: scores every legal card and plays the best one.
/// Denial cards jump in value when an opponent is close to going out,
/// wilds are saved for when nothing else is left, and colors the hand is
/// heavy in are shed first.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicStrategy;

impl Strategy for HeuristicStrategy {
    fn decide(&self, state: &GameState, hand: &[Card]) -> Decision {
        let legal = rules::legal_indices(hand, state.current_card());
        if legal.is_empty() {
            return Decision::Draw;
        }

        let opponent_endangered = state
            .opponent_hand_sizes()
            .iter()
            .any(|&size| size <= ENDANGERED_HAND_SIZE);

        // First maximum wins, so earlier hand indices break ties.
        let mut best_index = legal[0];
        let mut best_score = i32::MIN;
        for &index in &legal {
            let score = score_card(hand, index, opponent_endangered);
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }

        let chosen_color = hand[best_index]
            .is_wild_family()
            .then(|| choose_wild_color(hand, best_index));

        Decision::Play {
            hand_index: best_index,
            chosen_color,
        }
    }
}

fn is_denial_card(card: &Card) -> bool {
    matches!(
        card,
        Card::WildDrawFour | Card::Colored(_, ColoredKind::Skip | ColoredKind::DrawTwo)
    )
}

fn score_card(hand: &[Card], index: usize, opponent_endangered: bool) -> i32 {
    let card = &hand[index];
    let mut score = 0;

    if opponent_endangered && is_denial_card(card) {
        score += DENIAL_BONUS;
    }

    let rest = || {
        hand.iter()
            .enumerate()
            .filter(move |(other, _)| *other != index)
            .map(|(_, card)| card)
    };

    // Worth playing if the hand left behind is not wilds-only. Going out
    // entirely counts too.
    if hand.len() == 1 || rest().any(|card| !card.is_wild_family()) {
        score += KEEPS_WILDS_FOR_LAST_BONUS;
    }

    if let Some(color) = card.color() {
        let counts = color_counts(rest());
        let most_held = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
        let held = counts
            .iter()
            .find(|(candidate, _)| *candidate == color)
            .map(|(_, count)| *count)
            .unwrap_or(0);
        if most_held > 0 && held == most_held {
            score += COLOR_MAJORITY_BONUS;
        }
    }

    score
}

fn color_counts<'a>(cards: impl Iterator<Item = &'a Card>) -> Vec<(CardColor, usize)> {
    let mut counts: Vec<(CardColor, usize)> =
        CardColor::iter().map(|color| (color, 0)).collect();

    for card in cards {
        if let Some(color) = card.color() {
            let entry = counts
                .iter_mut()
                .find(|(candidate, _)| *candidate == color)
                .expect("every color is in the table");
            entry.1 += 1;
        }
    }

    counts
}

/// The color the hand holds most of once the played card is gone. Ties
/// go to the declaration order of [`CardColor`]; a hand with no colored
/// cards left gets a uniformly random color.
fn choose_wild_color(hand: &[Card], played_index: usize) -> CardColor {
    let counts = color_counts(
        hand.iter()
            .enumerate()
            .filter(|(index, _)| *index != played_index)
            .map(|(_, card)| card),
    );

    let mut best = counts[0];
    for &entry in &counts[1..] {
        if entry.1 > best.1 {
            best = entry;
        }
    }

    if best.1 == 0 {
        CardColor::iter()
            .choose(&mut thread_rng())
            .expect("there are four colors to pick from")
    } else {
        best.0
    }
}
