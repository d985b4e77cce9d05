use rand::{
    seq::{IteratorRandom, SliceRandom},
    thread_rng, Rng,
};
use strum::IntoEnumIterator;

use super::Strategy;
use crate::{
    card::{Card, CardColor},
    rules,
    state::GameState,
    turn::Decision,
};

/// How often a playable card is passed up for a draw anyway.
const MISPLAY_DRAW_CHANCE: f64 = 0.3;

/// The Rookie tier: picks uniformly among legal plays, and sometimes
/// draws even though it could play.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn decide(&self, state: &GameState, hand: &[Card]) -> Decision {
        let mut rng = thread_rng();
        let legal = rules::legal_indices(hand, state.current_card());

        if legal.is_empty() || rng.gen_bool(MISPLAY_DRAW_CHANCE) {
            return Decision::Draw;
        }

        let hand_index = *legal.choose(&mut rng).expect("legal set is not empty");
        let chosen_color = hand[hand_index].is_wild_family().then(|| {
            CardColor::iter()
                .choose(&mut rng)
                .expect("there are four colors to pick from")
        });

        Decision::Play {
            hand_index,
            chosen_color,
        }
    }
}
