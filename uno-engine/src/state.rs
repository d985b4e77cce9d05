use std::collections::VecDeque;

use serde::Serialize;
use strum_macros::Display;

use crate::{
    card::{CardColor, PlayedCard},
    constants::ACTION_LOG_CAPACITY,
    deck::Deck,
    player::Player,
};

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn step(&self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub(crate) fn flip(&mut self) {
        *self = match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        };
    }
}

/// Everything a round owns: players and hands, the two piles, the turn
/// pointer and direction, and the bounded action log. Mutated only by
/// the turn engine; strategies read it through `&GameState`.
#[derive(Debug)]
pub struct GameState {
    pub(crate) players: Vec<Player>,
    pub(crate) current_player_index: usize,
    pub(crate) direction: Direction,
    pub(crate) deck: Deck,
    /// Forced-draw accumulator. Set by a Draw Two / Wild Draw Four
    /// effect and drained in the same transition, so it is always 0
    /// between turns (draw cards do not stack).
    pub(crate) pending_draw: u8,
    pub(crate) action_log: VecDeque<String>,
    pub(crate) round_over: bool,
    pub(crate) winner_id: Option<u64>,
}

impl GameState {
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_card(&self) -> &PlayedCard {
        self.deck.top_card()
    }

    pub fn current_color(&self) -> CardColor {
        self.current_card().color()
    }

    pub fn round_over(&self) -> bool {
        self.round_over
    }

    pub fn winner_id(&self) -> Option<u64> {
        self.winner_id
    }

    /// Most recent actions, oldest first.
    pub fn recent_actions(&self) -> impl Iterator<Item = &str> {
        self.action_log.iter().map(String::as_str)
    }

    /// Hand sizes of everyone except the current player, in seat order.
    pub fn opponent_hand_sizes(&self) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != self.current_player_index)
            .map(|(_, player)| player.cards_count())
            .collect()
    }

    /// The seat `steps` turns ahead of the current one, in the current
    /// direction.
    pub(crate) fn index_at_offset(&self, steps: usize) -> usize {
        let len = self.players.len() as isize;
        let offset = self.direction.step() * steps as isize;
        (self.current_player_index as isize + offset).rem_euclid(len) as usize
    }

    pub(crate) fn advance(&mut self, steps: usize) {
        self.current_player_index = self.index_at_offset(steps);
    }

    pub(crate) fn log_action(&mut self, message: String) {
        if self.action_log.len() == ACTION_LOG_CAPACITY {
            self.action_log.pop_front();
        }
        self.action_log.push_back(message);
    }
}
