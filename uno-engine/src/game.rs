use std::collections::VecDeque;

use tracing::{debug, info};

use crate::{
    constants::{MAX_PLAYERS, MIN_PLAYERS, STARTING_HAND_SIZE},
    deck::Deck,
    error::{Result, UnoError},
    player::Player,
    rules::{self, CardEffect},
    state::{Direction, GameState},
    strategy::Strategy,
    turn::{Decision, TurnOutcome, TurnRecord},
};

/// Who answers for a seat when its turn comes up. The engine never looks
/// past this: a bot's difficulty is baked into the strategy it was
/// created with.
#[derive(Debug)]
pub enum Controller {
    /// Decisions arrive from outside through [`Game::play_human_turn`].
    Human,
    Bot(Box<dyn Strategy>),
}

#[derive(Debug)]
pub struct Seat {
    name: String,
    controller: Controller,
}

impl Seat {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Human,
        }
    }

    pub fn bot(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            controller: Controller::Bot(strategy),
        }
    }
}

/// The turn engine. Owns the round's [`GameState`] and is its only
/// writer; strategies and frontends read snapshots through [`Game::state`].
#[derive(Debug)]
pub struct Game {
    state: GameState,
    controllers: Vec<Controller>,
}

impl Game {
    /// Deals a fresh round: shuffled standard deck, seven cards per
    /// seat, and the first non-wild card of the draw pile flipped as the
    /// opening discard. An opening action card is left unresolved; the
    /// first player simply has to answer it.
    pub fn new(seats: Vec<Seat>) -> Result<Self> {
        if seats.len() < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if seats.len() > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }

        let mut deck = Deck::standard();
        deck.shuffle();

        let mut players = Vec::with_capacity(seats.len());
        let mut controllers = Vec::with_capacity(seats.len());

        for (index, seat) in seats.into_iter().enumerate() {
            let cards = deck.draw(STARTING_HAND_SIZE)?;
            players.push(Player::new(index as u64, seat.name, cards));
            controllers.push(seat.controller);
        }

        let first_card = deck.flip_first_colored();

        let mut state = GameState {
            players,
            current_player_index: 0,
            direction: Direction::Clockwise,
            deck,
            pending_draw: 0,
            action_log: VecDeque::new(),
            round_over: false,
            winner_id: None,
        };

        info!(players = state.players.len(), %first_card, "round started");
        state.log_action("Game started".to_string());
        state.log_action(format!("First card: {first_card}"));

        Ok(Self { state, controllers })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> &Player {
        &self.state.players[self.state.current_player_index]
    }

    pub fn player(&self, id: u64) -> Option<&Player> {
        self.state.players.iter().find(|player| player.id == id)
    }

    pub fn player_mut(&mut self, id: u64) -> Option<&mut Player> {
        self.state.players.iter_mut().find(|player| player.id == id)
    }

    pub fn is_round_over(&self) -> bool {
        self.state.round_over
    }

    pub fn winner_id(&self) -> Option<u64> {
        self.state.winner_id
    }

    /// True when the engine is waiting on [`Game::play_human_turn`].
    pub fn needs_human_decision(&self) -> bool {
        !self.state.round_over
            && matches!(
                self.controllers[self.state.current_player_index],
                Controller::Human
            )
    }

    /// The current player's playable hand indices, for an input layer
    /// that presents legal options before submitting a decision.
    pub fn legal_hand_indices(&self) -> Vec<usize> {
        rules::legal_indices(&self.current_player().hand, self.state.current_card())
    }

    /// Cards across the draw pile, discard pile and every hand. Always
    /// the full deck.
    pub fn total_cards(&self) -> usize {
        self.state.deck.cards_count()
            + self
                .state
                .players
                .iter()
                .map(Player::cards_count)
                .sum::<usize>()
    }

    /// Runs the current bot seat's turn: asks its strategy for a
    /// decision over a read-only snapshot, validates it, resolves it.
    /// A validation failure here means the strategy is buggy.
    pub fn play_turn(&mut self) -> Result<TurnOutcome> {
        if self.state.round_over {
            return Err(UnoError::RoundOver);
        }

        let Controller::Bot(strategy) = &self.controllers[self.state.current_player_index] else {
            return Err(UnoError::ExternalSeat);
        };

        let decision = strategy.decide(&self.state, &self.current_player().hand);
        self.resolve(decision)
    }

    /// Applies a decision supplied by the external input layer for the
    /// current human seat. An `Err` leaves the state untouched, so the
    /// caller can re-prompt.
    pub fn play_human_turn(&mut self, decision: Decision) -> Result<TurnOutcome> {
        if self.state.round_over {
            return Err(UnoError::RoundOver);
        }

        if !matches!(
            self.controllers[self.state.current_player_index],
            Controller::Human
        ) {
            return Err(UnoError::ExternalSeat);
        }

        self.resolve(decision)
    }

    fn resolve(&mut self, decision: Decision) -> Result<TurnOutcome> {
        let index = self.state.current_player_index;
        let player = &self.state.players[index];
        rules::validate(&decision, &player.hand, self.state.current_card())?;

        let player_id = player.id;
        let name = player.name().to_string();

        let record = match decision {
            Decision::Draw => {
                let card = self.state.deck.draw_one()?;
                self.state.players[index].add_card(card);
                debug!(player = %name, "drew a card");
                self.state.log_action(format!("{name} drew a card"));
                self.state.advance(1);
                TurnRecord::Drew
            }
            Decision::Play {
                hand_index,
                chosen_color,
            } => {
                let card = self.state.players[index].remove_card(hand_index);
                let bind_color = chosen_color
                    .or_else(|| card.color())
                    .expect("validate() accepted the play, so a color source exists");
                let played = card.into_played_card(bind_color);

                self.state.deck.discard(played);
                info!(player = %name, card = %played, "card played");
                self.state.log_action(format!("{name} played {played}"));
                if played.is_wild_family() {
                    self.state
                        .log_action(format!("Color changed to {}", played.color()));
                }

                let effect = rules::effect_of(&played);
                let steps = self.apply_effect(effect)?;

                match self.state.players[index].cards_count() {
                    0 => {
                        self.state.round_over = true;
                        self.state.winner_id = Some(player_id);
                        info!(winner = %name, "round over");
                        self.state.log_action(format!("{name} wins the round"));
                    }
                    1 => {
                        info!(player = %name, "UNO");
                        self.state.log_action(format!("{name} declares UNO"));
                        self.state.advance(steps);
                    }
                    _ => self.state.advance(steps),
                }

                TurnRecord::Played {
                    card: played,
                    effect,
                }
            }
        };

        Ok(TurnOutcome {
            player_id,
            record,
            round_over: self.state.round_over,
        })
    }

    /// Resolves a card's turn-order and draw consequences. Returns how
    /// many steps the turn pointer advances afterwards. A forced draw is
    /// dealt to the affected player here, before the pointer ever
    /// reaches them.
    fn apply_effect(&mut self, effect: CardEffect) -> Result<usize> {
        match effect {
            CardEffect::None => Ok(1),
            CardEffect::SkipNext => {
                let skipped = self.state.index_at_offset(1);
                let name = self.state.players[skipped].name().to_string();
                self.state.log_action(format!("{name} was skipped"));
                Ok(2)
            }
            CardEffect::Reverse => {
                self.state.direction.flip();
                self.state.log_action("Direction reversed".to_string());
                // With two players the turn comes straight back, as if
                // the card were a Skip.
                Ok(if self.state.players.len() == 2 { 2 } else { 1 })
            }
            CardEffect::ForcedDraw(count) => {
                self.state.pending_draw += count;
                let affected = self.state.index_at_offset(1);
                let count = usize::from(std::mem::take(&mut self.state.pending_draw));

                let cards = self.state.deck.draw(count)?;
                let victim = &mut self.state.players[affected];
                let name = victim.name().to_string();
                for card in cards {
                    victim.add_card(card);
                }

                self.state.log_action(format!("{name} drew {count} cards"));
                Ok(2)
            }
        }
    }
}
