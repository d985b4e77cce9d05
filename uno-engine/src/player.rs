use crate::card::Card;

#[derive(Debug)]
pub struct Player {
    pub id: u64,
    name: String,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(id: u64, name: String, cards: Vec<Card>) -> Self {
        Self {
            id,
            name,
            hand: cards,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn remove_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }
}
