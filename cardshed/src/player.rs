use rand::{seq::SliceRandom, thread_rng};

use crate::card::Card;

/// A seat at the table: its hand and the score it has accumulated across
/// rounds. The hand is mutated only through the engine.
#[derive(Debug)]
pub struct Player {
    pub seat: usize,
    pub hand: Vec<Card>,
    score: u32,
}

impl Player {
    pub(crate) fn new(seat: usize) -> Self {
        Self {
            seat,
            hand: Vec::new(),
            score: 0,
        }
    }

    pub fn card_count(&self) -> usize {
        self.hand.len()
    }

    /// Cumulative match score. Reset only by constructing a new game.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Sum of the point values of the cards still in hand.
    pub fn hand_points(&self) -> u32 {
        self.hand.iter().map(Card::points).sum()
    }

    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub(crate) fn discard_at(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    /// Display order only; never consulted by game logic.
    pub(crate) fn sort_hand(&mut self) {
        self.hand.sort_by_key(Card::sort_key);
    }

    /// Randomizes the hand's order after it has been revealed to the table.
    pub(crate) fn shuffle_hand(&mut self) {
        let mut rng = thread_rng();
        self.hand.shuffle(&mut rng);
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Color, Face};

    #[test]
    fn receive_and_discard_keep_counts_in_step() {
        let mut player = Player::new(0);
        player.receive(Card::Colored(Color::Red, Face::Number(4)));
        player.receive(Card::Wild);
        assert_eq!(player.card_count(), 2);

        let card = player.discard_at(0);
        assert_eq!(card, Card::Colored(Color::Red, Face::Number(4)));
        assert_eq!(player.card_count(), 1);
    }

    #[test]
    fn sort_hand_orders_by_display_key() {
        let mut player = Player::new(0);
        player.receive(Card::WildDrawFour);
        player.receive(Card::Colored(Color::Blue, Face::Number(2)));
        player.receive(Card::Colored(Color::Red, Face::Skip));
        player.receive(Card::Colored(Color::Red, Face::Number(7)));
        player.sort_hand();

        assert_eq!(
            player.hand,
            vec![
                Card::Colored(Color::Red, Face::Number(7)),
                Card::Colored(Color::Red, Face::Skip),
                Card::Colored(Color::Blue, Face::Number(2)),
                Card::WildDrawFour,
            ]
        );
    }

    #[test]
    fn hand_points_sums_the_scoring_table() {
        let mut player = Player::new(0);
        player.receive(Card::Colored(Color::Green, Face::Number(9)));
        player.receive(Card::Colored(Color::Yellow, Face::DrawTwo));
        player.receive(Card::Wild);
        assert_eq!(player.hand_points(), 9 + 20 + 50);
    }

    #[test]
    fn score_accumulates() {
        let mut player = Player::new(3);
        assert_eq!(player.score(), 0);
        player.add_score(120);
        player.add_score(35);
        assert_eq!(player.score(), 155);
    }
}
