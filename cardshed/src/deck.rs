use rand::{seq::SliceRandom, thread_rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Card, Color, Face},
    constants::*,
};

/// The draw pile. The top of the deck is the end of the vec, so drawing is
/// a pop and returning the opening flip is a push.
#[derive(Debug)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Builds the full 108-card composition, pre-shuffled.
    pub fn full() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in Color::iter() {
            for _ in 0..SKIP_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, Face::Skip));
            }

            for _ in 0..REVERSE_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, Face::Reverse));
            }

            for _ in 0..DRAW_TWO_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, Face::DrawTwo));
            }

            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::Colored(color, Face::Number(*number)));
            }
        }

        for _ in 0..WILD_CARDS_IN_DECK {
            cards.push(Card::Wild);
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::WildDrawFour);
        }

        let mut deck = Self(cards);
        deck.shuffle();
        deck
    }

    pub(crate) fn shuffle(&mut self) {
        let mut rng = thread_rng();
        self.0.shuffle(&mut rng);
    }

    pub(crate) fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    pub(crate) fn put_back(&mut self, card: Card) {
        self.0.push(card);
    }

    /// Refills the deck from recycled discards. The caller shuffles.
    pub(crate) fn refill(&mut self, cards: Vec<Card>) {
        self.0.extend(cards);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
