use tracing::debug;

use crate::card::{Card, Color, Face};
use crate::constants::{HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS, TARGET_SCORE};
use crate::deck::Deck;
use crate::driver::Driver;
use crate::error::{GameError, Result};
use crate::event::GameEvent;
use crate::player::Player;
use crate::turn::{Direction, DrawnCardChoice, PlayOutcome, PlayerAction};

/// The turn engine. Owns the deck, the discard pile, the seats and the
/// round state; every mutation goes through its methods.
///
/// A `Game` spans a whole match: scores accumulate across rounds, and
/// [`Game::start_round`] re-deals with the same seats.
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    deck: Deck,
    discard: Vec<Card>,
    turn: usize,
    direction: Direction,
    wild_color: Option<Color>,
    winner: Option<usize>,
}

impl Game {
    /// Seats `num_players` players with empty hands and zero scores.
    /// No round is dealt until [`Game::start_round`].
    pub fn new(num_players: usize) -> Result<Self> {
        if num_players < MIN_PLAYERS {
            return Err(GameError::TooFewPlayers);
        }
        if num_players > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }

        Ok(Self {
            players: (0..num_players).map(Player::new).collect(),
            deck: Deck::full(),
            discard: Vec::new(),
            turn: 1,
            direction: Direction::Clockwise,
            wild_color: None,
            winner: None,
        })
    }

    /// Deals a fresh round: rebuilds and shuffles the deck, deals seven
    /// cards per seat, flips the opening card and applies its effect.
    /// Scores carry over; everything else resets.
    pub fn start_round(&mut self, driver: &mut dyn Driver) {
        self.deck = Deck::full();
        self.discard.clear();
        self.turn = 1;
        self.direction = Direction::Clockwise;
        self.wild_color = None;
        self.winner = None;

        self.deal(driver);
        self.flip_opening_card();

        let opening = *self
            .discard
            .last()
            .expect("the opening flip always leaves a discard top");
        driver.notify(&GameEvent::RoundStarted {
            opening_card: opening,
        });
        debug!(%opening, "round started");

        self.apply_opening_effect(opening, driver);
    }

    /// Seven cards to every seat, one at a time in seat order, then each
    /// hand is sorted for display.
    pub(crate) fn deal(&mut self, driver: &mut dyn Driver) {
        for seat in 0..self.players.len() {
            self.players[seat].hand.clear();
            for _ in 0..HAND_SIZE {
                self.draw_to_seat(seat, driver);
            }
            self.players[seat].sort_hand();
        }
    }

    /// Moves the deck's top card to the discard pile. A flipped Wild Draw
    /// Four goes back into the deck and the flip is retried, so a round
    /// never opens on an unresolvable forced draw.
    pub(crate) fn flip_opening_card(&mut self) {
        loop {
            let card = self
                .deck
                .draw()
                .expect("a fresh deck cannot run out before the opening flip");
            if card == Card::WildDrawFour {
                self.deck.put_back(card);
                self.deck.shuffle();
            } else {
                self.discard.push(card);
                return;
            }
        }
    }

    fn apply_opening_effect(&mut self, opening: Card, driver: &mut dyn Driver) {
        match opening {
            Card::Colored(_, Face::Skip) => {
                driver.notify(&GameEvent::SeatSkipped { seat: self.turn });
                self.advance_turn();
            }
            Card::Colored(_, Face::DrawTwo) => {
                self.force_draw(self.turn, 2, driver);
                self.advance_turn();
            }
            Card::Colored(_, Face::Reverse) => {
                self.direction = Direction::CounterClockwise;
                driver.notify(&GameEvent::OrderReversed {
                    direction: self.direction,
                });
                self.advance_turn();
            }
            Card::Wild => {
                let color = driver.choose_color(self.turn);
                self.wild_color = Some(color);
                driver.notify(&GameEvent::ColorChosen {
                    seat: self.turn,
                    color,
                });
            }
            // Wild Draw Four is excluded by the flip retry; numbers have
            // no opening effect.
            _ => {}
        }
    }

    /// Whether `card` may be played on the current discard top. Pure.
    pub fn can_play(&self, card: &Card) -> bool {
        let Some(top) = self.discard.last() else {
            return false;
        };

        if let (Some(wild), Card::Colored(color, _)) = (self.wild_color, card) {
            if *color == wild {
                return true;
            }
        }
        if let (Card::Colored(color, _), Card::Colored(top_color, _)) = (card, top) {
            if color == top_color {
                return true;
            }
        }
        if card.rank_code() == top.rank_code() {
            return true;
        }
        matches!(card, Card::Wild | Card::WildDrawFour)
    }

    /// Hand indices of `seat` that currently pass the legality check.
    pub fn legal_indices(&self, seat: usize) -> Vec<usize> {
        self.players[seat]
            .hand
            .iter()
            .enumerate()
            .filter_map(|(index, card)| self.can_play(card).then_some(index))
            .collect()
    }

    /// Plays the card at `index` from `seat`'s hand. Rejected moves leave
    /// the engine untouched so the driver can re-prompt.
    pub fn play_card(
        &mut self,
        seat: usize,
        index: usize,
        driver: &mut dyn Driver,
    ) -> Result<PlayOutcome> {
        self.ensure_live_round()?;
        if seat != self.turn {
            return Err(GameError::NotYourTurn {
                seat,
                current: self.turn,
            });
        }
        let hand_size = self.players[seat].hand.len();
        if index >= hand_size {
            return Err(GameError::CardIndexOutOfRange { index, hand_size });
        }
        if !self.can_play(&self.players[seat].hand[index]) {
            return Err(GameError::IllegalCard);
        }

        Ok(self.resolve_play(seat, index, driver))
    }

    /// The current seat draws one card. When the supply is exhausted the
    /// draw silently yields nothing and the turn is forfeited. Otherwise
    /// the driver decides whether to keep the card or play it at once.
    pub fn draw_card(&mut self, seat: usize, driver: &mut dyn Driver) -> Result<PlayOutcome> {
        self.ensure_live_round()?;
        if seat != self.turn {
            return Err(GameError::NotYourTurn {
                seat,
                current: self.turn,
            });
        }

        let Some(card) = self.draw_to_seat(seat, driver) else {
            self.advance_turn();
            return Ok(PlayOutcome::Continue);
        };
        driver.notify(&GameEvent::CardsDrawn {
            seat,
            cards: vec![card],
            forced: false,
        });

        let legal = self.can_play(&card);
        if driver.keep_or_play(seat, &card, legal) == DrawnCardChoice::Play && legal {
            let index = self.players[seat].hand.len() - 1;
            return Ok(self.resolve_play(seat, index, driver));
        }

        self.players[seat].sort_hand();
        self.advance_turn();
        Ok(PlayOutcome::Continue)
    }

    /// Drives one full turn: asks the driver for the current seat's
    /// decision and dispatches it. An invalid answer surfaces as an error
    /// with no state change, so the driver may retry indefinitely.
    pub fn play_turn(&mut self, driver: &mut dyn Driver) -> Result<PlayOutcome> {
        self.ensure_live_round()?;
        let seat = self.turn;
        let legal = self.legal_indices(seat);
        match driver.player_action(seat, &legal) {
            PlayerAction::Play(index) => self.play_card(seat, index, driver),
            PlayerAction::Draw => self.draw_card(seat, driver),
        }
    }

    /// Tallies the finished round: every losing hand's points go to the
    /// winner's cumulative score. Returns the points awarded.
    pub fn score_round(&mut self, driver: &mut dyn Driver) -> Result<u32> {
        let winner = self.winner.ok_or(GameError::NoWinnerYet)?;
        let points: u32 = self
            .players
            .iter()
            .filter(|player| player.seat != winner)
            .map(Player::hand_points)
            .sum();
        self.players[winner].add_score(points);
        driver.notify(&GameEvent::RoundScored { winner, points });
        debug!(winner, points, "round scored");
        Ok(points)
    }

    /// The first seat whose cumulative score has reached the match
    /// target, if any.
    pub fn match_winner(&self) -> Option<usize> {
        self.players
            .iter()
            .find(|player| player.score() >= TARGET_SCORE)
            .map(|player| player.seat)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn player_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    pub fn current_turn(&self) -> usize {
        self.turn
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The discard top, which constrains the next play.
    pub fn active_card(&self) -> Option<&Card> {
        self.discard.last()
    }

    /// The color in force while the active card is wild.
    pub fn wild_color(&self) -> Option<Color> {
        self.wild_color
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    pub fn discard_size(&self) -> usize {
        self.discard.len()
    }

    fn ensure_live_round(&self) -> Result<()> {
        if self.discard.is_empty() {
            return Err(GameError::RoundNotStarted);
        }
        if let Some(winner) = self.winner {
            return Err(GameError::RoundOver { winner });
        }
        Ok(())
    }

    /// Discards the chosen card and applies its effect. Preconditions have
    /// already been checked; the discard happens first in all cases.
    fn resolve_play(&mut self, seat: usize, index: usize, driver: &mut dyn Driver) -> PlayOutcome {
        let card = self.players[seat].discard_at(index);
        self.discard.push(card);
        if matches!(card, Card::Colored(_, _)) {
            // A colored top supersedes any previously called wild color.
            self.wild_color = None;
        }
        driver.notify(&GameEvent::CardPlayed { seat, card });
        debug!(seat, %card, "card played");

        match card {
            Card::Colored(_, Face::Number(_)) => self.advance_turn(),
            Card::Colored(_, Face::Skip) => self.skip_next(driver),
            Card::Colored(_, Face::DrawTwo) => {
                self.advance_turn();
                self.force_draw(self.turn, 2, driver);
                driver.notify(&GameEvent::SeatSkipped { seat: self.turn });
                self.advance_turn();
            }
            Card::Colored(_, Face::Reverse) => {
                if self.players.len() == 2 {
                    // With two seats, toggling direction would hand the
                    // turn straight back to the player, so Reverse acts
                    // as Skip.
                    self.skip_next(driver);
                } else {
                    self.direction = self.direction.flipped();
                    driver.notify(&GameEvent::OrderReversed {
                        direction: self.direction,
                    });
                    self.advance_turn();
                }
            }
            Card::Wild => {
                let color = driver.choose_color(seat);
                self.wild_color = Some(color);
                driver.notify(&GameEvent::ColorChosen { seat, color });
                self.advance_turn();
            }
            Card::WildDrawFour => self.resolve_wild_draw_four(seat, driver),
        }

        if self.players[seat].hand.is_empty() {
            self.winner = Some(seat);
            driver.notify(&GameEvent::RoundOver { winner: seat });
            debug!(winner = seat, "round over");
            return PlayOutcome::RoundOver { winner: seat };
        }
        PlayOutcome::Continue
    }

    /// The Wild Draw Four challenge protocol. The card is already on the
    /// discard; the legality audit runs against the card beneath it and
    /// the wild color that was in force, before the new color is called.
    fn resolve_wild_draw_four(&mut self, seat: usize, driver: &mut dyn Driver) {
        let beneath = self.discard[self.discard.len() - 2];
        let prior_wild = self.wild_color;
        let was_legal = !self.players[seat].hand.iter().any(|card| match card {
            Card::Colored(color, _) => match beneath {
                Card::Colored(beneath_color, _) => *color == beneath_color,
                _ => prior_wild == Some(*color),
            },
            // Holding other wild cards never makes the play illegal.
            _ => false,
        });

        let color = driver.choose_color(seat);
        self.wild_color = Some(color);
        driver.notify(&GameEvent::ColorChosen { seat, color });

        self.advance_turn();
        let challenger = self.turn;
        if driver.challenge(challenger, seat) {
            // The hand is shown to the table and then reshuffled within
            // itself before any drawing happens.
            driver.notify(&GameEvent::HandRevealed {
                seat,
                cards: self.players[seat].hand.clone(),
            });
            self.players[seat].shuffle_hand();
            driver.notify(&GameEvent::ChallengeResolved {
                challenger,
                played_by: seat,
                play_was_legal: was_legal,
            });
            debug!(challenger, seat, was_legal, "wild draw four challenged");
            if was_legal {
                self.force_draw(challenger, 6, driver);
            } else {
                self.force_draw(seat, 4, driver);
            }
        } else {
            self.force_draw(challenger, 4, driver);
        }

        // The challenger's turn is skipped in every branch.
        driver.notify(&GameEvent::SeatSkipped { seat: challenger });
        self.advance_turn();
    }

    /// Draws one card for `seat`, recycling the discard pile (all but its
    /// top card) into the deck when the deck runs out. Yields `None` when
    /// both piles are down to a single card; the caller decides what a
    /// failed draw means.
    fn draw_to_seat(&mut self, seat: usize, driver: &mut dyn Driver) -> Option<Card> {
        if self.deck.is_empty() {
            self.recycle_discard();
            if self.deck.is_empty() {
                driver.notify(&GameEvent::DrawFailed { seat });
                debug!(seat, "supply exhausted, draw yields nothing");
                return None;
            }
        }
        let card = self.deck.draw()?;
        self.players[seat].receive(card);
        Some(card)
    }

    /// Penalty draw of `count` cards, then the hand is re-sorted for
    /// display. Each card honors reshuffle-on-empty; cards that cannot be
    /// supplied are silently skipped.
    fn force_draw(&mut self, seat: usize, count: usize, driver: &mut dyn Driver) {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            match self.draw_to_seat(seat, driver) {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        if !drawn.is_empty() {
            driver.notify(&GameEvent::CardsDrawn {
                seat,
                cards: drawn,
                forced: true,
            });
        }
        self.players[seat].sort_hand();
    }

    fn recycle_discard(&mut self) {
        if self.discard.len() <= 1 {
            return;
        }
        let top = self
            .discard
            .pop()
            .expect("discard holds more than one card here");
        self.deck.refill(std::mem::take(&mut self.discard));
        self.deck.shuffle();
        self.discard.push(top);
        debug!(recycled = self.deck.len(), "discard recycled into deck");
    }

    fn skip_next(&mut self, driver: &mut dyn Driver) {
        self.advance_turn();
        driver.notify(&GameEvent::SeatSkipped { seat: self.turn });
        self.advance_turn();
    }

    fn advance_turn(&mut self) {
        let seats = self.players.len();
        self.turn = match self.direction {
            Direction::Clockwise => (self.turn + 1) % seats,
            Direction::CounterClockwise => (self.turn + seats - 1) % seats,
        };
    }
}
