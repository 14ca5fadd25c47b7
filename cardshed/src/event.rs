use crate::card::{Card, Color};
use crate::turn::Direction;

/// Structured notifications pushed to the driver as state changes. Each
/// variant carries the seats and cards involved so a renderer can produce
/// its own narration; the engine formats nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// A round has been dealt and the opening card flipped.
    RoundStarted { opening_card: Card },
    CardPlayed { seat: usize, card: Card },
    /// `forced` distinguishes penalty draws from a voluntary draw.
    CardsDrawn {
        seat: usize,
        cards: Vec<Card>,
        forced: bool,
    },
    /// A draw yielded nothing because deck and discard are down to a
    /// single card.
    DrawFailed { seat: usize },
    SeatSkipped { seat: usize },
    OrderReversed { direction: Direction },
    ColorChosen { seat: usize, color: Color },
    /// A Wild Draw Four was challenged. `play_was_legal` reports the
    /// audit: when true the challenge failed and the challenger is
    /// penalized, when false the original player draws instead.
    ChallengeResolved {
        challenger: usize,
        played_by: usize,
        play_was_legal: bool,
    },
    /// The challenged player's hand, shown to the table before being
    /// reshuffled within itself.
    HandRevealed { seat: usize, cards: Vec<Card> },
    RoundOver { winner: usize },
    RoundScored { winner: usize, points: u32 },
}
