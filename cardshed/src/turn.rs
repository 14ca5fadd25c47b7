/// Seat rotation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub(crate) fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// The decision a driver submits for the current seat's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    /// Play the hand card at this index.
    Play(usize),
    /// Draw from the deck instead of playing.
    Draw,
}

/// What to do with a freshly drawn card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawnCardChoice {
    Keep,
    Play,
}

/// Reported after every resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    Continue,
    RoundOver { winner: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_direction_twice_is_identity() {
        assert_eq!(
            Direction::Clockwise.flipped(),
            Direction::CounterClockwise
        );
        assert_eq!(Direction::Clockwise.flipped().flipped(), Direction::Clockwise);
    }
}
