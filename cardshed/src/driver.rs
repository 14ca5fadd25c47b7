use crate::card::{Card, Color};
use crate::event::GameEvent;
use crate::turn::{DrawnCardChoice, PlayerAction};

/// The external collaborator that supplies decisions and renders state.
///
/// The engine is strictly turn-sequential: each request blocks the current
/// operation until the driver answers, and exactly one decision is pending
/// at any time. Implementations return already-validated enum values; any
/// free-text parsing or re-prompting happens on the driver's side before
/// an answer reaches the engine.
pub trait Driver {
    /// A wild effect needs a color. Called for opening wilds and for every
    /// Wild / Wild Draw Four play by `seat`.
    fn choose_color(&mut self, seat: usize) -> Color;

    /// `seat` may challenge the Wild Draw Four just played by `played_by`.
    fn challenge(&mut self, seat: usize, played_by: usize) -> bool;

    /// Asked once per turn. `legal` lists the hand indices that currently
    /// pass the legality check; a driver may still answer with any action
    /// and have an illegal one rejected without state change.
    fn player_action(&mut self, seat: usize, legal: &[usize]) -> PlayerAction;

    /// Asked after a voluntary draw. `legal` tells whether `drawn` could
    /// be played immediately.
    fn keep_or_play(&mut self, seat: usize, drawn: &Card, legal: bool) -> DrawnCardChoice;

    /// Fire-and-forget rendering hook.
    fn notify(&mut self, event: &GameEvent);
}
