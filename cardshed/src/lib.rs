//! Turn-based engine for a shedding-type card game: a 108-card deck of
//! colored number and action cards plus wilds, played until one seat
//! empties its hand and collects the points left in the others.
//!
//! The crate is the engine only. Input parsing and rendering belong to an
//! external driver, which implements [`driver::Driver`] and calls into
//! [`game::Game`] one blocking decision at a time.

pub mod card;
mod constants;
pub mod deck;
pub mod driver;
pub mod error;
pub mod event;
pub mod game;
pub mod player;
pub mod turn;
