//! Application layer - orchestrates the turn cycle over the ports.

pub mod turn;

pub use turn::{OpenTurn, TurnCycle, TurnError};
