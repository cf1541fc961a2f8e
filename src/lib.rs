//! A rules engine for English draughts on a square board: legal-move generation (including
//! multi-capture chains), move application, and turn / victory tracking.

pub mod core;
pub mod draughts;
pub mod error;
pub mod game;
pub mod search;
