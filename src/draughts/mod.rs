//! Draughts rules: pieces, opening layout, move generation and application.

pub mod apply;
pub mod config;
pub mod layout;
pub mod movegen;
pub mod piece;
pub mod rules;
