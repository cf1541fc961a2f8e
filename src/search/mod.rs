//! Game-tree utilities built on the rules engine.

pub mod perft;
