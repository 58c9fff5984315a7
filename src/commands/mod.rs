//! Command implementations for the player evaluation CLI

pub mod common;
pub mod details;
pub mod filter;
pub mod players;
pub mod trade;
