//! # Connect Four
//!
//! A console Connect Four game against a computer opponent that picks its
//! moves with depth-limited minimax and alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`] — Board, pieces, win detection, game session and JSON export
//! - [`ai`] — Heuristic evaluation, minimax search, difficulty-based move selection
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;

#[cfg(test)]
mod test_support;
