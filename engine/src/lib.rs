//! Tic-Tac-Toe rules and an automated opponent with three difficulty tiers.
//!
//! [`tictactoe::evaluate`] reports whether a board has a completed line and
//! which one; [`tictactoe::calculate_move`] (or its integer form
//! [`tictactoe::select_move`]) picks the bot's next cell.

pub mod config;
pub mod logger;
pub mod session_rng;
pub mod tictactoe;

pub use session_rng::SessionRng;
