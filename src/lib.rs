//! # Connect Four Minimax
//!
//! Connect Four against the computer on a 3×3 grid (three in a row) or the
//! classic 6×7 grid (four in a row). The computer picks its column with an
//! exhaustive fixed-depth minimax search.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, turn state machine
//! - [`ai`] — Agent trait, minimax search engine, random opponent
//! - [`ui`] — Terminal UI and line-prompt front ends
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
