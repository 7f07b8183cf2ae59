//! Computer opponents: the fixed-depth minimax search engine and a random
//! sparring partner, both behind the [`Agent`] trait.

mod agent;
pub mod minimax;
mod random;

pub use agent::{Agent, Opponent};
#[cfg(test)]
pub(crate) use agent::ScriptedAgent;
pub use minimax::{choose_move, minimax, MinimaxAgent, Score, SearchResult, DEFAULT_DEPTH};
pub use random::RandomAgent;
