use crate::game::GameState;

/// A computer player: picks a column for the side to move.
pub trait Agent {
    /// Select a column given the current game state. Only called on
    /// non-terminal states; the returned column must be legal.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Which computer opponent to play against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    #[default]
    Minimax,
    Random,
}

impl Opponent {
    /// Build the agent. `depth` only applies to minimax and `seed` only to
    /// the random opponent.
    pub fn build(self, depth: usize, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            Opponent::Minimax => Box::new(super::MinimaxAgent::new(depth)),
            Opponent::Random => match seed {
                Some(seed) => Box::new(super::RandomAgent::seeded(seed)),
                None => Box::new(super::RandomAgent::new()),
            },
        }
    }
}

/// Plays a fixed list of columns, for driving front ends in tests.
#[cfg(test)]
pub(crate) struct ScriptedAgent {
    moves: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedAgent {
    pub(crate) fn new(moves: &[usize]) -> Self {
        ScriptedAgent {
            moves: moves.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl Agent for ScriptedAgent {
    fn select_action(&mut self, _state: &GameState) -> usize {
        self.moves.pop_front().expect("script ran out of moves")
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}
