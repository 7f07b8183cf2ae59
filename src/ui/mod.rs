//! Terminal front ends: a full-screen game view with a column selector, and a
//! plain prompt loop that reads column numbers line by line.

mod app;
mod game_view;
pub mod prompt;

pub use app::App;
pub use prompt::run_prompt;
