use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four_minimax::ai::Opponent;
use connect_four_minimax::config::AppConfig;
use connect_four_minimax::game::{GameState, GridShape};
use connect_four_minimax::ui::{run_prompt, App};

/// Play Connect Four against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect_four_minimax", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Board: small (3x3, three in a row) or standard (6x7, four in a row)
    #[arg(long, value_parser = parse_grid)]
    grid: Option<GridShape>,

    /// Override the minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Computer opponent
    #[arg(long, value_enum)]
    opponent: Option<Opponent>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer make the first move
    #[arg(long)]
    ai_first: bool,

    /// Line-by-line prompt instead of the full-screen board
    #[arg(long)]
    plain: bool,

    /// Print a config file with all default values and exit
    #[arg(long)]
    print_default_config: bool,
}

fn parse_grid(s: &str) -> Result<GridShape, String> {
    match s {
        "small" | "3x3" => Ok(GridShape::Small),
        "standard" | "6x7" => Ok(GridShape::Standard),
        other => Err(format!("unknown grid '{other}' (expected 'small' or 'standard')")),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(grid) = cli.grid {
        config.game.grid = grid;
    }
    if let Some(depth) = cli.depth {
        config.ai.depth = depth;
    }
    if let Some(opponent) = cli.opponent {
        config.ai.opponent = opponent;
    }
    if cli.seed.is_some() {
        config.ai.seed = cli.seed;
    }
    if cli.ai_first {
        config.game.human_starts = false;
    }
    config.validate().context("invalid settings")?;

    log::info!(
        "starting {:?} game vs {:?} (depth {})",
        config.game.grid,
        config.ai.opponent,
        config.ai.depth
    );

    let mut agent = config.ai.opponent.build(config.ai.depth, config.ai.seed);
    let first = config.game.first_player();

    if cli.plain {
        let state = GameState::initial(config.game.grid, first);
        let stdin = io::stdin();
        run_prompt(stdin.lock(), &mut io::stdout(), state, agent.as_mut())?;
        return Ok(());
    }

    run_tui(App::new(config.game.grid, first, agent)).context("terminal UI failed")
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
