use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dark_maze::config::Args;
use dark_maze::input::{command_for, Command};
use dark_maze::render::Renderer;
use dark_maze::{Game, MoveOutcome};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut rng = args.rng();
    let game = Game::new(&args.game_config(), &mut rng).context("failed to set up maze")?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, game);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    if let Some(score) = result? {
        println!("You win! Final score: {}", score);
    }
    Ok(())
}

fn init_logging(args: &Args) -> anyhow::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "dark_maze=info".into()),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Plays until the player quits or wins. Returns the final score on a win.
fn run(stdout: &mut Stdout, mut game: Game) -> io::Result<Option<i32>> {
    let mut renderer = Renderer::new(game.grid().width(), game.grid().height());
    renderer.render(stdout, &game)?;

    loop {
        match event::read()? {
            Event::Key(key) => match command_for(key) {
                Some(Command::Quit) => {
                    info!(score = game.score(), "quit");
                    return Ok(None);
                }
                Some(Command::Move(dir)) => {
                    let outcome = game.apply_move(dir);
                    renderer.render(stdout, &game)?;
                    if let MoveOutcome::Won { score } = outcome {
                        renderer.render_win(stdout, &game, score)?;
                        wait_for_quit()?;
                        return Ok(Some(score));
                    }
                }
                None => {}
            },
            Event::Resize(_, _) => {
                renderer.invalidate();
                renderer.render(stdout, &game)?;
            }
            _ => {}
        }
    }
}

fn wait_for_quit() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return Ok(());
            }
        }
    }
}
