//! Terminal Snake runner (default binary).
//!
//! It uses crossterm for input and paints only the cells each tick changes.
//!
//! Environment:
//! - `TUI_SNAKE_SEED`: food RNG seed (defaults to the clock)
//! - `TUI_SNAKE_LOG`: write `tracing` output to this file (filtered by `RUST_LOG`)

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_snake::core::{GameConfig, GameState, TickOutcome};
use tui_snake::input::{handle_key_event, replay_choice, CommandQueue};
use tui_snake::term::{full_frame, status_line, tick_delta, TerminalRenderer};
use tui_snake::types::{Command, ReplayChoice};

const SEED_ENV: &str = "TUI_SNAKE_SEED";
const LOG_ENV: &str = "TUI_SNAKE_LOG";

const REPLAY_PROMPT: &str =
    "Want to play once more? Press 'y' to start a new game, or 'n' to quit.";

fn main() -> Result<()> {
    init_tracing()?;

    let config = GameConfig::default().with_seed(seed_from_env()?);
    let mut game = GameState::new(config).context("invalid game configuration")?;
    info!(seed = game.config().seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_tracing() -> Result<()> {
    // stdout belongs to the game; only log when a file is given.
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.to_string_lossy()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn seed_from_env() -> Result<u32> {
    match std::env::var(SEED_ENV) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{SEED_ENV} must be a u32, got {raw:?}")),
        Err(_) => Ok(SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1)),
    }
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let tick_duration = Duration::from_millis(game.config().tick_ms as u64);
    let status_row = game.config().rows as u16 + 1;
    let prompt_row = status_row + 1;

    let mut queue = CommandQueue::new();
    let mut paints = Vec::new();

    loop {
        // Fresh round.
        let snap = game.snapshot();
        term.clear()?;
        full_frame(&snap, &mut paints);
        term.paint(&paints)?;
        term.text_line(status_row, &status_line(&snap))?;
        queue.clear();

        let mut last_tick = Instant::now();
        while !game.is_over() {
            // Input with timeout until next tick.
            let timeout = tick_duration
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match handle_key_event(key) {
                            Some(Command::Quit) => return Ok(()),
                            Some(command) => {
                                queue.push(command);
                            }
                            None => {}
                        }
                    }
                }
            }

            // Tick.
            if last_tick.elapsed() >= tick_duration {
                last_tick = Instant::now();

                if let Some(command) = queue.pop() {
                    game.apply_command(command);
                }
                let outcome = game.tick();

                let snap = game.snapshot();
                tick_delta(&snap, outcome, &mut paints);
                term.paint(&paints)?;
                if matches!(outcome, TickOutcome::Grew { .. } | TickOutcome::Cleared) {
                    term.text_line(status_row, &status_line(&snap))?;
                }
            }
        }

        info!(
            episode = game.episode_id(),
            score = game.score(),
            status = ?game.status(),
            "round finished"
        );

        // Replay prompt (blocking).
        term.text_line(prompt_row, REPLAY_PROMPT)?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match replay_choice(key) {
                    Some(ReplayChoice::Yes) => break,
                    Some(ReplayChoice::No) => return Ok(()),
                    None => {}
                }
            }
        }

        game.restart()?;
    }
}
