//! Terminal falling-block game (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer, rodio for
//! optional background music, and logs to a file since stdout is the screen.

mod cli;

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{cursor, execute, terminal};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tui_blockfall::audio::{start_or_warn, AudioPlayer, MusicPlayer, SilentPlayer};
use tui_blockfall::core::{GameEngine, GravityClock};
use tui_blockfall::input::TerminalInput;
use tui_blockfall::term::{GameView, TerminalRenderer};
use tui_blockfall::Shell;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = cli.game_config()?;
    info!(
        width = config.width,
        height = config.height,
        seed = config.seed,
        gravity_ms = config.gravity_ms,
        "starting"
    );

    let engine = GameEngine::new(&config)?;
    let clock = GravityClock::new(config.gravity_ms, config.soft_drop_ms, config.soft_drop_grace_ms);

    let mut audio: Box<dyn AudioPlayer> = match &cli.music {
        Some(path) if !cli.mute => Box::new(MusicPlayer::new(path).with_volume(cli.volume)),
        _ => Box::new(SilentPlayer::new()),
    };
    start_or_warn(audio.as_mut());

    install_panic_hook();
    let mut renderer = TerminalRenderer::new(GameView::default());
    renderer.enter()?;

    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut shell = Shell::new(engine, clock, TerminalInput::new(), renderer, frame);
    let result = shell.run();

    // Restore the terminal before reporting anything.
    drop(shell);
    audio.stop();
    result
}

fn init_logging(cli: &Cli) -> Result<()> {
    let path = cli.log_path();
    let file = File::create(&path).with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Release builds abort on panic, so the renderer never gets to restore the
/// terminal. Do it here before the default hook prints the message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(std::io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        error!("panic: {info}");
        default_hook(info);
    }));
}
