//! Command line options.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;

use tui_blockfall::audio::DEFAULT_VOLUME;
use tui_blockfall::core::{parse_shapes, GameConfig};
use tui_blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH, FRAME_MS, GRAVITY_MS, SOFT_DROP_GRACE_MS, SOFT_DROP_MS};

#[derive(Debug, Parser)]
#[command(name = "tui-blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = BOARD_WIDTH)]
    pub width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    pub height: u16,

    /// Milliseconds between gravity steps
    #[arg(long, default_value_t = GRAVITY_MS)]
    pub gravity_ms: u32,

    /// RNG seed (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Comma separated shapes to spawn: i,o,t,s,z,j,l,mono
    #[arg(long, default_value = "i,o,t,s,z,j,l")]
    pub shapes: String,

    /// Music file to loop in the background
    #[arg(long)]
    pub music: Option<PathBuf>,

    /// Music volume from 0.0 to 1.0
    #[arg(long, default_value_t = DEFAULT_VOLUME)]
    pub volume: f32,

    /// Do not play music even if a file is given
    #[arg(long)]
    pub mute: bool,

    /// Log file (defaults to tui-blockfall.log in the temp directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig> {
        let config = GameConfig {
            width: self.width,
            height: self.height,
            gravity_ms: self.gravity_ms,
            soft_drop_ms: SOFT_DROP_MS,
            soft_drop_grace_ms: SOFT_DROP_GRACE_MS,
            frame_ms: FRAME_MS,
            seed: self.seed.unwrap_or_else(clock_seed),
            shapes: parse_shapes(&self.shapes)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("tui-blockfall.log"))
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_valid_config() {
        let cli = Cli::parse_from(["tui-blockfall", "--seed", "7"]);
        let config = cli.game_config().unwrap();
        assert_eq!(config.width, BOARD_WIDTH);
        assert_eq!(config.height, BOARD_HEIGHT);
        assert_eq!(config.seed, 7);
        assert_eq!(config.shapes.len(), 7);
    }

    #[test]
    fn invalid_shapes_are_rejected() {
        let cli = Cli::parse_from(["tui-blockfall", "--shapes", "q"]);
        assert!(cli.game_config().is_err());
    }

    #[test]
    fn tiny_board_is_rejected() {
        let cli = Cli::parse_from(["tui-blockfall", "--width", "2"]);
        assert!(cli.game_config().is_err());
    }

    #[test]
    fn volume_flag_is_parsed() {
        let cli = Cli::parse_from(["tui-blockfall", "--volume", "0.25"]);
        assert_eq!(cli.volume, 0.25);
        assert_eq!(Cli::parse_from(["tui-blockfall"]).volume, DEFAULT_VOLUME);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
