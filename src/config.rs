//! Runtime configuration for the terminal game.
//!
//! Defaults, then `BLOCKFALL_*` environment variables, then command-line
//! flags. Only the board size reaches the core.

use anyhow::{anyhow, bail, Result};

use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_SIDE, MIN_BOARD_SIDE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    /// `None` seeds from entropy
    pub seed: Option<u64>,
    /// JSON-lines gameplay log, disabled when `None`
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`GameConfig::from_env`] with an explicit variable source.
    ///
    /// Unparsable values keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = lookup("BLOCKFALL_WIDTH")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);
        let height = lookup("BLOCKFALL_HEIGHT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);
        let seed = lookup("BLOCKFALL_SEED").and_then(|s| s.trim().parse().ok());
        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width,
            height,
            seed,
            log_path,
        }
    }

    /// Apply command-line flags (program name excluded).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--width" | "--height" | "--seed" | "--log" => {
                    i += 1;
                    let value = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                    match flag {
                        "--width" => self.width = parse_side(flag, value)?,
                        "--height" => self.height = parse_side(flag, value)?,
                        "--seed" => {
                            let seed = value
                                .parse::<u64>()
                                .map_err(|_| anyhow!("invalid {} value: {}", flag, value))?;
                            self.seed = Some(seed);
                        }
                        _ => {
                            if value.trim().is_empty() {
                                bail!("empty path for --log");
                            }
                            self.log_path = Some(value.clone());
                        }
                    }
                }
                other => bail!("unknown argument: {}", other),
            }
            i += 1;
        }
        Ok(())
    }

    /// Reject board sizes the core cannot handle.
    pub fn validate(&self) -> Result<()> {
        for (name, side) in [("width", self.width), ("height", self.height)] {
            if !(MIN_BOARD_SIDE..=MAX_BOARD_SIDE).contains(&side) {
                bail!(
                    "board {} must be between {} and {}, got {}",
                    name,
                    MIN_BOARD_SIDE,
                    MAX_BOARD_SIDE,
                    side
                );
            }
        }
        Ok(())
    }
}

fn parse_side(flag: &str, value: &str) -> Result<u16> {
    value
        .parse::<u16>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, value))
}
