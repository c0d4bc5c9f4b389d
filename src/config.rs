//! Runtime configuration: environment first, then command-line overrides.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::Level;

pub const ENV_SEED: &str = "TETRIS_STACK_SEED";
pub const ENV_LEVEL: &str = "TETRIS_STACK_LEVEL";
pub const ENV_LOG_PATH: &str = "TETRIS_STACK_LOG_PATH";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

pub const USAGE: &str = "\
usage: tetris-stack [--seed <u32>] [--level <novice|adventurer|master|1|2|3>]
                    [--log-path <file>] [--no-color] [--help]

environment: TETRIS_STACK_SEED, TETRIS_STACK_LEVEL, TETRIS_STACK_LOG_PATH, NO_COLOR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    /// `None` asks for the level interactively.
    pub level: Option<Level>,
    /// Line-delimited JSON action journal.
    pub log_path: Option<PathBuf>,
    pub color: bool,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            level: None,
            log_path: None,
            color: true,
            help: false,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn parse_seed(v: &str, origin: &str) -> Result<u32> {
    v.trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("{}: invalid seed: {}", origin, v))
}

fn parse_level(v: &str, origin: &str) -> Result<Level> {
    Level::from_str(v).ok_or_else(|| anyhow!("{}: unknown level: {}", origin, v))
}

impl Config {
    /// Create from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any variable lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_SEED) {
            config.seed = parse_seed(&v, ENV_SEED)?;
        }
        if let Some(v) = lookup(ENV_LEVEL) {
            config.level = Some(parse_level(&v, ENV_LEVEL)?);
        }
        config.log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });
        if lookup(ENV_NO_COLOR).is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        Ok(config)
    }

    /// Apply command-line arguments (program name excluded).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = parse_seed(v, "--seed")?;
                }
                "--level" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --level"))?;
                    self.level = Some(parse_level(v, "--level")?);
                }
                "--log-path" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log-path"))?;
                    self.log_path = Some(PathBuf::from(v));
                }
                "--no-color" => self.color = false,
                "-h" | "--help" => self.help = true,
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(())
    }
}
