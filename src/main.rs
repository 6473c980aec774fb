use clap::{ArgAction, Parser};
use phiddle::Config;
use phiddle::backend::{self, ReplayOptions};
use phiddle::state::{JsonStateStore, MemoryStateStore, StateStore};
use std::path::{Path, PathBuf};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PHIDDLE_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "phiddle")]
#[command(version = VERSION, about = "Screen overlay measurement tool with golden ratio guides")]
struct Cli {
    /// Replay scripted mouse and key input headlessly (TOML script)
    #[arg(long, short = 'r', value_name = "SCRIPT")]
    replay: Option<PathBuf>,

    /// PNG used as the screen content during replay
    #[arg(long, short = 'b', value_name = "PNG", requires = "replay")]
    background: Option<PathBuf>,

    /// Write the final frame of the replay to this PNG
    #[arg(long, short = 'o', value_name = "PNG", requires = "replay")]
    output: Option<PathBuf>,

    /// Screen width when no background is given
    #[arg(long, default_value_t = 1280)]
    width: i32,

    /// Screen height when no background is given
    #[arg(long, default_value_t = 720)]
    height: i32,

    /// Read configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not load or save persistent settings
    #[arg(long, action = ArgAction::SetTrue)]
    ephemeral: bool,

    /// Write a commented default config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "replay")]
    init_config: bool,
}

fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    match loaded {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config: {:#}; using defaults", e);
            Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }

    let Some(script) = cli.replay else {
        // No flags: show usage
        println!("phiddle: Screen overlay measurement tool");
        println!();
        println!("Usage:");
        println!("  phiddle --replay SCRIPT [--background PNG] [--output PNG]");
        println!("                          Replay scripted input and render the result");
        println!("  phiddle --init-config   Write ~/.config/phiddle/config.toml");
        println!("  phiddle --help          Show help");
        println!();
        println!("Controls:");
        println!("  Click           Place, grab or release the active tool");
        println!("  Shift (hold)    Lock: axis line, golden rectangle, circle");
        println!("  Space           Next tool (line, rectangle, oval)");
        println!("  L               Label placement");
        println!("  G / E / M / T   Golden ratio / endpoint / middle / third marks");
        println!("  W               Wide lines");
        println!("  Z / I / H       Zoom window / info window / help lines");
        println!("  Escape          Exit");
        return Ok(());
    };

    let config = load_config(cli.config.as_deref());
    let mut store: Box<dyn StateStore> = if cli.ephemeral {
        Box::new(MemoryStateStore::new())
    } else {
        match JsonStateStore::for_app() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{}; settings will not persist", e);
                Box::new(MemoryStateStore::new())
            }
        }
    };

    let options = ReplayOptions {
        script,
        background: cli.background,
        size: (cli.width, cli.height),
        output: cli.output,
    };

    log::info!("Starting phiddle {}", VERSION);
    backend::run_replay(&options, &config, store.as_mut())?;
    log::info!("phiddle finished");
    Ok(())
}
