//! Backends that host the app.
//!
//! The headless backend renders into memory and is driven by a replay
//! script; it is what the binary runs and what the integration tests use.

pub mod headless;
pub mod replay;

pub use headless::HeadlessScreen;
pub use replay::{Script, Step};

use crate::app::App;
use crate::config::{Config, Style};
use crate::state::StateStore;
use anyhow::{Result, anyhow};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Inputs for one headless run.
#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub script: PathBuf,
    /// PNG shown as the screen; a transparent screen of `size` otherwise
    pub background: Option<PathBuf>,
    pub size: (i32, i32),
    /// Where the final frame goes
    pub output: Option<PathBuf>,
}

/// Runs a replay and writes the final frame.
///
/// Settings come from `store` and are saved back when the run ends.
pub fn run_replay(
    options: &ReplayOptions,
    config: &Config,
    store: &mut dyn StateStore,
) -> Result<()> {
    let script = Script::load(&options.script)?;
    let screen = match &options.background {
        Some(path) => HeadlessScreen::from_png(path)?,
        None => {
            let (width, height) = options.size;
            if width <= 0 || height <= 0 {
                return Err(anyhow!("Invalid screen size {}x{}", width, height));
            }
            HeadlessScreen::new(width, height)
        }
    };

    let action_map = config
        .keybindings
        .build_action_map()
        .map_err(|e| anyhow!("Invalid keybindings: {}", e))?;

    let state = store.load();
    let app = App::new(
        Box::new(screen.clone()),
        Style::from_config(config),
        action_map,
        &state,
    );
    let app = replay::run(app, screen.clone(), script)?;

    if let Err(e) = store.save(&app.app_state()) {
        warn!("Failed to save settings: {}", e);
    }

    if let Some(output) = &options.output {
        screen.write_png(&app, output)?;
        info!("Wrote final frame to {}", output.display());
    }
    print_summary(&app, options.output.as_deref());
    Ok(())
}

fn print_summary(app: &App, output: Option<&Path>) {
    for line in app.info().lines() {
        println!("{}", line.replace('\t', " "));
    }
    if let Some(path) = output {
        println!("Frame: {}", path.display());
    }
}
