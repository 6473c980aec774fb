//! Scripted input replay on a calloop event loop.
//!
//! A feeder thread sends script steps over a channel, sleeping through
//! `wait` steps. The zoom refresh is a timer on the same loop, so input and
//! ticks are serialized exactly as on a live backend.

use super::HeadlessScreen;
use crate::app::{App, Key};
use crate::util::Point;
use anyhow::{Context, Result, anyhow};
use calloop::channel::{self, Channel, Event};
use calloop::timer::{TimeoutAction, Timer};
use calloop::EventLoop;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// One input event in a replay script.
///
/// ```toml
/// [[steps]]
/// action = "click"
/// x = 100
/// y = 120
///
/// [[steps]]
/// action = "key"
/// key = "Space"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Move { x: f64, y: f64 },
    Click { x: f64, y: f64 },
    Key { key: String },
    Release { key: String },
    Wait { ms: u64 },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid replay script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in {}", path.display()))
    }
}

struct ReplayState {
    app: App,
    screen: HeadlessScreen,
    finished: bool,
}

impl ReplayState {
    fn apply(&mut self, step: Step) {
        debug!("Replay step {:?}", step);
        match step {
            Step::Move { x, y } => {
                let p = Point::new(x, y);
                self.screen.set_cursor(p);
                self.app.on_mouse_move(p);
            }
            Step::Click { x, y } => {
                let p = Point::new(x, y);
                self.screen.set_cursor(p);
                self.app.on_mouse_click(p);
            }
            Step::Key { key } => self.app.on_key_press(Key::from_name(&key)),
            Step::Release { key } => self.app.on_key_release(Key::from_name(&key)),
            // Waiting happens on the feeder thread.
            Step::Wait { .. } => {}
        }
        if self.app.should_exit() {
            self.finished = true;
        }
    }
}

/// Feeds `steps` into a channel from a background thread.
fn spawn_feeder(steps: Vec<Step>) -> Channel<Step> {
    let (sender, receiver) = channel::channel();
    thread::spawn(move || {
        for step in steps {
            if let Step::Wait { ms } = step {
                thread::sleep(Duration::from_millis(ms));
                continue;
            }
            if sender.send(step).is_err() {
                // Loop already stopped, e.g. after an exit key.
                break;
            }
        }
    });
    receiver
}

/// Runs `script` against `app` until the script ends or the app exits.
///
/// `screen` must be a handle to the screen `app` was built on. Returns the
/// app with a final zoom refresh applied.
pub fn run(app: App, screen: HeadlessScreen, script: Script) -> Result<App> {
    let interval = app.style().window.refresh_interval;
    let mut event_loop: EventLoop<ReplayState> =
        EventLoop::try_new().context("Failed to create event loop")?;
    let handle = event_loop.handle();

    handle
        .insert_source(spawn_feeder(script.steps), |event, _, state| match event {
            Event::Msg(step) => state.apply(step),
            Event::Closed => state.finished = true,
        })
        .map_err(|e| anyhow!("Failed to register input channel: {}", e.error))?;

    handle
        .insert_source(Timer::from_duration(interval), move |_, _, state| {
            state.app.tick();
            TimeoutAction::ToDuration(interval)
        })
        .map_err(|e| anyhow!("Failed to register zoom timer: {}", e.error))?;

    let mut state = ReplayState {
        app,
        screen,
        finished: false,
    };
    let signal = event_loop.get_signal();

    info!("Replaying input script");
    event_loop
        .run(Some(interval), &mut state, |state| {
            if state.finished {
                signal.stop();
            }
        })
        .context("Event loop failed")?;

    if state.app.should_exit() {
        info!("Exit key reached; remaining steps skipped");
    }
    state.app.tick();
    Ok(state.app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_step_kinds() {
        let script = Script::parse(
            r#"
            [[steps]]
            action = "move"
            x = 10
            y = 20.5

            [[steps]]
            action = "click"
            x = 1
            y = 2

            [[steps]]
            action = "key"
            key = "Shift"

            [[steps]]
            action = "release"
            key = "Shift"

            [[steps]]
            action = "wait"
            ms = 5
            "#,
        )
        .unwrap();

        assert_eq!(
            script.steps,
            vec![
                Step::Move { x: 10.0, y: 20.5 },
                Step::Click { x: 1.0, y: 2.0 },
                Step::Key {
                    key: "Shift".to_string()
                },
                Step::Release {
                    key: "Shift".to_string()
                },
                Step::Wait { ms: 5 },
            ]
        );
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err = Script::parse("[[steps]]\naction = \"jump\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("Invalid replay script"));
    }

    #[test]
    fn empty_script_has_no_steps() {
        assert_eq!(Script::parse("").unwrap(), Script::default());
    }
}
