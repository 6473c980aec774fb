//! Keybinding configuration types and parsing.
//!
//! Every user action can be bound to one or more key strings in
//! `config.toml`. Holding Shift to lock a resize is not an action and is
//! handled by the app directly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Exit,

    // Tools
    SelectNextTool,
    ToggleLabelPlacement,
    ToggleLineThickness,

    // Marks
    ToggleMarksGoldenRatio,
    ToggleMarksEndpoint,
    ToggleMarksMiddle,
    ToggleMarksThird,

    // Windows
    ToggleZoomWindow,
    ToggleInfoWindow,
    ToggleHelpLines,
}

impl Action {
    pub fn description(self) -> &'static str {
        match self {
            Action::Exit => "Exit",
            Action::SelectNextTool => "Next tool",
            Action::ToggleLabelPlacement => "Label placement",
            Action::ToggleLineThickness => "Line thickness",
            Action::ToggleMarksGoldenRatio => "Golden ratio marks",
            Action::ToggleMarksEndpoint => "Endpoint marks",
            Action::ToggleMarksMiddle => "Middle marks",
            Action::ToggleMarksThird => "Third marks",
            Action::ToggleZoomWindow => "Zoom window",
            Action::ToggleInfoWindow => "Info window",
            Action::ToggleHelpLines => "Help lines",
        }
    }
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+W", "space" or "Escape".
    ///
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    /// Key names are normalized, so "g" and "G" are the same binding.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let mut binding = KeyBinding {
            key: String::new(),
            ctrl: false,
            shift: false,
            alt: false,
        };
        let mut keys = Vec::new();

        for part in s.split('+').map(str::trim) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => binding.ctrl = true,
                "shift" => binding.shift = true,
                "alt" => binding.alt = true,
                "" => {}
                _ => keys.push(part),
            }
        }

        binding.key = match keys.as_slice() {
            [key] => normalize_key_name(key),
            // "Ctrl++" binds the plus key itself
            [] if s.ends_with('+') => "+".to_string(),
            [] => return Err(format!("No key specified in: {}", s)),
            _ => return Err(format!("More than one key in: {}", s)),
        };
        Ok(binding)
    }

    /// Check if this keybinding matches a pressed key and modifier state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Uppercases single characters and title-cases named keys.
fn normalize_key_name(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_uppercase().collect(),
        (Some(first), Some(_)) => {
            first.to_uppercase().collect::<String>() + &key[first.len_utf8()..].to_lowercase()
        }
        (None, _) => String::new(),
    }
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings:
/// ```toml
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// select_next_tool = ["Space"]
/// toggle_marks_golden_ratio = ["G"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_select_next_tool")]
    pub select_next_tool: Vec<String>,

    #[serde(default = "default_toggle_label_placement")]
    pub toggle_label_placement: Vec<String>,

    #[serde(default = "default_toggle_line_thickness")]
    pub toggle_line_thickness: Vec<String>,

    #[serde(default = "default_toggle_marks_golden_ratio")]
    pub toggle_marks_golden_ratio: Vec<String>,

    #[serde(default = "default_toggle_marks_endpoint")]
    pub toggle_marks_endpoint: Vec<String>,

    #[serde(default = "default_toggle_marks_middle")]
    pub toggle_marks_middle: Vec<String>,

    #[serde(default = "default_toggle_marks_third")]
    pub toggle_marks_third: Vec<String>,

    #[serde(default = "default_toggle_zoom_window")]
    pub toggle_zoom_window: Vec<String>,

    #[serde(default = "default_toggle_info_window")]
    pub toggle_info_window: Vec<String>,

    #[serde(default = "default_toggle_help_lines")]
    pub toggle_help_lines: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            select_next_tool: default_select_next_tool(),
            toggle_label_placement: default_toggle_label_placement(),
            toggle_line_thickness: default_toggle_line_thickness(),
            toggle_marks_golden_ratio: default_toggle_marks_golden_ratio(),
            toggle_marks_endpoint: default_toggle_marks_endpoint(),
            toggle_marks_middle: default_toggle_marks_middle(),
            toggle_marks_third: default_toggle_marks_third(),
            toggle_zoom_window: default_toggle_zoom_window(),
            toggle_info_window: default_toggle_info_window(),
            toggle_help_lines: default_toggle_help_lines(),
        }
    }
}

impl KeybindingsConfig {
    fn entries(&self) -> [(&[String], Action); 11] {
        [
            (self.exit.as_slice(), Action::Exit),
            (self.select_next_tool.as_slice(), Action::SelectNextTool),
            (self.toggle_label_placement.as_slice(), Action::ToggleLabelPlacement),
            (self.toggle_line_thickness.as_slice(), Action::ToggleLineThickness),
            (self.toggle_marks_golden_ratio.as_slice(), Action::ToggleMarksGoldenRatio),
            (self.toggle_marks_endpoint.as_slice(), Action::ToggleMarksEndpoint),
            (self.toggle_marks_middle.as_slice(), Action::ToggleMarksMiddle),
            (self.toggle_marks_third.as_slice(), Action::ToggleMarksThird),
            (self.toggle_zoom_window.as_slice(), Action::ToggleZoomWindow),
            (self.toggle_info_window.as_slice(), Action::ToggleInfoWindow),
            (self.toggle_help_lines.as_slice(), Action::ToggleHelpLines),
        ]
    }

    /// Build a lookup map from keybindings to actions.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        for (bindings, action) in self.entries() {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_select_next_tool() -> Vec<String> {
    vec!["Space".to_string()]
}

fn default_toggle_label_placement() -> Vec<String> {
    vec!["L".to_string()]
}

fn default_toggle_line_thickness() -> Vec<String> {
    vec!["W".to_string()]
}

fn default_toggle_marks_golden_ratio() -> Vec<String> {
    vec!["G".to_string()]
}

fn default_toggle_marks_endpoint() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_toggle_marks_middle() -> Vec<String> {
    vec!["M".to_string()]
}

fn default_toggle_marks_third() -> Vec<String> {
    vec!["T".to_string()]
}

fn default_toggle_zoom_window() -> Vec<String> {
    vec!["Z".to_string()]
}

fn default_toggle_info_window() -> Vec<String> {
    vec!["I".to_string()]
}

fn default_toggle_help_lines() -> Vec<String> {
    vec!["H".to_string()]
}
