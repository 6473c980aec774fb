//! Relative-position decorations drawn along a tool.

use crate::util::PHI_INV;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Mark families that can be toggled independently.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MarkCategory {
    /// Both ends of the tool
    Endpoint,
    /// `1 - 1/φ` and `1/φ`
    GoldenRatio,
    /// One half
    Middle,
    /// One and two thirds
    Third,
}

impl MarkCategory {
    pub const ALL: [MarkCategory; 4] = [
        MarkCategory::Endpoint,
        MarkCategory::GoldenRatio,
        MarkCategory::Middle,
        MarkCategory::Third,
    ];

    /// Fractions along the tool where this category draws.
    pub fn positions(self) -> &'static [f64] {
        const ENDPOINT: [f64; 2] = [0.0, 1.0];
        const GOLDEN_RATIO: [f64; 2] = [1.0 - PHI_INV, PHI_INV];
        const MIDDLE: [f64; 1] = [0.5];
        const THIRD: [f64; 2] = [1.0 / 3.0, 2.0 / 3.0];

        match self {
            MarkCategory::Endpoint => &ENDPOINT,
            MarkCategory::GoldenRatio => &GOLDEN_RATIO,
            MarkCategory::Middle => &MIDDLE,
            MarkCategory::Third => &THIRD,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            MarkCategory::Endpoint => "Endpoint",
            MarkCategory::GoldenRatio => "Golden Ratio",
            MarkCategory::Middle => "Middle",
            MarkCategory::Third => "Third",
        }
    }
}

/// Set of mark categories, e.g. the ones currently shown.
pub type MarkSet = BTreeSet<MarkCategory>;

/// Categories shown on a fresh install.
pub fn default_visible_marks() -> MarkSet {
    [MarkCategory::Endpoint, MarkCategory::GoldenRatio]
        .into_iter()
        .collect()
}

/// One mark owned by a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub category: MarkCategory,
    /// Tick length in pixels
    pub size: f64,
    pub visible: bool,
}

impl Mark {
    pub fn new(category: MarkCategory, size: f64, visible: bool) -> Self {
        Self {
            category,
            size,
            visible,
        }
    }

    pub fn positions(&self) -> &'static [f64] {
        self.category.positions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_ratio_positions_mirror_each_other() {
        let [a, b] = MarkCategory::GoldenRatio.positions() else {
            panic!("expected two golden ratio positions");
        };
        assert!((a + b - 1.0).abs() < 1e-12);
        assert!((b - 0.618_034).abs() < 1e-6);
    }

    #[test]
    fn positions_stay_in_unit_interval() {
        for category in MarkCategory::ALL {
            assert!(
                category
                    .positions()
                    .iter()
                    .all(|p| (0.0..=1.0).contains(p))
            );
        }
    }

    #[test]
    fn default_set_has_endpoint_and_golden_ratio() {
        let set = default_visible_marks();
        assert!(set.contains(&MarkCategory::Endpoint));
        assert!(set.contains(&MarkCategory::GoldenRatio));
        assert!(!set.contains(&MarkCategory::Middle));
        assert!(!set.contains(&MarkCategory::Third));
    }
}
