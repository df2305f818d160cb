//! Per-dataset label tables and canvas sizes.
//!
//! Each supported dataset carries a fixed label vocabulary and the integer
//! canvas the upstream generator serializes coordinates against. Seq/html
//! markup is written in canvas units; dividing by the canvas size yields the
//! normalized coordinates the engine works in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LcrError;
use crate::types::Label;

/// The layout dataset a candidate pool was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Webui,
    Rico,
    Publaynet,
    Posterlayout,
}

const WEBUI_LABELS: &[&str] = &[
    "text",
    "link",
    "button",
    "title",
    "description",
    "image",
    "background",
    "logo",
    "icon",
    "input",
];

const RICO_LABELS: &[&str] = &[
    "text",
    "image",
    "icon",
    "list item",
    "text button",
    "toolbar",
    "web view",
    "input",
    "card",
    "advertisement",
    "background image",
    "drawer",
    "radio button",
    "checkbox",
    "multi-tab",
    "pager indicator",
    "modal",
    "on/off switch",
    "slider",
    "map view",
    "button bar",
    "video",
    "bottom navigation",
    "number stepper",
    "date picker",
];

const PUBLAYNET_LABELS: &[&str] = &["text", "title", "list", "table", "figure"];

const POSTERLAYOUT_LABELS: &[&str] = &["text", "logo", "underlay"];

impl Dataset {
    pub const fn all() -> [Dataset; 4] {
        [
            Dataset::Webui,
            Dataset::Rico,
            Dataset::Publaynet,
            Dataset::Posterlayout,
        ]
    }

    /// The fixed label vocabulary for this dataset.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Dataset::Webui => WEBUI_LABELS,
            Dataset::Rico => RICO_LABELS,
            Dataset::Publaynet => PUBLAYNET_LABELS,
            Dataset::Posterlayout => POSTERLAYOUT_LABELS,
        }
    }

    /// Canvas size (width, height) the generator serializes coordinates in.
    pub fn canvas_size(&self) -> (u32, u32) {
        match self {
            Dataset::Webui => (120, 120),
            Dataset::Rico => (90, 160),
            Dataset::Publaynet => (120, 160),
            Dataset::Posterlayout => (102, 150),
        }
    }

    /// Look up `name` in the label table, case-insensitively.
    pub fn label(&self, name: &str) -> Option<Label> {
        let lower = name.trim().to_ascii_lowercase();
        self.labels()
            .iter()
            .find(|candidate| **candidate == lower)
            .map(|candidate| Label::new(*candidate))
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dataset::Webui => "webui",
            Dataset::Rico => "rico",
            Dataset::Publaynet => "publaynet",
            Dataset::Posterlayout => "posterlayout",
        };
        f.write_str(name)
    }
}

impl FromStr for Dataset {
    type Err = LcrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "webui" => Ok(Dataset::Webui),
            "rico" => Ok(Dataset::Rico),
            "publaynet" => Ok(Dataset::Publaynet),
            "posterlayout" => Ok(Dataset::Posterlayout),
            other => Err(LcrError::Config(format!("Unknown dataset: {}", other))),
        }
    }
}
