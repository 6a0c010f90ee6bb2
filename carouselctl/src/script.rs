//! Replay scripts: a JSON array of steps.
//!
//! ```json
//! [
//!   {"step": "next"},
//!   {"step": "drag", "from": 500, "to": 440, "pointer": "touch"},
//!   {"step": "advance", "ms": 250},
//!   {"step": "resize", "width": 480, "gap": 16}
//! ]
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};
use carousel_model::{FocusTarget, Key, PointerKind};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case", deny_unknown_fields)]
pub enum Step {
    Next,
    Prev,
    GoTo {
        index: isize,
    },
    Indicator {
        index: usize,
    },
    Key {
        key: Key,
        #[serde(default)]
        focus: FocusTarget,
    },
    Drag(Drag),
    CancelDrag(Drag),
    Resize {
        width: f32,
        #[serde(default)]
        gap: f32,
    },
    Advance {
        ms: u64,
    },
    TransitionEnd,
    Hover {
        inside: bool,
    },
}

/// Press at `from`, move to each of `via` and then `to`, release at `to`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Drag {
    pub from: f32,
    pub to: f32,
    #[serde(default)]
    pub via: Vec<f32>,
    #[serde(default)]
    pub pointer: PointerKind,
    #[serde(default = "default_pointer_id")]
    pub id: i32,
    #[serde(default)]
    pub button: i16,
}

fn default_pointer_id() -> i32 {
    1
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Next => "next",
            Step::Prev => "prev",
            Step::GoTo { .. } => "go_to",
            Step::Indicator { .. } => "indicator",
            Step::Key { .. } => "key",
            Step::Drag(_) => "drag",
            Step::CancelDrag(_) => "cancel_drag",
            Step::Resize { .. } => "resize",
            Step::Advance { .. } => "advance",
            Step::TransitionEnd => "transition_end",
            Step::Hover { .. } => "hover",
        }
    }
}

pub fn parse(text: &str) -> Result<Vec<Step>> {
    serde_json::from_str(text).context("invalid replay script")
}

pub fn load(path: &Path) -> Result<Vec<Step>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    parse(&text).with_context(|| format!("in {}", path.display()))
}
