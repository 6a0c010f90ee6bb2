//! Host-agnostic input events consumed by the controller.

use std::str::FromStr;

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

impl FromStr for PointerKind {
    type Err = ModelError;

    /// Accepts the values of the DOM `PointerEvent.pointerType` attribute.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "mouse" => Ok(PointerKind::Mouse),
            "touch" => Ok(PointerKind::Touch),
            "pen" => Ok(PointerKind::Pen),
            _ => Err(ModelError::InvalidPointerKind(raw.to_string())),
        }
    }
}

/// One pointer sample along the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerInput {
    pub id: i32,
    pub kind: PointerKind,
    /// DOM button index; 0 is the primary button.
    pub button: i16,
    pub x: f32,
}

impl PointerInput {
    pub fn new(id: i32, kind: PointerKind, x: f32) -> Self {
        Self {
            id,
            kind,
            button: 0,
            x,
        }
    }

    pub fn mouse(x: f32) -> Self {
        Self::new(1, PointerKind::Mouse, x)
    }

    pub fn touch(id: i32, x: f32) -> Self {
        Self::new(id, PointerKind::Touch, x)
    }

    pub fn with_button(mut self, button: i16) -> Self {
        self.button = button;
        self
    }

    /// Touch and pen contacts always count; mice only with the primary button.
    pub fn is_primary(&self) -> bool {
        self.kind != PointerKind::Mouse || self.button == 0
    }

    pub fn at(mut self, x: f32) -> Self {
        self.x = x;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => Key::Other,
        }
    }
}

/// Where keyboard focus sat when the key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FocusTarget {
    Outside,
    /// The carousel region itself or a non-interactive descendant.
    #[default]
    Region,
    /// A button, link or form control inside the region.
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyInput {
    pub key: Key,
    pub focus: FocusTarget,
}

impl KeyInput {
    pub fn in_region(key: Key) -> Self {
        Self {
            key,
            focus: FocusTarget::Region,
        }
    }
}
