//! The complete visual projection of a carousel at one instant.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Transition {
    /// Host applies its configured transition (stylesheet default).
    Animated,
    /// Host disables transitions so the strip jumps or tracks the pointer 1:1.
    #[default]
    Immediate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideFrame {
    pub label: String,
    /// Hidden from assistive technology; focusable descendants leave tab order.
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorFrame {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// Horizontal translation of the strip in pixels (zero or negative when settled).
    pub offset: f32,
    pub transition: Transition,
    pub active_index: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    /// Empty when the host has no indicator container.
    pub indicators: Vec<IndicatorFrame>,
    pub slides: Vec<SlideFrame>,
}

impl Frame {
    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|dot| dot.active)
    }

    pub fn visible_slides(&self) -> impl Iterator<Item = usize> + '_ {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| !slide.hidden)
            .map(|(i, _)| i)
    }
}
