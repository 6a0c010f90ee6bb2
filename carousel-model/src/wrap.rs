use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Carousel paging and boundary behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WrapMode {
    /// Clamped carousel; the controls disable at either end.
    #[default]
    Finite,
    /// Stepping past either end jumps to the opposite end.
    Loop,
}

impl WrapMode {
    pub fn is_loop(self) -> bool {
        matches!(self, WrapMode::Loop)
    }

    /// Resolve a requested index against `[0, last]`.
    ///
    /// Finite mode clamps. Loop mode sends anything below zero to `last` and
    /// anything above `last` to zero, rather than taking a modulo.
    pub fn resolve(self, target: isize, last: usize) -> usize {
        let last_i = last as isize;
        match self {
            WrapMode::Finite => target.clamp(0, last_i) as usize,
            WrapMode::Loop => {
                if target < 0 {
                    last
                } else if target > last_i {
                    0
                } else {
                    target as usize
                }
            }
        }
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WrapMode::Finite => f.write_str("finite"),
            WrapMode::Loop => f.write_str("loop"),
        }
    }
}

impl FromStr for WrapMode {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "finite" | "clamp" | "none" => Ok(WrapMode::Finite),
            "loop" | "wrap" | "infinite" => Ok(WrapMode::Loop),
            _ => Err(ModelError::InvalidWrapMode(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_clamps_both_ends() {
        assert_eq!(WrapMode::Finite.resolve(-5, 3), 0);
        assert_eq!(WrapMode::Finite.resolve(9, 3), 3);
        assert_eq!(WrapMode::Finite.resolve(2, 3), 2);
    }

    #[test]
    fn loop_jumps_to_opposite_end() {
        assert_eq!(WrapMode::Loop.resolve(-5, 3), 3);
        assert_eq!(WrapMode::Loop.resolve(-1, 3), 3);
        assert_eq!(WrapMode::Loop.resolve(4, 3), 0);
        assert_eq!(WrapMode::Loop.resolve(99, 3), 0);
    }

    #[test]
    fn single_position_resolves_to_zero() {
        assert_eq!(WrapMode::Finite.resolve(1, 0), 0);
        assert_eq!(WrapMode::Loop.resolve(1, 0), 0);
        assert_eq!(WrapMode::Loop.resolve(-1, 0), 0);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("Loop".parse::<WrapMode>(), Ok(WrapMode::Loop));
        assert_eq!(" clamp ".parse::<WrapMode>(), Ok(WrapMode::Finite));
        assert!(matches!(
            "sideways".parse::<WrapMode>(),
            Err(ModelError::InvalidWrapMode(_))
        ));
    }
}
