//! Plain data shared across the carousel crates.
//!
//! Nothing in here owns behaviour beyond small conversions; the controller
//! lives in `carousel-core` and the DOM binding in `carousel-web`.
#![allow(missing_docs)]

pub mod error;
pub mod frame;
pub mod input;
pub mod metrics;
pub mod timer;
pub mod wrap;

pub use error::{ModelError, Result};
pub use frame::{Frame, IndicatorFrame, SlideFrame, Transition};
pub use input::{FocusTarget, Key, KeyInput, PointerInput, PointerKind};
pub use metrics::Measurement;
pub use timer::{TimerKind, TimerTicket};
pub use wrap::WrapMode;
