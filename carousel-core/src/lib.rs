//! # Carousel Core
//!
//! The controller behind a horizontally scrolling strip of slides: index
//! navigation with clamping or looping, pointer drag with rubber-band
//! resistance and snap, keyboard navigation, indicator and prev/next state,
//! accessibility projection, debounced re-measure on resize and optional
//! autoplay.
//!
//! The controller never talks to a DOM or a clock. Hosts implement
//! [`CarouselHost`] (measure + render), feed [`CarouselMessage`]s into
//! [`Carousel::update`], and execute the returned [`Effects`] (arm timers,
//! capture pointers, prevent default actions).
//!
//! ## Example
//!
//! ```
//! use carousel_core::{Carousel, CarouselSettings, HeadlessHost, Structure};
//! use carousel_model::Measurement;
//!
//! let host = HeadlessHost::new(Measurement::new(300.0, 20.0));
//! let mut carousel =
//!     Carousel::mount(Structure::new(4).with_controls(), host, CarouselSettings::default())
//!         .expect("four slides mount");
//!
//! carousel.next();
//! assert_eq!(carousel.current_index(), 1);
//! assert_eq!(carousel.offset(), -320.0);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod a11y;
pub mod constants;
pub mod controller;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod headless;
pub mod host;
pub mod keyboard;
pub mod message;
pub mod render;
pub mod settings;
pub mod structure;
pub mod timers;

mod autoplay;

pub use controller::Carousel;
pub use drag::{DragSession, DragState, SwipeIntent};
pub use error::MountError;
pub use headless::HeadlessHost;
pub use host::CarouselHost;
pub use keyboard::NavIntent;
pub use message::{CarouselMessage, Effect, Effects};
pub use settings::CarouselSettings;
pub use structure::Structure;
pub use timers::TimerSlots;

pub use carousel_model as model;
