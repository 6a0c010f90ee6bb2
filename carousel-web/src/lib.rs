//! Browser binding for the carousel controller.
//!
//! The DOM-facing half (element lookup, [`CarouselHost`] implementation,
//! event listeners and timers) only exists on `wasm32`. The helpers it is
//! built from are plain functions and compile everywhere, so they are
//! unit-tested natively.
//!
//! Markup contract:
//!
//! ```html
//! <section data-carousel data-carousel-loop>
//!   <button data-carousel-prev>Previous</button>
//!   <div data-carousel-viewport>
//!     <ul data-carousel-track>
//!       <li data-slide>..</li>
//!       <li data-slide>..</li>
//!     </ul>
//!   </div>
//!   <button data-carousel-next>Next</button>
//!   <div data-carousel-dots></div>
//! </section>
//! ```
//!
//! [`CarouselHost`]: carousel_core::CarouselHost

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod focus;
pub mod mounting;
pub mod selectors;
pub mod style;
pub mod tabindex;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{CarouselHandle, mount_all, mount_carousel};
