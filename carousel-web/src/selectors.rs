//! Attribute and class names that make up the markup contract.

pub const ROOT: &str = "[data-carousel]";
pub const VIEWPORT: &str = "[data-carousel-viewport]";
pub const TRACK: &str = "[data-carousel-track]";
pub const SLIDE: &str = "[data-slide]";
pub const PREV: &str = "[data-carousel-prev]";
pub const NEXT: &str = "[data-carousel-next]";
pub const DOTS: &str = "[data-carousel-dots]";
pub const DOT: &str = "[data-carousel-dot]";

pub const DOT_ATTR: &str = "data-carousel-dot";
pub const PREV_TABINDEX_ATTR: &str = "data-prev-tabindex";
pub const ACTIVE_CLASS: &str = "is-active";
pub const DOT_CLASS: &str = "carousel__dot";

/// Elements inside a slide that can take keyboard focus, plus those whose
/// tabindex was stashed while their slide was hidden.
pub const FOCUSABLE: &str = "a,button,input,textarea,select,\
[tabindex]:not([tabindex=\"-1\"]),[data-prev-tabindex]";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
