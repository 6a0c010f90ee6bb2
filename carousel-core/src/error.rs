use thiserror::Error;

/// Required structure was missing when mounting a carousel.
///
/// Optional structure (prev/next controls, indicators) never produces an
/// error; it simply stays unwired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("carousel region element not found")]
    MissingRegion,
    #[error("carousel viewport element not found")]
    MissingViewport,
    #[error("carousel track element not found")]
    MissingTrack,
    #[error("carousel track contains no slides")]
    NoSlides,
}
