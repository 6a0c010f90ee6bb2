use carousel_model::{Frame, Measurement};

/// The seam between the controller and whatever displays it.
///
/// `render` is the only path by which visual state leaves the controller;
/// hosts write the frame onto their surface and keep no carousel state of
/// their own.
#[cfg_attr(test, mockall::automock)]
pub trait CarouselHost {
    /// Read slide width and inter-slide gap from live layout.
    fn measure(&self) -> Measurement;

    fn render(&mut self, frame: &Frame);
}
