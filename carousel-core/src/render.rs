//! Projection of controller state into a [`Frame`].
//!
//! `Carousel::render` is the single writer of visual state: every
//! transition ends by projecting a fresh frame and handing it to the host.

use carousel_model::Frame;

use crate::a11y;
use crate::controller::Carousel;
use crate::host::CarouselHost;

impl<H: CarouselHost> Carousel<H> {
    /// The frame the host should currently be showing.
    pub fn frame(&self) -> Frame {
        let count = self.structure.slide_count;
        let indicators = if self.structure.has_indicators {
            a11y::indicator_frames(count, self.index)
        } else {
            Vec::new()
        };
        Frame {
            offset: self.offset,
            transition: self.transition,
            active_index: self.index,
            prev_disabled: !self.can_go_prev(),
            next_disabled: !self.can_go_next(),
            indicators,
            slides: a11y::slide_frames(
                count,
                self.index,
                self.settings.slides_per_view,
            ),
        }
    }

    pub(crate) fn render(&mut self) {
        let frame = self.frame();
        self.host.render(&frame);
    }
}
