use carousel_core::CarouselHost;
use carousel_model::{Frame, Measurement};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, Window};

use crate::{
    selectors::{ACTIVE_CLASS, FOCUSABLE, PREV_TABINDEX_ATTR},
    style,
    tabindex::{self, TabindexChange},
};

/// Renders frames into live DOM elements.
#[derive(Debug)]
pub(crate) struct DomHost {
    pub(crate) window: Window,
    pub(crate) viewport: HtmlElement,
    pub(crate) track: HtmlElement,
    pub(crate) slides: Vec<HtmlElement>,
    pub(crate) prev: Option<Element>,
    pub(crate) next: Option<Element>,
    pub(crate) dots: Vec<Element>,
    pub(crate) slides_per_view: usize,
}

impl CarouselHost for DomHost {
    fn measure(&self) -> Measurement {
        // With several slides per view the viewport spans a whole page, so
        // the first slide carries the step width.
        let slide_width = if self.slides_per_view > 1 {
            self.slides
                .first()
                .map(|slide| slide.get_bounding_client_rect().width())
        } else {
            None
        }
        .unwrap_or_else(|| self.viewport.get_bounding_client_rect().width());

        Measurement::new(slide_width as f32, self.track_gap())
    }

    fn render(&mut self, frame: &Frame) {
        if let Err(err) = self.try_render(frame) {
            tracing::warn!(error = ?err, "failed to render carousel frame");
        }
    }
}

impl DomHost {
    fn track_gap(&self) -> f32 {
        let Ok(Some(computed)) = self.window.get_computed_style(&self.track)
        else {
            return 0.0;
        };
        let column = computed
            .get_property_value("column-gap")
            .unwrap_or_default();
        let raw = if column.trim().is_empty() {
            computed.get_property_value("gap").unwrap_or_default()
        } else {
            column
        };
        style::parse_px(&raw)
    }

    fn try_render(&self, frame: &Frame) -> Result<(), JsValue> {
        let track_style = self.track.style();
        track_style
            .set_property("transition", style::transition(frame.transition))?;
        track_style.set_property("transform", &style::translate(frame.offset))?;

        set_disabled(self.prev.as_ref(), frame.prev_disabled)?;
        set_disabled(self.next.as_ref(), frame.next_disabled)?;

        for (dot, indicator) in self.dots.iter().zip(&frame.indicators) {
            dot.class_list()
                .toggle_with_force(ACTIVE_CLASS, indicator.active)?;
            dot.set_attribute("aria-selected", bool_attr(indicator.active))?;
            dot.set_attribute("aria-label", &indicator.label)?;
        }

        for (slide, meta) in self.slides.iter().zip(&frame.slides) {
            slide.set_attribute("aria-label", &meta.label)?;
            slide.set_attribute("aria-hidden", bool_attr(meta.hidden))?;
            set_focusable(slide, !meta.hidden)?;
        }

        Ok(())
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn set_disabled(
    control: Option<&Element>,
    disabled: bool,
) -> Result<(), JsValue> {
    match control {
        Some(control) if disabled => control.set_attribute("disabled", ""),
        Some(control) => control.remove_attribute("disabled"),
        None => Ok(()),
    }
}

fn set_focusable(slide: &HtmlElement, focusable: bool) -> Result<(), JsValue> {
    let nodes = slide.query_selector_all(FOCUSABLE)?;
    for i in 0..nodes.length() {
        let Some(element) =
            nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let current = element.get_attribute("tabindex");
        let stashed = element.get_attribute(PREV_TABINDEX_ATTR);
        match tabindex::plan(!focusable, current.as_deref(), stashed.as_deref())
        {
            TabindexChange::Keep => {}
            TabindexChange::Disable { stash } => {
                if let Some(previous) = stash {
                    element.set_attribute(PREV_TABINDEX_ATTR, &previous)?;
                }
                element.set_attribute("tabindex", "-1")?;
            }
            TabindexChange::Restore(previous) => {
                element.remove_attribute(PREV_TABINDEX_ATTR)?;
                match previous {
                    Some(value) => element.set_attribute("tabindex", &value)?,
                    None => element.remove_attribute("tabindex")?,
                }
            }
        }
    }
    Ok(())
}
