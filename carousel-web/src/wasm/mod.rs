mod driver;
mod host;
mod lookup;

pub use driver::CarouselHandle;

use carousel_config::{attributes, settings_from_attributes};
use carousel_core::{Carousel, CarouselSettings};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use self::{driver::Driver, host::DomHost, lookup::LookupError};
use crate::{
    mounting::{mount_each, root_tabindex, viewport_touch_action},
    selectors::{REDUCED_MOTION_QUERY, ROOT},
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

/// Mount every `[data-carousel]` on the page. Carousels with missing
/// required parts are skipped and left untouched.
#[wasm_bindgen(js_name = mountAll)]
pub fn mount_all() -> Result<js_sys::Array, JsValue> {
    let (window, document) = page()?;
    let roots = document.query_selector_all(ROOT)?;
    let handles = js_sys::Array::new();

    let mounted = mount_each(roots.length() as usize, |position| {
        let root = roots
            .item(position as u32)
            .and_then(|node| node.dyn_into::<Element>().ok());
        mount_root(&window, &document, root)
    });
    for handle in mounted {
        handles.push(&JsValue::from(handle));
    }

    tracing::debug!(mounted = handles.length(), "carousels mounted");
    Ok(handles)
}

/// Mount the carousel whose root matches `selector`.
#[wasm_bindgen(js_name = mountCarousel)]
pub fn mount_carousel(selector: &str) -> Result<CarouselHandle, JsValue> {
    let (window, document) = page()?;
    let root = document.query_selector(selector)?;
    Ok(mount_root(&window, &document, root)?)
}

fn page() -> Result<(Window, Document), JsValue> {
    let window =
        web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    Ok((window, document))
}

fn mount_root(
    window: &Window,
    document: &Document,
    root: Option<Element>,
) -> Result<CarouselHandle, LookupError> {
    let parts = lookup::find_parts(document, root)?;
    prepare(&parts.root, &parts.viewport)?;
    let settings = settings_for(window, &parts.root);

    let host = DomHost {
        window: window.clone(),
        viewport: parts.viewport,
        track: parts.track,
        slides: parts.slides,
        prev: parts.prev,
        next: parts.next,
        dots: parts.dots,
        slides_per_view: settings.slides_per_view,
    };
    let carousel = Carousel::mount(parts.structure, host, settings)?;

    let driver = Driver::new(carousel, window.clone(), parts.root);
    driver.wire()?;
    driver.start();
    Ok(CarouselHandle::new(driver))
}

/// Make the root focusable for keyboard navigation and keep horizontal
/// touch gestures away from browser panning.
fn prepare(root: &HtmlElement, viewport: &HtmlElement) -> Result<(), JsValue> {
    if let Some(tabindex) = root_tabindex(root.get_attribute("tabindex").as_deref())
    {
        root.set_attribute("tabindex", tabindex)?;
    }
    let style = viewport.style();
    let inline = style.get_property_value("touch-action")?;
    if let Some(action) = viewport_touch_action(&inline) {
        style.set_property("touch-action", action)?;
    }
    Ok(())
}

fn settings_for(window: &Window, root: &HtmlElement) -> CarouselSettings {
    let declared: Vec<(&str, String)> = attributes::ALL
        .iter()
        .filter_map(|name| root.get_attribute(name).map(|value| (*name, value)))
        .collect();
    // Attribute warnings are logged where they are found.
    let (settings, _) = settings_from_attributes(
        CarouselSettings::default(),
        declared.iter().map(|(name, value)| (*name, value.as_str())),
    );

    let prefers_reduced = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());

    settings.with_reduced_motion(settings.reduced_motion || prefers_reduced)
}
