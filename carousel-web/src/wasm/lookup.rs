//! Finding a carousel's parts under its root element.

use carousel_core::{MountError, Structure};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::selectors::{
    DOT, DOT_ATTR, DOT_CLASS, DOTS, NEXT, PREV, SLIDE, TRACK, VIEWPORT,
};

pub(crate) struct Parts {
    pub(crate) root: HtmlElement,
    pub(crate) viewport: HtmlElement,
    pub(crate) track: HtmlElement,
    pub(crate) slides: Vec<HtmlElement>,
    pub(crate) prev: Option<Element>,
    pub(crate) next: Option<Element>,
    pub(crate) dots: Vec<Element>,
    pub(crate) structure: Structure,
}

#[derive(Debug)]
pub(crate) enum LookupError {
    Mount(MountError),
    Dom(JsValue),
}

impl From<JsValue> for LookupError {
    fn from(err: JsValue) -> Self {
        LookupError::Dom(err)
    }
}

impl From<MountError> for LookupError {
    fn from(err: MountError) -> Self {
        LookupError::Mount(err)
    }
}

/// Look up every part of the carousel rooted at `root`. Nothing in the page
/// is modified unless all required parts are present.
pub(crate) fn find_parts(
    document: &Document,
    root: Option<Element>,
) -> Result<Parts, LookupError> {
    let root = root
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(MountError::MissingRegion)?;
    let viewport =
        find_html(&root, VIEWPORT)?.ok_or(MountError::MissingViewport)?;
    let track = find_html(&root, TRACK)?.ok_or(MountError::MissingTrack)?;
    let slides = find_all(&track, SLIDE)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect::<Vec<_>>();

    let mut structure = Structure::new(slides.len());
    structure.validate()?;

    let prev = root.query_selector(PREV)?;
    let next = root.query_selector(NEXT)?;
    let dots = indicator_dots(document, &root, slides.len())?;

    structure.has_prev = prev.is_some();
    structure.has_next = next.is_some();
    structure.has_indicators = !dots.is_empty();

    Ok(Parts {
        root,
        viewport,
        track,
        slides,
        prev,
        next,
        dots,
        structure,
    })
}

fn find_html(
    scope: &Element,
    selector: &str,
) -> Result<Option<HtmlElement>, JsValue> {
    Ok(scope
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

fn find_all(scope: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = scope.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Pre-rendered `[data-carousel-dot]` buttons, or one generated button per
/// slide inside an empty `[data-carousel-dots]` container.
fn indicator_dots(
    document: &Document,
    root: &Element,
    slide_count: usize,
) -> Result<Vec<Element>, JsValue> {
    let existing = find_all(root, DOT)?;
    if !existing.is_empty() {
        return Ok(existing);
    }
    let Some(container) = root.query_selector(DOTS)? else {
        return Ok(Vec::new());
    };

    let mut dots = Vec::with_capacity(slide_count);
    for i in 0..slide_count {
        let dot = document.create_element("button")?;
        dot.set_attribute("type", "button")?;
        dot.set_attribute("class", DOT_CLASS)?;
        dot.set_attribute(DOT_ATTR, &i.to_string())?;
        container.append_child(&dot)?;
        dots.push(dot);
    }
    Ok(dots)
}

impl From<LookupError> for JsValue {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::Mount(err) => JsValue::from_str(&err.to_string()),
            LookupError::Dom(err) => err,
        }
    }
}
