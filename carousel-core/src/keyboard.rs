use carousel_model::{FocusTarget, Key, KeyInput};

/// Discrete navigation request, independent of how it was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Prev,
    Next,
    First,
    Last,
    Index(usize),
}

/// Map a key press to navigation. Keys are only honoured while focus is in
/// the carousel region and not on one of its buttons or links, so normal
/// tabbing through child controls keeps working.
pub fn intent_for(input: KeyInput) -> Option<NavIntent> {
    if input.focus != FocusTarget::Region {
        return None;
    }
    match input.key {
        Key::ArrowLeft => Some(NavIntent::Prev),
        Key::ArrowRight => Some(NavIntent::Next),
        Key::Home => Some(NavIntent::First),
        Key::End => Some(NavIntent::Last),
        Key::Other => None,
    }
}
