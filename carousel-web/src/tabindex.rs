//! Keeping focusable content of hidden slides out of the tab order.
//!
//! When a slide is hidden its focusable descendants get `tabindex="-1"` and
//! their previous value is stashed in `data-prev-tabindex` (empty when there
//! was none). When the slide becomes visible again the stash is restored.

/// Attribute writes for one focusable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabindexChange {
    Keep,
    /// Stash `stash` (if given) and set `tabindex="-1"`.
    Disable { stash: Option<String> },
    /// Drop the stash and set `tabindex` to the value, or remove it.
    Restore(Option<String>),
}

pub fn plan(
    hidden: bool,
    current: Option<&str>,
    stashed: Option<&str>,
) -> TabindexChange {
    match (hidden, stashed) {
        // Already disabled by us; the stash holds the original.
        (true, Some(_)) => TabindexChange::Disable { stash: None },
        (true, None) => TabindexChange::Disable {
            stash: Some(current.unwrap_or_default().to_string()),
        },
        (false, Some(previous)) => TabindexChange::Restore(
            (!previous.is_empty()).then(|| previous.to_string()),
        ),
        (false, None) => TabindexChange::Keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiding_stashes_the_original_once() {
        assert_eq!(
            plan(true, None, None),
            TabindexChange::Disable {
                stash: Some(String::new())
            }
        );
        assert_eq!(
            plan(true, Some("0"), None),
            TabindexChange::Disable {
                stash: Some("0".into())
            }
        );
        assert_eq!(
            plan(true, Some("-1"), Some("0")),
            TabindexChange::Disable { stash: None }
        );
    }

    #[test]
    fn showing_restores_or_removes() {
        assert_eq!(
            plan(false, Some("-1"), Some("")),
            TabindexChange::Restore(None)
        );
        assert_eq!(
            plan(false, Some("-1"), Some("2")),
            TabindexChange::Restore(Some("2".into()))
        );
        assert_eq!(plan(false, Some("0"), None), TabindexChange::Keep);
    }
}
