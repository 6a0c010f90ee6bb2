use carousel_model::FocusTarget;

const CONTROL_TAGS: [&str; 5] = ["A", "BUTTON", "INPUT", "SELECT", "TEXTAREA"];

/// Classify the active element for keyboard handling. Arrow keys pressed on
/// a link, button or form field keep their native meaning.
pub fn classify(inside_region: bool, tag_name: &str) -> FocusTarget {
    if !inside_region {
        FocusTarget::Outside
    } else if CONTROL_TAGS
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(tag_name))
    {
        FocusTarget::Control
    } else {
        FocusTarget::Region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_inside_the_region() {
        assert_eq!(classify(true, "BUTTON"), FocusTarget::Control);
        assert_eq!(classify(true, "a"), FocusTarget::Control);
        assert_eq!(classify(true, "SECTION"), FocusTarget::Region);
        assert_eq!(classify(false, "DIV"), FocusTarget::Outside);
    }
}
