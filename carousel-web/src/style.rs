//! Inline style values written to the track.

use carousel_model::Transition;

/// `transform` value for a horizontal offset in pixels.
pub fn translate(offset: f32) -> String {
    // Avoid "-0px" and long float tails in the style attribute.
    let rounded = (offset * 100.0).round() / 100.0;
    let value = if rounded == 0.0 { 0.0 } else { rounded };
    format!("translate3d({value}px, 0, 0)")
}

/// `transition` value: empty defers to the stylesheet.
pub fn transition(transition: Transition) -> &'static str {
    match transition {
        Transition::Animated => "",
        Transition::Immediate => "none",
    }
}

/// Parse a computed CSS length such as `"16px"`. Keywords like `normal`
/// resolve to zero.
pub fn parse_px(raw: &str) -> f32 {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    match number.parse::<f32>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
