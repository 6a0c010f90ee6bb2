//! Per-instance settings declared as data attributes on the carousel root.
//!
//! Markup is authored by hand, so a bad attribute value never prevents the
//! carousel from mounting: it is reported as a warning and the base value
//! is kept.

use carousel_core::{CarouselSettings, constants::timing};
use carousel_model::WrapMode;

use crate::{
    util::{parse_autoplay, parse_bool},
    validation::SettingsWarnings,
};

pub const ATTR_LOOP: &str = "data-carousel-loop";
pub const ATTR_AUTOPLAY: &str = "data-carousel-autoplay";
pub const ATTR_PER_VIEW: &str = "data-carousel-per-view";
pub const ATTR_REDUCED_MOTION: &str = "data-carousel-reduced-motion";

pub const ALL: [&str; 4] =
    [ATTR_LOOP, ATTR_AUTOPLAY, ATTR_PER_VIEW, ATTR_REDUCED_MOTION];

/// Overlay attribute values onto `base`.
///
/// Boolean attributes follow HTML semantics: presence with an empty value
/// means `true`.
pub fn settings_from_attributes<'a, I>(
    base: CarouselSettings,
    attributes: I,
) -> (CarouselSettings, SettingsWarnings)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut settings = base;
    let mut warnings = SettingsWarnings::default();

    for (name, value) in attributes {
        match name {
            ATTR_LOOP => match flag(value) {
                Some(true) => settings.wrap = WrapMode::Loop,
                Some(false) => settings.wrap = WrapMode::Finite,
                None => invalid(&mut warnings, name, value, "true or false"),
            },
            ATTR_REDUCED_MOTION => match flag(value) {
                Some(reduced) => settings.reduced_motion = reduced,
                None => invalid(&mut warnings, name, value, "true or false"),
            },
            ATTR_AUTOPLAY => {
                if value.trim().is_empty() {
                    settings.autoplay = Some(timing::AUTOPLAY_INTERVAL);
                } else {
                    match parse_autoplay(value) {
                        Ok(interval) => settings.autoplay = interval,
                        Err(_) => invalid(
                            &mut warnings,
                            name,
                            value,
                            "a duration such as 5s, or off",
                        ),
                    }
                }
            }
            ATTR_PER_VIEW => match value.trim().parse::<usize>() {
                Ok(count) if count > 0 => settings.slides_per_view = count,
                _ => invalid(&mut warnings, name, value, "a positive integer"),
            },
            _ => {}
        }
    }

    for warning in warnings.iter() {
        tracing::warn!(message = %warning.message, "ignoring carousel attribute");
    }

    (settings, warnings)
}

fn flag(value: &str) -> Option<bool> {
    if value.trim().is_empty() {
        Some(true)
    } else {
        parse_bool(value)
    }
}

fn invalid(
    warnings: &mut SettingsWarnings,
    name: &str,
    value: &str,
    expected: &str,
) {
    warnings.push_with_hint(
        format!("{name}=\"{value}\" is not understood"),
        format!("Expected {expected}"),
    );
}
