//! Offset arithmetic for a strip of equally spaced slides.
//!
//! Offsets are horizontal translations of the strip: zero shows the first
//! slide, more negative values reveal later slides.

/// Highest logical index when `per_view` slides fit in the viewport.
#[inline]
pub fn last_index(slide_count: usize, per_view: usize) -> usize {
    slide_count.saturating_sub(per_view.max(1))
}

/// Offset that aligns slide `index` with the viewport's leading edge.
#[inline]
pub fn settled_offset(index: usize, step: f32) -> f32 {
    0.0 - index as f32 * step
}

/// The valid (non rubber-banded) offset range `[min, 0]`.
#[inline]
pub fn offset_bounds(last_index: usize, step: f32) -> (f32, f32) {
    (settled_offset(last_index, step), 0.0)
}

/// Damp the portion of `candidate` lying outside `[min, max]` by `factor`.
pub fn rubber_band(candidate: f32, min: f32, max: f32, factor: f32) -> f32 {
    if candidate > max {
        max + (candidate - max) * factor
    } else if candidate < min {
        min + (candidate - min) * factor
    } else {
        candidate
    }
}

/// Distance a release must cover to commit a step.
#[inline]
pub fn swipe_threshold(slide_width: f32, min_px: f32, ratio: f32) -> f32 {
    min_px.max(slide_width * ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_slide_sits_at_positive_zero() {
        let offset = settled_offset(0, 320.0);
        assert_eq!(offset, 0.0);
        assert!(offset.is_sign_positive());
        assert_eq!(settled_offset(2, 320.0), -640.0);
    }

    #[test]
    fn last_index_respects_per_view() {
        assert_eq!(last_index(4, 1), 3);
        assert_eq!(last_index(4, 3), 1);
        assert_eq!(last_index(2, 5), 0);
        assert_eq!(last_index(4, 0), 3);
        assert_eq!(last_index(0, 1), 0);
    }

    #[test]
    fn rubber_band_damps_only_the_excess() {
        let (min, max) = offset_bounds(3, 100.0);
        assert_eq!(min, -300.0);
        assert_eq!(rubber_band(-150.0, min, max, 0.25), -150.0);
        assert_eq!(rubber_band(40.0, min, max, 0.25), 10.0);
        assert_eq!(rubber_band(-340.0, min, max, 0.25), -310.0);
    }

    #[test]
    fn threshold_has_a_floor() {
        assert_eq!(swipe_threshold(100.0, 26.0, 0.12), 26.0);
        assert!((swipe_threshold(1000.0, 26.0, 0.12) - 120.0).abs() < 1e-3);
        assert_eq!(swipe_threshold(0.0, 26.0, 0.12), 26.0);
    }
}
