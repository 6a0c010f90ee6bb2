//! Accessibility labels and visibility for slides and indicator dots.

use carousel_model::{IndicatorFrame, SlideFrame};

pub fn slide_label(position: usize, total: usize) -> String {
    format!("Slide {position} of {total}")
}

pub fn indicator_label(position: usize) -> String {
    format!("Go to slide {position}")
}

/// Slides `active .. active + per_view` are exposed; the rest are hidden
/// from assistive technology.
pub fn slide_frames(count: usize, active: usize, per_view: usize) -> Vec<SlideFrame> {
    let visible = active..active.saturating_add(per_view.max(1));
    (0..count)
        .map(|i| SlideFrame {
            label: slide_label(i + 1, count),
            hidden: !visible.contains(&i),
        })
        .collect()
}

pub fn indicator_frames(count: usize, active: usize) -> Vec<IndicatorFrame> {
    (0..count)
        .map(|i| IndicatorFrame {
            label: indicator_label(i + 1),
            active: i == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_slide_is_exposed() {
        let slides = slide_frames(3, 1, 1);
        assert_eq!(slides[0].label, "Slide 1 of 3");
        assert_eq!(
            slides.iter().map(|s| s.hidden).collect::<Vec<_>>(),
            vec![true, false, true]
        );
    }

    #[test]
    fn per_view_exposes_a_window() {
        let hidden: Vec<bool> =
            slide_frames(5, 1, 3).into_iter().map(|s| s.hidden).collect();
        assert_eq!(hidden, vec![true, false, false, false, true]);
    }

    #[test]
    fn indicators_label_one_based() {
        let dots = indicator_frames(2, 0);
        assert_eq!(dots[1].label, "Go to slide 2");
        assert!(dots[0].active && !dots[1].active);
    }
}
