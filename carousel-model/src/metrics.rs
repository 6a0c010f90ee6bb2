/// Live layout reading for one slide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measurement {
    pub slide_width: f32,
    pub gap: f32,
}

impl Measurement {
    /// Build a measurement, coercing NaN, infinities and negative readings to zero.
    pub fn new(slide_width: f32, gap: f32) -> Self {
        Self {
            slide_width: sanitize(slide_width),
            gap: sanitize(gap),
        }
    }

    /// Distance between the start of one slide and the start of the next.
    #[inline]
    pub fn step(&self) -> f32 {
        self.slide_width + self.gap
    }

    pub fn is_degenerate(&self) -> bool {
        self.step() <= 0.0
    }
}

fn sanitize(px: f32) -> f32 {
    if px.is_finite() && px > 0.0 { px } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_includes_gap() {
        let m = Measurement::new(300.0, 20.0);
        assert_eq!(m.step(), 320.0);
        assert!(!m.is_degenerate());
    }

    #[test]
    fn bad_readings_become_zero() {
        let m = Measurement::new(f32::NAN, -4.0);
        assert_eq!(m, Measurement::default());
        assert!(m.is_degenerate());
        assert_eq!(Measurement::new(f32::INFINITY, 8.0).step(), 8.0);
    }
}
