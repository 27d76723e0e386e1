//! HSV/RGB colour math.
//!
//! The canonical colour everywhere in hueboard is an [`Hsv`] triple;
//! [`Rgb`] values are always derived from it, never stored alongside it.

/// Colour in HSV space, all channels normalised to [0, 1].
///
/// Hue is cyclic: 0 and 1 denote the same angle, stored unwrapped in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// A uniformly random triple, used when no saved colour is available.
    pub fn random() -> Self {
        Self::new(rand::random(), rand::random(), rand::random())
    }

    pub fn to_rgb(self) -> Rgb {
        let (r, g, b) = hsv_to_rgb(self.h, self.s, self.v);
        Rgb::new(r, g, b)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }

    pub fn from_array([h, s, v]: [f64; 3]) -> Self {
        Self::new(h, s, v)
    }
}

/// Colour in RGB space, all channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsv(self) -> Hsv {
        let (h, s, v) = rgb_to_hsv(self.r, self.g, self.b);
        Hsv::new(h, s, v)
    }

    /// Whether text drawn over this colour should be light rather than dark.
    pub fn is_dark(self) -> bool {
        is_dark(self.r, self.g, self.b)
    }

    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Apply to Cairo context as an opaque source colour.
    pub fn apply_to_cairo(&self, cr: &cairo::Context) {
        cr.set_source_rgb(self.r, self.g, self.b);
    }
}

/// Convert HSV to RGB using the branch-free hexagonal mapping.
///
/// Inputs are expected in [0, 1] but the function is total: it is periodic
/// in `h` with period 1 and returns a well-defined triple for any real `h`.
/// Callers clamp; this does not.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let f = |n: f64| {
        let k = (n + h * 6.0).rem_euclid(6.0);
        v - v * s * k.min(4.0 - k).min(1.0).max(0.0)
    };
    (f(5.0), f(3.0), f(1.0))
}

/// Convert RGB to HSV.
///
/// Achromatic inputs (chroma 0) report hue 0; black reports saturation 0
/// as well, avoiding a divide by zero. Hue information is inherently lost
/// at those points.
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let v = r.max(g).max(b);
    let c = v - r.min(g).min(b);

    let h = if c == 0.0 {
        0.0
    } else if v == r {
        (g - b) / c
    } else if v == g {
        2.0 + (b - r) / c
    } else {
        4.0 + (r - g) / c
    };
    let h = if h < 0.0 { h + 6.0 } else { h } / 6.0;

    let s = if v == 0.0 { 0.0 } else { c / v };

    (h, s, v)
}

/// BT.601-weighted luminance test for choosing a contrasting foreground.
pub fn is_dark(r: f64, g: f64, b: f64) -> bool {
    0.299 * r + 0.587 * g + 0.114 * b < 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < TOLERANCE
                && (actual.1 - expected.1).abs() < TOLERANCE
                && (actual.2 - expected.2).abs() < TOLERANCE,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_primary_fixed_points() {
        assert_close(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_close(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_close(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0));
        assert_close(hsv_to_rgb(0.5, 1.0, 1.0), (0.0, 1.0, 1.0));
        assert_close(hsv_to_rgb(0.0, 0.0, 1.0), (1.0, 1.0, 1.0));
        assert_close(hsv_to_rgb(0.7, 0.0, 0.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hue_is_periodic() {
        let a = hsv_to_rgb(0.25, 0.8, 0.6);
        let b = hsv_to_rgb(1.25, 0.8, 0.6);
        let c = hsv_to_rgb(-0.75, 0.8, 0.6);
        assert_close(a, b);
        assert_close(a, c);
    }

    #[test]
    fn test_channels_stay_in_gamut() {
        for hi in 0..20 {
            for si in 0..=4 {
                for vi in 0..=4 {
                    let (h, s, v) = (hi as f64 / 20.0, si as f64 / 4.0, vi as f64 / 4.0);
                    let (r, g, b) = hsv_to_rgb(h, s, v);
                    for ch in [r, g, b] {
                        assert!((0.0..=1.0).contains(&ch), "hsv({h},{s},{v}) -> {ch}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip() {
        for hi in 0..20 {
            for si in 1..=4 {
                for vi in 1..=4 {
                    let (h, s, v) = (hi as f64 / 20.0, si as f64 / 4.0, vi as f64 / 4.0);
                    let (r, g, b) = hsv_to_rgb(h, s, v);
                    assert_close(rgb_to_hsv(r, g, b), (h, s, v));
                }
            }
        }
    }

    #[test]
    fn test_round_trip_loses_hue_when_achromatic() {
        let (r, g, b) = hsv_to_rgb(0.4, 0.0, 0.7);
        assert_close(rgb_to_hsv(r, g, b), (0.0, 0.0, 0.7));
    }

    #[test]
    fn test_round_trip_loses_everything_at_black() {
        let (r, g, b) = hsv_to_rgb(0.4, 0.9, 0.0);
        assert_close(rgb_to_hsv(r, g, b), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_is_dark() {
        assert!(is_dark(0.0, 0.0, 0.0));
        assert!(!is_dark(1.0, 1.0, 1.0));
        // Pure red has luminance 0.299
        assert!(is_dark(1.0, 0.0, 0.0));
        // Pure green has luminance 0.587
        assert!(!is_dark(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_type_conversions_agree_with_free_functions() {
        let hsv = Hsv::new(0.12, 0.5, 0.9);
        let rgb = hsv.to_rgb();
        assert_eq!((rgb.r, rgb.g, rgb.b), hsv_to_rgb(0.12, 0.5, 0.9));

        let back = rgb.to_hsv();
        assert_close((back.h, back.s, back.v), (0.12, 0.5, 0.9));

        assert_eq!(Hsv::from_array(hsv.to_array()), hsv);
    }

    #[test]
    fn test_rgb8_rounds() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.5).to_rgb8(), (255, 0, 128));
    }

    #[test]
    fn test_random_triple_in_range() {
        for _ in 0..32 {
            let hsv = Hsv::random();
            assert!((0.0..1.0).contains(&hsv.h));
            assert!((0.0..1.0).contains(&hsv.s));
            assert!((0.0..1.0).contains(&hsv.v));
        }
    }
}
