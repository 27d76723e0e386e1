//! Pointer-to-value mapping for the picker surfaces.
//!
//! A picker surface exposes a logical [0, 1] coordinate space regardless
//! of its physical pixel size. These helpers translate between the two,
//! clamping pointer positions so a drag that leaves the surface keeps
//! producing valid values.

/// Map a pointer coordinate along one axis to a fraction in [0, 1].
///
/// A surface narrower than two pixels has no usable axis, so it maps to a
/// fixed 0 instead of dividing by zero.
pub fn position_to_fraction(position: f64, extent: i32) -> f64 {
    if extent <= 1 {
        return 0.0;
    }
    (position / (extent - 1) as f64).clamp(0.0, 1.0)
}

/// Inverse of [`position_to_fraction`], for placing a marker.
pub fn fraction_to_position(fraction: f64, extent: i32) -> f64 {
    if extent <= 1 {
        return 0.0;
    }
    fraction * (extent - 1) as f64
}

/// Map a 2D pointer position to (saturation, value).
///
/// Saturation grows left to right; value grows bottom to top (screen-down
/// is value-down). Degenerate axes map to a fixed 0.
pub fn position_to_sat_val(x: f64, y: f64, width: i32, height: i32) -> (f64, f64) {
    let saturation = position_to_fraction(x, width);
    let value = if height <= 1 {
        0.0
    } else {
        1.0 - position_to_fraction(y, height)
    };
    (saturation, value)
}

/// Marker position for a (saturation, value) pair on a plane of the
/// given pixel size.
pub fn sat_val_to_position(saturation: f64, value: f64, width: i32, height: i32) -> (f64, f64) {
    (
        fraction_to_position(saturation, width),
        fraction_to_position(1.0 - value, height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_map_to_unit_interval_ends() {
        assert_eq!(position_to_fraction(0.0, 101), 0.0);
        assert_eq!(position_to_fraction(100.0, 101), 1.0);
        assert_eq!(position_to_fraction(50.0, 101), 0.5);
    }

    #[test]
    fn test_out_of_bounds_positions_clamp() {
        assert_eq!(position_to_fraction(-25.0, 101), 0.0);
        assert_eq!(position_to_fraction(500.0, 101), 1.0);
    }

    #[test]
    fn test_degenerate_extent_yields_fixed_value() {
        assert_eq!(position_to_fraction(10.0, 1), 0.0);
        assert_eq!(position_to_fraction(10.0, 0), 0.0);
        assert_eq!(position_to_fraction(10.0, -3), 0.0);
        assert_eq!(fraction_to_position(0.5, 1), 0.0);
        assert_eq!(position_to_sat_val(5.0, 5.0, 1, 1), (0.0, 0.0));
    }

    #[test]
    fn test_vertical_axis_is_inverted() {
        let (s, v) = position_to_sat_val(0.0, 0.0, 101, 51);
        assert_eq!((s, v), (0.0, 1.0));
        let (s, v) = position_to_sat_val(100.0, 50.0, 101, 51);
        assert_eq!((s, v), (1.0, 0.0));
    }

    #[test]
    fn test_marker_position_round_trip() {
        let (x, y) = sat_val_to_position(0.25, 0.75, 201, 101);
        let (s, v) = position_to_sat_val(x, y, 201, 101);
        assert!((s - 0.25).abs() < 1e-12);
        assert!((v - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint_pointer_selects_cyan() {
        // Width 101, pointer at x=50: hue 0.5, which is cyan at full
        // saturation and value.
        let hue = position_to_fraction(50.0, 101);
        let (r, g, b) = crate::color::hsv_to_rgb(hue, 1.0, 1.0);
        assert!(r.abs() < 1e-9);
        assert!((g - 1.0).abs() < 1e-9);
        assert!((b - 1.0).abs() < 1e-9);
    }
}
