use std::f64::consts::PI;

/// Fraction of `duration_ms` covered after `elapsed_ms`, clamped to `0..=1`.
/// A zero-length phase is already complete.
pub fn progress(elapsed_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    (elapsed_ms as f64 / duration_ms as f64).clamp(0.0, 1.0)
}

/// Cubic ease-in-out. Monotonic on `0..=1`, fixed at both ends.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

pub fn interpolate(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * ease_in_out(t)
}

/// Half-sine arc: zero at take-off and landing, `height` at the apex.
pub fn jump_elevation(height: f64, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    height * (PI * t).sin().max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_monotonic_and_pinned() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        let mut last = 0.0;
        for i in 1..=100 {
            let v = ease_in_out(i as f64 / 100.0);
            assert!(v >= last, "easing dropped at {}", i);
            last = v;
        }
    }

    #[test]
    fn zero_duration_is_complete() {
        assert_eq!(progress(0, 0), 1.0);
        assert_eq!(progress(50, 100), 0.5);
        assert_eq!(progress(500, 100), 1.0);
    }

    #[test]
    fn jump_lands_where_it_took_off() {
        assert_eq!(jump_elevation(60.0, 0.0), 0.0);
        assert!((jump_elevation(60.0, 0.5) - 60.0).abs() < 1e-9);
        assert!(jump_elevation(60.0, 1.0).abs() < 1e-9);
    }

    #[test]
    fn interpolate_reaches_target() {
        assert_eq!(interpolate(10.0, 130.0, 0.0), 10.0);
        assert_eq!(interpolate(10.0, 130.0, 1.0), 130.0);
    }
}
