#![allow(dead_code)]
//! Easing and interpolation primitives.

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Symmetric ease-in-out: `t < 0.5 ? 2t^2 : 1 - (-2t + 2)^2 / 2`.
/// Monotonic on [0,1] with fixed endpoints 0 and 1.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Normalized progress of `time` through `[start, start + duration]`, clamped
/// to [0,1]. A zero-length phase is treated as already complete.
#[inline]
pub fn phase_progress(time: f32, start: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    ((time - start) / duration).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn ease_non_decreasing() {
        let mut last = 0.0f32;
        for i in 0..=100 {
            let v = ease_in_out(i as f32 / 100.0);
            assert!(v >= last, "ease_in_out must be non-decreasing");
            last = v;
        }
    }

    #[test]
    fn ease_clamps_out_of_range_input() {
        assert_eq!(ease_in_out(-2.0), 0.0);
        assert_eq!(ease_in_out(3.0), 1.0);
    }

    #[test]
    fn progress_zero_duration_is_complete() {
        assert_eq!(phase_progress(100.0, 100.0, 0.0), 1.0);
    }
}
