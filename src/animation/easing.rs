//! Easing curves on `t` in `[0, 1]`. Inputs outside are clamped.

fn unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

pub fn power2_in_out(t: f64) -> f64 {
    in_out(unit(t), 2)
}

pub fn power4_in_out(t: f64) -> f64 {
    in_out(unit(t), 4)
}

pub const BACK_OVERSHOOT: f64 = 1.7;

/// Overshoots past 1 before settling.
pub fn back_out(t: f64, overshoot: f64) -> f64 {
    let t = unit(t) - 1.0;
    t * t * ((overshoot + 1.0) * t + overshoot) + 1.0
}

fn in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        (2.0 * t).powi(power) / 2.0
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(power) / 2.0
    }
}

/// `cubic-bezier(...)` strings for curves that run as CSS transitions.
pub mod css {
    pub const POWER2_IN_OUT: &str = "cubic-bezier(0.45, 0, 0.55, 1)";
    pub const POWER3_OUT: &str = "cubic-bezier(0.33, 1, 0.68, 1)";
    pub const POWER4_IN_OUT: &str = "cubic-bezier(0.76, 0, 0.24, 1)";
    pub const SOFT: &str = "cubic-bezier(0.25, 0.1, 0.25, 1)";
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn endpoints_are_exact() {
        for ease in [power2_in_out, power4_in_out] {
            assert!(ease(0.0).abs() < EPS);
            assert!((ease(1.0) - 1.0).abs() < EPS);
        }
        assert!(back_out(0.0, BACK_OVERSHOOT).abs() < EPS);
        assert!((back_out(1.0, BACK_OVERSHOOT) - 1.0).abs() < EPS);
    }

    #[test]
    fn in_out_curves_are_symmetric_around_half() {
        for ease in [power2_in_out, power4_in_out] {
            assert!((ease(0.5) - 0.5).abs() < EPS);
            for t in [0.1, 0.25, 0.4] {
                assert!((ease(t) + ease(1.0 - t) - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn monotonic_curves_never_go_backwards() {
        for ease in [power2_in_out, power4_in_out] {
            let mut previous = 0.0;
            for step in 0..=100 {
                let value = ease(step as f64 / 100.0);
                assert!(value + EPS >= previous);
                previous = value;
            }
        }
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100).map(|s| back_out(s as f64 / 100.0, BACK_OVERSHOOT)).fold(0.0, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(power2_in_out(-3.0), 0.0);
        assert_eq!(power4_in_out(7.0), 1.0);
        assert_eq!(back_out(-2.0, BACK_OVERSHOOT), back_out(0.0, BACK_OVERSHOOT));
        assert_eq!(power2_in_out(f64::NAN), 0.0);
    }
}
