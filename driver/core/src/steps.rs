//! Step Index Mapping
//!
//! Pure functions mapping the normalized progress scalar to discrete
//! positions. Every consumer goes through these same functions, which is
//! the core consistency property of the whole system: for a given progress
//! value, all subsystems agree on which take and which month is current.

/// Number of discrete takes in the full sequence (13 months x 4).
pub const TOTAL_STEPS: u32 = 52;

/// Takes per month.
pub const STEPS_PER_MONTH: u32 = 4;

/// Number of month groups in the sequence.
pub const MONTHS: u32 = 13;

/// Tolerance for representation error when scaling progress back up to a
/// step count. `k / 52.0 * 52.0` lands just below `k` for some k (15 and
/// 30 among the first 52), so a bare floor would put an exact boundary in
/// the previous bucket.
const SCALE_EPSILON: f64 = 1e-9;

/// Map progress in `[0, 1)` to a step index in `[0, total_steps - 1]`.
///
/// The mapping is `floor(progress * total_steps)`, clamped so that inputs
/// at or beyond the upper bound still land in the last bucket. Boundary
/// values are nudged by [`SCALE_EPSILON`] before flooring so that the exact
/// progress of step k always maps back to k.
#[must_use]
pub fn step_index(progress: f64, total_steps: u32) -> u32 {
    if total_steps == 0 {
        return 0;
    }
    let raw = (progress * f64::from(total_steps) + SCALE_EPSILON).floor();
    if raw.is_nan() || raw < 0.0 {
        return 0;
    }
    let max = total_steps - 1;
    if raw >= f64::from(max) {
        max
    } else {
        // Representable exactly: raw is a small non-negative integer.
        raw as u32
    }
}

/// Map a step index to its month group: `floor(step / steps_per_month)`.
#[must_use]
pub fn month_index(step: u32, steps_per_month: u32) -> u32 {
    step / steps_per_month.max(1)
}

/// Progress value at the start of a step: `step / total_steps`.
#[must_use]
pub fn progress_for_step(step: u32, total_steps: u32) -> f64 {
    if total_steps == 0 {
        return 0.0;
    }
    f64::from(step) / f64::from(total_steps)
}

/// Nearest step boundary to a progress value: `round(progress * total_steps)`.
///
/// Unlike [`step_index`], the result may equal `total_steps` (progress close
/// to 1 rounds up past the last bucket start); callers clamp according to
/// their own contract — the gesture resolver caps at `total_steps - 1`, the
/// idle snap converts back to progress and relies on the store's clamp.
#[must_use]
pub fn nearest_step(progress: f64, total_steps: u32) -> u32 {
    let raw = (progress * f64::from(total_steps)).round();
    if raw.is_nan() || raw < 0.0 {
        return 0;
    }
    if raw >= f64::from(total_steps) {
        total_steps
    } else {
        raw as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_boundaries() {
        assert_eq!(step_index(0.0, TOTAL_STEPS), 0);
        assert_eq!(step_index(0.9999, TOTAL_STEPS), 51);
        for k in 0..TOTAL_STEPS {
            let p = f64::from(k) / f64::from(TOTAL_STEPS);
            assert_eq!(step_index(p, TOTAL_STEPS), k, "k = {k}");
        }
    }

    #[test]
    fn test_boundary_progress_survives_scaling_error() {
        // k / 52.0 * 52.0 rounds below k for these k; the floor must not
        // slip into the previous bucket.
        for k in [15, 30] {
            let p = f64::from(k) / f64::from(TOTAL_STEPS);
            assert!(p * f64::from(TOTAL_STEPS) <= f64::from(k));
            assert_eq!(step_index(p, TOTAL_STEPS), k, "k = {k}");
        }
    }

    #[test]
    fn test_step_mapping_is_monotonic() {
        let mut last = 0;
        for i in 0..=1000 {
            let p = f64::from(i) / 1001.0;
            let step = step_index(p, TOTAL_STEPS);
            assert!(step >= last, "progress {p} mapped backwards");
            last = step;
        }
    }

    #[test]
    fn test_step_index_clamps_out_of_range() {
        assert_eq!(step_index(-0.5, TOTAL_STEPS), 0);
        assert_eq!(step_index(1.0, TOTAL_STEPS), 51);
        assert_eq!(step_index(5.0, TOTAL_STEPS), 51);
        assert_eq!(step_index(f64::NAN, TOTAL_STEPS), 0);
    }

    #[test]
    fn test_month_mapping() {
        assert_eq!(month_index(0, STEPS_PER_MONTH), 0);
        assert_eq!(month_index(3, STEPS_PER_MONTH), 0);
        assert_eq!(month_index(4, STEPS_PER_MONTH), 1);
        assert_eq!(month_index(51, STEPS_PER_MONTH), 12);
    }

    #[test]
    fn test_nearest_step_rounds() {
        assert_eq!(nearest_step(0.0, TOTAL_STEPS), 0);
        // 0.1013 * 52 = 5.2676 -> 5
        assert_eq!(nearest_step(0.1013, TOTAL_STEPS), 5);
        // Close to 1 rounds up to the full count; callers clamp.
        assert_eq!(nearest_step(0.9999, TOTAL_STEPS), 52);
        assert_eq!(nearest_step(-1.0, TOTAL_STEPS), 0);
    }

    #[test]
    fn test_progress_for_step_round_trips() {
        for k in 0..TOTAL_STEPS {
            let p = progress_for_step(k, TOTAL_STEPS);
            assert_eq!(step_index(p, TOTAL_STEPS), k);
            assert_eq!(nearest_step(p, TOTAL_STEPS), k);
        }
    }

    #[test]
    fn test_zero_steps_is_inert() {
        assert_eq!(step_index(0.5, 0), 0);
        assert_eq!(nearest_step(0.5, 0), 0);
        assert!((progress_for_step(3, 0) - 0.0).abs() < f64::EPSILON);
    }
}
