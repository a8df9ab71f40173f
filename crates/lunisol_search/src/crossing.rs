//! Generic angular crossing search.
//!
//! Secant iteration on the residual `wrap180(f(t) − target)`. Wrapping the
//! residual keeps sign-change tests valid across the 0°/360° seam, so the
//! same finder serves conjunctions (elongation 0°), oppositions (180°),
//! solstices and principal terms (solar longitude multiples of 30°), and
//! sidereal ingresses.

use lunisol_time::wrap180;

/// Maximum secant iterations per crossing.
const MAX_ITERATIONS: usize = 72;

/// Converged when the wrapped residual falls below this (degrees).
const RESIDUAL_TOL_DEG: f64 = 1e-7;

/// Converged when the secant step falls below this (days, ~1 ms).
const STEP_TOL_DAYS: f64 = 1e-8;

/// Secant seeds are placed this far on either side of the guess (days).
const SEED_OFFSET_DAYS: f64 = 1.5;

/// Residual difference below which the secant denominator is unusable.
const FLAT_RESIDUAL_DEG: f64 = 1e-12;

/// Find the instant where `f` crosses `target_deg`, near `jd_guess`.
///
/// `f` is an angular function of JD in any timescale; the result is in
/// the same timescale as the input. The caller must seed within roughly
/// one period of the true event; there is no "no root" detection. Returns
/// the best interior estimate within the iteration budget. In particular,
/// when the two seed residuals are numerically indistinguishable the loop
/// exits early instead of dividing by a near-zero denominator.
pub fn find_crossing<F>(f: F, target_deg: f64, jd_guess: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let residual = |t: f64| wrap180(f(t) - target_deg);

    let mut t0 = jd_guess - SEED_OFFSET_DAYS;
    let mut t1 = jd_guess + SEED_OFFSET_DAYS;
    let mut r0 = residual(t0);
    let mut r1 = residual(t1);

    let (mut best_t, mut best_r) = if r0.abs() <= r1.abs() {
        (t0, r0.abs())
    } else {
        (t1, r1.abs())
    };

    for _ in 0..MAX_ITERATIONS {
        if (r1 - r0).abs() < FLAT_RESIDUAL_DEG {
            break;
        }
        let t2 = t1 - r1 * (t1 - t0) / (r1 - r0);
        let r2 = residual(t2);
        if r2.abs() < best_r {
            best_r = r2.abs();
            best_t = t2;
        }
        let step = (t2 - t1).abs();
        t0 = t1;
        r0 = r1;
        t1 = t2;
        r1 = r2;
        if r2.abs() < RESIDUAL_TOL_DEG || step < STEP_TOL_DAYS {
            break;
        }
    }

    best_t
}

/// Check if a sign change is a genuine crossing vs a wrap discontinuity.
///
/// A wrapped residual jumping from ~+180 to ~−180 has a negative product
/// but is not a real crossing; genuine crossings change by well under a
/// half turn across one coarse step.
fn is_genuine_crossing(r_a: f64, r_b: f64) -> bool {
    r_a * r_b < 0.0 && (r_a - r_b).abs() < 270.0
}

/// Enumerate every crossing of `target_deg` in `[jd_start, jd_end]`.
///
/// Coarse scan at `step_days` for sign changes of the wrapped residual,
/// each bracket refined with [`find_crossing`] seeded at its midpoint.
/// Near-identical roots (within half a step) are deduplicated.
pub fn scan_crossings<F>(f: F, target_deg: f64, jd_start: f64, jd_end: f64, step_days: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    let residual = |t: f64| wrap180(f(t) - target_deg);

    let mut events = Vec::new();
    let mut t_prev = jd_start;
    let mut r_prev = residual(t_prev);

    loop {
        let t_curr = (t_prev + step_days).min(jd_end);
        let r_curr = residual(t_curr);

        if is_genuine_crossing(r_prev, r_curr) {
            let root = find_crossing(&f, target_deg, 0.5 * (t_prev + t_curr));
            let dup = events
                .last()
                .is_some_and(|&last: &f64| (root - last).abs() < 0.5 * step_days.max(0.5));
            if !dup && root >= jd_start && root <= jd_end {
                events.push(root);
            }
        }

        if t_curr >= jd_end {
            break;
        }
        t_prev = t_curr;
        r_prev = r_curr;
    }

    events
}
