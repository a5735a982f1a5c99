//! Numeric helpers shared by the animation evaluator.
//!
//! These are deliberately best-effort: nothing here fails. Callers that need
//! strict range guarantees validate upstream.

/// Linear interpolation between `a` and `b`.
///
/// A weight of exactly `0.0` is nudged to `1e-4` before use. This reproduces
/// a legacy guard in the original evaluator; the observable output depends on
/// it, so it stays until every downstream consumer is re-verified.
pub fn interpolate(a: f64, b: f64, weight: f64) -> f64 {
    let w = if weight == 0.0 { weight + 1e-4 } else { weight };
    a + (b - a) * w
}

/// Truncate an easing sample to three decimal places (`floor(raw * 1000) / 1000`).
///
/// Quantized progress keeps repeated samples of the same frame bit-identical
/// and damps float jitter at segment boundaries.
pub fn quantize_progress(raw: f64) -> f64 {
    (raw * 1000.0).floor() / 1000.0
}

/// Find `x` in `[0, 1]` such that `f(x)` is approximately `target`.
///
/// Bisection with tolerance `1e-6` and at most 100 iterations. If the sampled
/// function does not bracket a root (non-monotonic curves, out-of-range
/// targets) the endpoint with the better approximation is returned instead of
/// an error: this is best-effort and never fails.
pub fn invert_easing<F>(f: F, target: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    bisect(|x| f(x) - target, 0.0, 1.0, 1e-6, 100)
}

fn bisect<F>(f: F, mut a: f64, mut b: f64, xtol: f64, maxiter: u32) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut fa = f(a);
    let fb = f(b);

    if fa.abs() < xtol {
        return a;
    }
    if fb.abs() < xtol {
        return b;
    }

    // No sign change: pick the endpoint closest to a root.
    if fa * fb >= 0.0 {
        if fa > 0.0 && fb > 0.0 {
            return if fa < fb { a } else { b };
        } else if fa < 0.0 && fb < 0.0 {
            return if fa > fb { a } else { b };
        } else {
            return if fa.abs() < fb.abs() { a } else { b };
        }
    }

    for _ in 0..maxiter {
        let c = (a + b) / 2.0;
        if b - a < xtol {
            return c;
        }
        let fc = f(c);
        if fc.abs() < xtol {
            return c;
        }
        if fa * fc < 0.0 {
            b = c;
        } else {
            a = c;
            fa = fc;
        }
    }

    (a + b) / 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
