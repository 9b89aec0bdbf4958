//! Inverse of the standard normal cumulative distribution.
//!
//! Uses Peter Acklam's rational approximation, which keeps the absolute
//! error below `1.2e-9` across the open unit interval. That is far tighter
//! than the six significant digits the Wilson bound needs.

use placerank_core::{Confidence, ScoreError};

const CENTRAL_NUMERATOR: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const CENTRAL_DENOMINATOR: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const TAIL_NUMERATOR: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const TAIL_DENOMINATOR: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

/// Below this probability (and above its complement) the tail branch applies.
const TAIL_BREAK: f64 = 0.024_25;

/// Return `x` such that `P(Z <= x) = p` for a standard normal `Z`.
///
/// # Errors
/// Returns [`ScoreError::InvalidProbability`] unless `p` lies strictly
/// between 0 and 1.
///
/// # Examples
/// ```
/// use placerank_scorer::standard_normal_quantile;
///
/// let z = standard_normal_quantile(0.975)?;
/// assert!((z - 1.959_964).abs() < 1e-6);
/// assert_eq!(standard_normal_quantile(0.5)?, 0.0);
/// # Ok::<(), placerank_core::ScoreError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the rational approximation is evaluated in floating point"
)]
pub fn standard_normal_quantile(p: f64) -> Result<f64, ScoreError> {
    if !(p > 0.0 && p < 1.0) {
        return Err(ScoreError::InvalidProbability { value: p });
    }
    let z = if p < TAIL_BREAK {
        lower_tail(p)
    } else if p > 1.0 - TAIL_BREAK {
        -lower_tail(1.0 - p)
    } else {
        let q = p - 0.5;
        let r = q * q;
        horner(&CENTRAL_NUMERATOR, r) * q / horner(&CENTRAL_DENOMINATOR, r).mul_add(r, 1.0)
    };
    Ok(z)
}

/// Two-tailed critical value for `confidence`.
///
/// This is the quantile at `1 - (1 - confidence) / 2`, e.g. about `1.96`
/// for a 95% level.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the tail probability is derived in floating point"
)]
pub fn two_tailed_z(confidence: Confidence) -> f64 {
    // Work from the lower tail: `(1 - c) / 2` stays inside (0, 0.5] for any
    // validated level, even where `1 - (1 - c) / 2` would round to 1.
    let tail = (1.0 - confidence.get()) / 2.0;
    standard_normal_quantile(tail).map_or(0.0, |z| -z)
}

#[expect(
    clippy::float_arithmetic,
    reason = "the rational approximation is evaluated in floating point"
)]
fn lower_tail(p: f64) -> f64 {
    let q = (-2.0 * p.ln()).sqrt();
    horner(&TAIL_NUMERATOR, q) / horner(&TAIL_DENOMINATOR, q).mul_add(q, 1.0)
}

fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .fold(0.0, |acc, &coefficient| acc.mul_add(x, coefficient))
}
