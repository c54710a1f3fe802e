//! Double-double arithmetic used by the `f64` corrector.
//!
//! A value is the unevaluated sum `hi + lo` with `|lo| <= ulp(hi) / 2`, about
//! 106 significant bits. Only the handful of operations the residuals need are
//! provided. Products come from an error-free `two_prod`: a fused multiply-add
//! when the target has one, Dekker splitting otherwise. Dekker needs both
//! factors below 2^995 so the split cannot overflow; callers keep their
//! operands inside that range.

#[cfg(any(
    target_arch = "aarch64",
    all(target_arch = "x86_64", target_feature = "fma")
))]
use super::arch::{HAS_FMA, fma_hw};

const SPLIT: f64 = 134_217_729.0; // 2^27 + 1

#[inline(always)]
fn split(a: f64) -> (f64, f64) {
    let t = SPLIT * a;
    let hi = t - (t - a);
    let lo = a - hi;
    (hi, lo)
}

/// `a * b` as `p + e` with `p = fl(a * b)`, without FMA.
#[inline(always)]
pub(crate) fn two_prod_dekker(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let (ah, al) = split(a);
    let (bh, bl) = split(b);
    let err = ((ah * bh - p) + ah * bl + al * bh) + al * bl;
    (p, err)
}

#[inline(always)]
pub(crate) fn two_prod(a: f64, b: f64) -> (f64, f64) {
    #[cfg(any(
        target_arch = "aarch64",
        all(target_arch = "x86_64", target_feature = "fma")
    ))]
    if HAS_FMA {
        let p = a * b;
        return (p, fma_hw(a, b, -p));
    }
    two_prod_dekker(a, b)
}

/// Requires `|a| >= |b|` (or `a == 0`).
#[inline(always)]
fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let z = s - a;
    (s, b - z)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DoubleDouble {
    pub hi: f64,
    pub lo: f64,
}

impl DoubleDouble {
    /// Exact product of two doubles.
    #[inline(always)]
    pub(crate) fn from_prod(a: f64, b: f64) -> Self {
        let (hi, lo) = two_prod(a, b);
        Self { hi, lo }
    }

    #[inline(always)]
    pub(crate) fn mul_f64(self, b: f64) -> Self {
        let (p, e) = two_prod(self.hi, b);
        let (hi, lo) = fast_two_sum(p, e + self.lo * b);
        Self { hi, lo }
    }

    /// `self - b` rounded to a double. `hi - b` is exact when `b` is within a
    /// factor of two of `hi`, which is the case for every residual formed
    /// here.
    #[inline(always)]
    pub(crate) fn sub_f64(self, b: f64) -> f64 {
        (self.hi - b) + self.lo
    }
}
