//! Final Newton update with the residual formed in wider-than-native precision.
//!
//! After the fixed iteration schedule the guess is within a few ulps; what is
//! left is rounding error the native iteration cannot see. One more step whose
//! residual (`g^2 - x`, `g^3 - x` or `x*g^3 - 1`) is computed in double-double
//! (`f64` inputs) or `f64` (`f32` inputs) removes it. `strict` keeps the whole
//! step in the native width.
//!
//! Inputs near either end of the exponent range are first moved inward by an
//! exact power of two (`g` by `2^k`, `x` by `2^(n*k)`), so the residual neither
//! overflows nor drops into the subnormal range. The scale is undone on the
//! result.

use super::bits::{pow2_f32, pow2_f64};
use super::wide::DoubleDouble;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_THIRD_F32: f32 = 1.0 / 3.0;

const HUGE: f64 = f64::from_bits(0x6570_0000_0000_0000); // 2^600
const TINY: f64 = f64::from_bits(0x1a70_0000_0000_0000); // 2^-600
const SCALE: i32 = 128;

const HUGE_F32: f32 = f32::from_bits(0x5f80_0000); // 2^64
const TINY_F32: f32 = f32::from_bits(0x1f80_0000); // 2^-64
const SCALE_F32: i32 = 16;

#[inline(always)]
fn scale_exp_f64(x: f64) -> i32 {
    if x > HUGE {
        -SCALE
    } else if x < TINY {
        SCALE
    } else {
        0
    }
}

#[inline(always)]
fn scale_exp_f32(x: f32) -> i32 {
    if x > HUGE_F32 {
        -SCALE_F32
    } else if x < TINY_F32 {
        SCALE_F32
    } else {
        0
    }
}

/// `g` is the current root estimate, `twice` the `g + x/g` it came from.
#[inline(always)]
pub(crate) fn sqrt_f64(g: f64, twice: f64, x: f64, strict: bool) -> f64 {
    let k = scale_exp_f64(x);
    let g = g * pow2_f64(k);
    let twice = twice * pow2_f64(k);
    let x = x * pow2_f64(2 * k);
    let r = if strict {
        g * g - x
    } else {
        DoubleDouble::from_prod(g, g).sub_f64(x)
    };
    (g - r / twice) * pow2_f64(-k)
}

#[inline(always)]
pub(crate) fn sqrt_f32(g: f32, twice: f32, x: f32, strict: bool) -> f32 {
    let k = scale_exp_f32(x);
    let g = g * pow2_f32(k);
    let twice = twice * pow2_f32(k);
    let x = x * pow2_f32(2 * k);
    let corrected = if strict {
        g - (g * g - x) / twice
    } else {
        let (g, twice, x) = (g as f64, twice as f64, x as f64);
        (g - (g * g - x) / twice) as f32
    };
    corrected * pow2_f32(-k)
}

#[inline(always)]
pub(crate) fn cbrt_f64(g: f64, x: f64, strict: bool) -> f64 {
    let k = scale_exp_f64(x);
    let g = g * pow2_f64(k);
    let x = x * pow2_f64(3 * k);
    let r = if strict {
        g * g * g - x
    } else {
        DoubleDouble::from_prod(g, g).mul_f64(g).sub_f64(x)
    };
    (g - r / (3.0 * g * g)) * pow2_f64(-k)
}

#[inline(always)]
pub(crate) fn cbrt_f32(g: f32, x: f32, strict: bool) -> f32 {
    let k = scale_exp_f32(x);
    let g = g * pow2_f32(k);
    let x = x * pow2_f32(3 * k);
    let corrected = if strict {
        g - (g * g * g - x) / (3.0 * g * g)
    } else {
        let (g, x) = (g as f64, x as f64);
        (g - (g * g * g - x) / (3.0 * g * g)) as f32
    };
    corrected * pow2_f32(-k)
}

/// The residual `x*g^3 - 1` is invariant under `g * 2^-k`, `x * 2^(3k)`.
#[inline(always)]
pub(crate) fn rcbrt_f64(g: f64, x: f64, strict: bool) -> f64 {
    let k = scale_exp_f64(x);
    let g = g * pow2_f64(-k);
    let x = x * pow2_f64(3 * k);
    let r = if strict {
        (x * g) * (g * g) - 1.0
    } else {
        DoubleDouble::from_prod(x, g)
            .mul_f64(g)
            .mul_f64(g)
            .sub_f64(1.0)
    };
    (g - g * r * ONE_THIRD) * pow2_f64(k)
}

#[inline(always)]
pub(crate) fn rcbrt_f32(g: f32, x: f32, strict: bool) -> f32 {
    let k = scale_exp_f32(x);
    let g = g * pow2_f32(-k);
    let x = x * pow2_f32(3 * k);
    let corrected = if strict {
        g - g * ((x * g) * (g * g) - 1.0) * ONE_THIRD_F32
    } else {
        let (g, x) = (g as f64, x as f64);
        (g - g * ((x * g) * (g * g) - 1.0) * ONE_THIRD) as f32
    };
    corrected * pow2_f32(k)
}
