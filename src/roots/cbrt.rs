//! Cube root and reciprocal cube root.
//!
//! Both are odd, so the sign is split off up front and put back on the final
//! pattern. The reciprocal form iterates `g * (4/3 - x*g^3/3)`, which needs no
//! division. The direct form iterates `(2g + x/g^2) / 3`. Neither forms `x/3`
//! on its own: for subnormal `x` that quotient loses bits.
//!
//! With the `only-recip-roots` feature `cbrt` is `1 / rcbrt` instead of its own
//! iteration.

use super::bits::Ieee754;
use super::config::Config;
use super::{corrector, guess};

const ONE_THIRD: f64 = 1.0 / 3.0;
const FOUR_THIRDS: f64 = 4.0 / 3.0;
const ONE_THIRD_F32: f32 = 1.0 / 3.0;
const FOUR_THIRDS_F32: f32 = 4.0 / 3.0;

const CBRT_ITERATIONS: u32 = 3;
const CBRT_ITERATIONS_F32: u32 = 2;
const RCBRT_ITERATIONS: u32 = 3;
const RCBRT_ITERATIONS_F32: u32 = 3;
const SUBNORMAL_ITERATIONS: u32 = 32;
const SUBNORMAL_ITERATIONS_F32: u32 = 31;
const RCBRT_SUBNORMAL_ITERATIONS_F32: u32 = 32;

#[inline(always)]
fn is_subnormal_f64(abs: u64, cfg: Config) -> bool {
    cfg.subnormal_numbers && abs & <f64 as Ieee754>::EXP_MASK == 0
}

#[inline(always)]
fn is_subnormal_f32(abs: u32, cfg: Config) -> bool {
    cfg.subnormal_numbers && abs & <f32 as Ieee754>::EXP_MASK == 0
}

#[inline(always)]
pub(crate) fn cbrt_direct(x: f64, cfg: Config) -> f64 {
    let bits = x.to_bits();
    let sign = bits & <f64 as Ieee754>::SIGN_MASK;
    let abs = bits ^ sign;
    let special = x == 0.0 || x.is_nan() || abs == <f64 as Ieee754>::INF_BITS;
    if cfg.check_special_cases && special {
        return x;
    }

    let a = f64::from_bits(abs);
    let iterations = if is_subnormal_f64(abs, cfg) {
        SUBNORMAL_ITERATIONS
    } else {
        CBRT_ITERATIONS
    };
    let mut g = guess::cbrt_f64(abs, cfg.subnormal_numbers).value();
    for _ in 0..iterations {
        g = (g + g + a / (g * g)) * ONE_THIRD;
    }
    let g = corrector::cbrt_f64(g, a, cfg.strict);
    f64::from_bits(g.to_bits() | sign)
}

#[cfg_attr(not(feature = "only-recip-roots"), allow(dead_code))]
#[inline(always)]
pub(crate) fn cbrt_via_recip(x: f64, cfg: Config) -> f64 {
    1.0 / rcbrt_with(x, cfg)
}

#[cfg(not(feature = "only-recip-roots"))]
#[inline(always)]
pub(crate) fn cbrt_with(x: f64, cfg: Config) -> f64 {
    cbrt_direct(x, cfg)
}

#[cfg(feature = "only-recip-roots")]
#[inline(always)]
pub(crate) fn cbrt_with(x: f64, cfg: Config) -> f64 {
    cbrt_via_recip(x, cfg)
}

#[inline(always)]
pub(crate) fn rcbrt_with(x: f64, cfg: Config) -> f64 {
    let bits = x.to_bits();
    let sign = bits & <f64 as Ieee754>::SIGN_MASK;
    let abs = bits ^ sign;
    if cfg.check_special_cases {
        if x == 0.0 {
            return 1.0 / x;
        }
        if x.is_nan() {
            return x;
        }
        if abs == <f64 as Ieee754>::INF_BITS {
            return f64::from_bits(sign);
        }
    }

    let a = f64::from_bits(abs);
    let iterations = if is_subnormal_f64(abs, cfg) {
        SUBNORMAL_ITERATIONS
    } else {
        RCBRT_ITERATIONS
    };
    let mut g = guess::rcbrt_f64(abs, cfg.subnormal_numbers).value();
    for _ in 0..iterations {
        g *= FOUR_THIRDS - (a * g) * (g * g) * ONE_THIRD;
    }
    let g = corrector::rcbrt_f64(g, a, cfg.strict);
    f64::from_bits(g.to_bits() | sign)
}

#[inline(always)]
pub(crate) fn cbrtf_direct(x: f32, cfg: Config) -> f32 {
    let bits = x.to_bits();
    let sign = bits & <f32 as Ieee754>::SIGN_MASK;
    let abs = bits ^ sign;
    let special = x == 0.0 || x.is_nan() || abs == <f32 as Ieee754>::INF_BITS;
    if cfg.check_special_cases && special {
        return x;
    }

    let a = f32::from_bits(abs);
    let iterations = if is_subnormal_f32(abs, cfg) {
        SUBNORMAL_ITERATIONS_F32
    } else {
        CBRT_ITERATIONS_F32
    };
    let mut g = guess::cbrt_f32(abs, cfg.subnormal_numbers).value();
    for _ in 0..iterations {
        g = (g + g + a / (g * g)) * ONE_THIRD_F32;
    }
    let g = corrector::cbrt_f32(g, a, cfg.strict);
    f32::from_bits(g.to_bits() | sign)
}

#[cfg_attr(not(feature = "only-recip-roots"), allow(dead_code))]
#[inline(always)]
pub(crate) fn cbrtf_via_recip(x: f32, cfg: Config) -> f32 {
    1.0 / rcbrtf_with(x, cfg)
}

#[cfg(not(feature = "only-recip-roots"))]
#[inline(always)]
pub(crate) fn cbrtf_with(x: f32, cfg: Config) -> f32 {
    cbrtf_direct(x, cfg)
}

#[cfg(feature = "only-recip-roots")]
#[inline(always)]
pub(crate) fn cbrtf_with(x: f32, cfg: Config) -> f32 {
    cbrtf_via_recip(x, cfg)
}

#[inline(always)]
pub(crate) fn rcbrtf_with(x: f32, cfg: Config) -> f32 {
    let bits = x.to_bits();
    let sign = bits & <f32 as Ieee754>::SIGN_MASK;
    let abs = bits ^ sign;
    if cfg.check_special_cases {
        if x == 0.0 {
            return 1.0 / x;
        }
        if x.is_nan() {
            return x;
        }
        if abs == <f32 as Ieee754>::INF_BITS {
            return f32::from_bits(sign);
        }
    }

    let a = f32::from_bits(abs);
    let iterations = if is_subnormal_f32(abs, cfg) {
        RCBRT_SUBNORMAL_ITERATIONS_F32
    } else {
        RCBRT_ITERATIONS_F32
    };
    let mut g = guess::rcbrt_f32(abs, cfg.subnormal_numbers).value();
    for _ in 0..iterations {
        g *= FOUR_THIRDS_F32 - (a * g) * (g * g) * ONE_THIRD_F32;
    }
    let g = corrector::rcbrt_f32(g, a, cfg.strict);
    f32::from_bits(g.to_bits() | sign)
}
