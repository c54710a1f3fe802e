//! Square root without a hardware root instruction.
//!
//! Heron's iteration with the halving done on the bit pattern: after
//! `g += x / g` the exponent field is decremented by one unit, which divides by
//! two without a floating-point multiply. The starting point comes from the
//! halved exponent (see `guess`), so a fixed short schedule is enough for
//! normal inputs. One last floating-point step feeds the corrector.

use super::bits::{FloatBits, Ieee754};
use super::config::Config;
use super::{corrector, guess};

const ITERATIONS: u32 = 3;
const SUBNORMAL_ITERATIONS: u32 = 32;
const ITERATIONS_F32: u32 = 2;
const SUBNORMAL_ITERATIONS_F32: u32 = 31;

#[inline(always)]
pub(crate) fn sqrt_with(x: f64, cfg: Config) -> f64 {
    if cfg.check_special_cases {
        // NaN, +0, -0 and +inf are their own square roots.
        if x.is_nan() || x == 0.0 || x == f64::INFINITY {
            return x;
        }
        if x < 0.0 {
            return f64::NAN;
        }
    }

    // Only the magnitude feeds the guess.
    let bits = x.to_bits() & !<f64 as Ieee754>::SIGN_MASK;
    let subnormal = cfg.subnormal_numbers && bits & <f64 as Ieee754>::EXP_MASK == 0;
    let iterations = if subnormal {
        SUBNORMAL_ITERATIONS
    } else {
        ITERATIONS
    };

    let mut g: FloatBits<f64> = guess::sqrt_f64(bits, cfg.subnormal_numbers);
    for _ in 0..iterations {
        let v = g.value();
        g.set_value(v + x / v);
        g.set_bits(g.bits().wrapping_sub(<f64 as Ieee754>::EXP_ONE));
    }

    let v = g.value();
    let twice = v + x / v;
    corrector::sqrt_f64(twice * 0.5, twice, x, cfg.strict)
}

#[inline(always)]
pub(crate) fn sqrtf_with(x: f32, cfg: Config) -> f32 {
    if cfg.check_special_cases {
        if x.is_nan() || x == 0.0 || x == f32::INFINITY {
            return x;
        }
        if x < 0.0 {
            return f32::NAN;
        }
    }

    let bits = x.to_bits() & !<f32 as Ieee754>::SIGN_MASK;
    let subnormal = cfg.subnormal_numbers && bits & <f32 as Ieee754>::EXP_MASK == 0;
    let iterations = if subnormal {
        SUBNORMAL_ITERATIONS_F32
    } else {
        ITERATIONS_F32
    };

    let mut g: FloatBits<f32> = guess::sqrt_f32(bits, cfg.subnormal_numbers);
    for _ in 0..iterations {
        let v = g.value();
        g.set_value(v + x / v);
        g.set_bits(g.bits().wrapping_sub(<f32 as Ieee754>::EXP_ONE));
    }

    let v = g.value();
    let twice = v + x / v;
    corrector::sqrt_f32(twice * 0.5, twice, x, cfg.strict)
}
