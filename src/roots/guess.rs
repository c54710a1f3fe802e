//! Closed-form starting points computed on the integer view of the input.
//!
//! Treating an IEEE-754 pattern as an integer and dividing it by the root
//! degree roughly divides the exponent; a per-function constant re-biases the
//! result and pulls the mantissa towards the middle of the error band. Callers
//! pass the pattern with the sign already cleared.

use super::bits::{FloatBits, Ieee754, unbounded_bits_f32, unbounded_bits_f64};

/// Half the f64 exponent bias, rounded up.
const SQRT_BIAS: i64 = 512;
const SQRTF_BIAS: i32 = 64;

const CBRT_MAGIC: i64 = 0x2a9f_5cc6_2cb0_f9e1;
const CBRTF_MAGIC: i32 = 0x2a50_1a5b;

// (2^64 - 0x0044_22e2_0000_0000) / 3 and floor(0xfdde_0001 / 3).
const RCBRT_MAGIC: i64 = 0x553e_9f0a_0000_0000;
const RCBRTF_MAGIC: i32 = 0x549f_5555;

#[inline(always)]
fn extended_f64(bits: u64, rescale_subnormal: bool) -> i64 {
    if rescale_subnormal {
        unbounded_bits_f64(bits)
    } else {
        bits as i64
    }
}

#[inline(always)]
fn extended_f32(bits: u32, rescale_subnormal: bool) -> i32 {
    if rescale_subnormal {
        unbounded_bits_f32(bits)
    } else {
        bits as i32
    }
}

/// Power of two near `sqrt(x)`: the halved exponent, mantissa dropped.
#[inline(always)]
pub(crate) fn sqrt_f64(bits: u64, rescale_subnormal: bool) -> FloatBits<f64> {
    let exp = extended_f64(bits, rescale_subnormal) >> <f64 as Ieee754>::MANT_BITS;
    let guess = ((exp >> 1) + SQRT_BIAS) as u64;
    FloatBits::from_bits(guess << <f64 as Ieee754>::MANT_BITS)
}

#[inline(always)]
pub(crate) fn sqrt_f32(bits: u32, rescale_subnormal: bool) -> FloatBits<f32> {
    let exp = extended_f32(bits, rescale_subnormal) >> <f32 as Ieee754>::MANT_BITS;
    let guess = ((exp >> 1) + SQRTF_BIAS) as u32;
    FloatBits::from_bits(guess << <f32 as Ieee754>::MANT_BITS)
}

#[inline(always)]
pub(crate) fn cbrt_f64(bits: u64, rescale_subnormal: bool) -> FloatBits<f64> {
    let x = extended_f64(bits, rescale_subnormal);
    FloatBits::from_bits((x / 3 + CBRT_MAGIC) as u64)
}

#[inline(always)]
pub(crate) fn cbrt_f32(bits: u32, rescale_subnormal: bool) -> FloatBits<f32> {
    let x = extended_f32(bits, rescale_subnormal);
    FloatBits::from_bits((x / 3 + CBRTF_MAGIC) as u32)
}

#[inline(always)]
pub(crate) fn rcbrt_f64(bits: u64, rescale_subnormal: bool) -> FloatBits<f64> {
    let x = extended_f64(bits, rescale_subnormal);
    FloatBits::from_bits((RCBRT_MAGIC - x / 3) as u64)
}

#[inline(always)]
pub(crate) fn rcbrt_f32(bits: u32, rescale_subnormal: bool) -> FloatBits<f32> {
    let x = extended_f32(bits, rescale_subnormal);
    FloatBits::from_bits((RCBRTF_MAGIC - x / 3) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn ratio_bounds(pairs: impl Iterator<Item = (f64, f64)>) -> (f64, f64) {
        pairs.fold((f64::INFINITY, 0.0f64), |(lo, hi), (guess, exact)| {
            let r = guess / exact;
            (lo.min(r), hi.max(r))
        })
    }

    fn inputs_f64() -> Vec<f64> {
        let mut out = Vec::new();
        let mut x = f64::MIN_POSITIVE;
        while x < 1e300 {
            out.push(x);
            out.push(x * 1.37);
            out.push(x * 1.93);
            x *= 7.0;
        }
        out
    }

    fn subnormals_f64() -> Vec<f64> {
        (0..52)
            .flat_map(|s| [1u64 << s, (3u64 << s) & 0x000f_ffff_ffff_ffff])
            .filter(|&b| b != 0)
            .map(f64::from_bits)
            .collect()
    }

    #[test]
    fn sqrt_guess_within_root_two() {
        let (lo, hi) = ratio_bounds(
            inputs_f64()
                .into_iter()
                .chain(subnormals_f64())
                .map(|x| (sqrt_f64(x.to_bits(), true).value(), x.sqrt())),
        );
        assert!(lo >= 0.70 && hi <= 1.42, "sqrt guess ratio in [{lo}, {hi}]");
    }

    #[test]
    fn sqrt_guess_is_exact_for_even_powers() {
        let pow2 = |k: i64| f64::from_bits(((k + 1023) as u64) << 52);
        for k in [-1022i64, -1000, -2, 0, 2, 1000] {
            let g = sqrt_f64(pow2(k).to_bits(), true).value();
            assert_eq!(g, pow2(k / 2), "2^{k}");
        }
        // 2^-1074 only exists as a subnormal.
        assert_eq!(sqrt_f64(1, true).value(), pow2(-537));
    }

    #[test]
    fn cube_root_guesses_within_ten_percent() {
        let (lo, hi) = ratio_bounds(
            inputs_f64()
                .into_iter()
                .chain(subnormals_f64())
                .map(|x| (cbrt_f64(x.to_bits(), true).value(), x.cbrt())),
        );
        assert!(lo >= 0.9 && hi <= 1.1, "cbrt guess ratio in [{lo}, {hi}]");

        let (lo, hi) = ratio_bounds(
            inputs_f64()
                .into_iter()
                .chain(subnormals_f64())
                .map(|x| (rcbrt_f64(x.to_bits(), true).value(), 1.0 / x.cbrt())),
        );
        assert!(lo >= 0.9 && hi <= 1.1, "rcbrt guess ratio in [{lo}, {hi}]");
    }

    #[test]
    fn f32_guesses_track_f64_quality() {
        let xs: Vec<f32> = (0..256)
            .map(|i| f32::from_bits(0x0080_0000 + i * 0x0079_8000))
            .chain((0..23).map(|s| f32::from_bits(1 << s)))
            .collect();
        for x in xs {
            let xd = x as f64;
            let s = sqrt_f32(x.to_bits(), true).value() as f64 / xd.sqrt();
            assert!((0.70..=1.42).contains(&s), "sqrtf guess {s} at {x:e}");
            let c = cbrt_f32(x.to_bits(), true).value() as f64 / xd.cbrt();
            assert!((0.9..=1.1).contains(&c), "cbrtf guess {c} at {x:e}");
            let r = rcbrt_f32(x.to_bits(), true).value() as f64 * xd.cbrt();
            assert!((0.9..=1.1).contains(&r), "rcbrtf guess {r} at {x:e}");
        }
    }

    #[test]
    fn raw_pattern_is_used_without_rescaling() {
        let tiny = f64::from_bits(1);
        assert_eq!(sqrt_f64(tiny.to_bits(), false).bits(), 512u64 << 52);
        assert_eq!(cbrt_f64(tiny.to_bits(), false).bits(), CBRT_MAGIC as u64);
    }
}
