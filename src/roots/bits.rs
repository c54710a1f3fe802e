//! Bit-level views of IEEE-754 values.
//!
//! `FloatBits` stores only the raw pattern, so the float view and the integer
//! view can never disagree. Reinterpretation goes through `to_bits`/`from_bits`
//! (a transmute the language defines), never through pointer casts.

use core::fmt;

/// Layout of an IEEE-754 binary format and lossless conversion to its bits.
pub trait Ieee754: Copy + PartialEq + PartialOrd {
    /// Unsigned integer of the same width.
    type Bits: Copy + Eq + Ord + fmt::Debug;

    /// Total width in bits.
    const WIDTH: u32;
    /// Stored mantissa bits (without the implicit one).
    const MANT_BITS: u32;
    /// Exponent field bits.
    const EXP_BITS: u32;
    const SIGN_MASK: Self::Bits;
    const EXP_MASK: Self::Bits;
    const MANT_MASK: Self::Bits;
    /// Pattern of `+inf`.
    const INF_BITS: Self::Bits;
    /// One unit in the exponent field: subtracting it halves a normal value.
    const EXP_ONE: Self::Bits;

    fn to_raw(self) -> Self::Bits;
    fn from_raw(bits: Self::Bits) -> Self;

    /// Leading zero bits of `bits`; `WIDTH` when `bits` is zero.
    fn leading_zeros(bits: Self::Bits) -> u32;
}

impl Ieee754 for f64 {
    type Bits = u64;

    const WIDTH: u32 = 64;
    const MANT_BITS: u32 = 52;
    const EXP_BITS: u32 = 11;
    const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
    const EXP_MASK: u64 = 0x7ff0_0000_0000_0000;
    const MANT_MASK: u64 = 0x000f_ffff_ffff_ffff;
    const INF_BITS: u64 = 0x7ff0_0000_0000_0000;
    const EXP_ONE: u64 = 0x0010_0000_0000_0000;

    #[inline(always)]
    fn to_raw(self) -> u64 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_raw(bits: u64) -> f64 {
        f64::from_bits(bits)
    }

    #[inline(always)]
    fn leading_zeros(bits: u64) -> u32 {
        bits.leading_zeros()
    }
}

impl Ieee754 for f32 {
    type Bits = u32;

    const WIDTH: u32 = 32;
    const MANT_BITS: u32 = 23;
    const EXP_BITS: u32 = 8;
    const SIGN_MASK: u32 = 0x8000_0000;
    const EXP_MASK: u32 = 0x7f80_0000;
    const MANT_MASK: u32 = 0x007f_ffff;
    const INF_BITS: u32 = 0x7f80_0000;
    const EXP_ONE: u32 = 0x0080_0000;

    #[inline(always)]
    fn to_raw(self) -> u32 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_raw(bits: u32) -> f32 {
        f32::from_bits(bits)
    }

    #[inline(always)]
    fn leading_zeros(bits: u32) -> u32 {
        bits.leading_zeros()
    }
}

/// A float that can be read and written either as a value or as its bits.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct FloatBits<F: Ieee754> {
    bits: F::Bits,
}

impl<F: Ieee754> FloatBits<F> {
    #[inline(always)]
    pub fn new(value: F) -> Self {
        Self {
            bits: value.to_raw(),
        }
    }

    #[inline(always)]
    pub fn from_bits(bits: F::Bits) -> Self {
        Self { bits }
    }

    #[inline(always)]
    pub fn value(self) -> F {
        F::from_raw(self.bits)
    }

    #[inline(always)]
    pub fn bits(self) -> F::Bits {
        self.bits
    }

    #[inline(always)]
    pub fn set_value(&mut self, value: F) {
        self.bits = value.to_raw();
    }

    #[inline(always)]
    pub fn set_bits(&mut self, bits: F::Bits) {
        self.bits = bits;
    }
}

impl<F: Ieee754> fmt::Debug for FloatBits<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatBits")
            .field("bits", &self.bits)
            .finish()
    }
}

/// Bits of a non-negative `f64` pattern as if the exponent field had no lower
/// bound.
///
/// Normal patterns come back unchanged. A subnormal is renormalised: the
/// leading mantissa bit moves onto the implicit-one position and the exponent
/// becomes `1 - shift` (zero or negative), so integer arithmetic on the result
/// keeps tracking the magnitude the way it does for normal numbers.
#[inline(always)]
pub(crate) fn unbounded_bits_f64(bits: u64) -> i64 {
    if bits & <f64 as Ieee754>::EXP_MASK != 0 || bits == 0 {
        return bits as i64;
    }
    let shift = <f64 as Ieee754>::leading_zeros(bits) - <f64 as Ieee754>::EXP_BITS;
    let mant = (bits << shift) & <f64 as Ieee754>::MANT_MASK;
    ((1 - shift as i64) << <f64 as Ieee754>::MANT_BITS) + mant as i64
}

/// `f32` counterpart of [`unbounded_bits_f64`].
#[inline(always)]
pub(crate) fn unbounded_bits_f32(bits: u32) -> i32 {
    if bits & <f32 as Ieee754>::EXP_MASK != 0 || bits == 0 {
        return bits as i32;
    }
    let shift = <f32 as Ieee754>::leading_zeros(bits) - <f32 as Ieee754>::EXP_BITS;
    let mant = (bits << shift) & <f32 as Ieee754>::MANT_MASK;
    ((1 - shift as i32) << <f32 as Ieee754>::MANT_BITS) + mant as i32
}

/// `2^k` for `k` in the normal exponent range.
#[inline(always)]
pub(crate) fn pow2_f64(k: i32) -> f64 {
    f64::from_bits(((1023 + k) as u64) << <f64 as Ieee754>::MANT_BITS)
}

#[inline(always)]
pub(crate) fn pow2_f32(k: i32) -> f32 {
    f32::from_bits(((127 + k) as u32) << <f32 as Ieee754>::MANT_BITS)
}
