//! Root kernels and their public entry points.
//!
//! Every function follows the same pipeline: a closed-form guess from the
//! integer view of the input (`guess`), a fixed number of Newton-type steps in
//! the native width (`sqrt`, `cbrt`), then one correction step whose residual
//! is evaluated in a wider format (`corrector`, `wide`). Build features pick
//! the trade-offs; see [`Config`].

mod arch;
mod bits;
mod cbrt;
mod config;
mod corrector;
mod guess;
mod sqrt;
mod wide;

pub use bits::{FloatBits, Ieee754};
pub use config::{CONFIG, Config};

/// Square root of `x`.
///
/// Negative inputs give NaN; `±0`, `+inf` and NaN are returned unchanged.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    sqrt::sqrt_with(x, CONFIG)
}

#[inline]
pub fn sqrtf(x: f32) -> f32 {
    sqrt::sqrtf_with(x, CONFIG)
}

/// Cube root of `x`, defined for every sign.
#[inline]
pub fn cbrt(x: f64) -> f64 {
    cbrt::cbrt_with(x, CONFIG)
}

#[inline]
pub fn cbrtf(x: f32) -> f32 {
    cbrt::cbrtf_with(x, CONFIG)
}

/// `x^(-1/3)`, computed directly rather than as `1 / cbrt(x)`.
///
/// `rcbrt(±0)` is `±inf` and `rcbrt(±inf)` is `±0`.
#[inline]
pub fn rcbrt(x: f64) -> f64 {
    cbrt::rcbrt_with(x, CONFIG)
}

#[inline]
pub fn rcbrtf(x: f32) -> f32 {
    cbrt::rcbrtf_with(x, CONFIG)
}

/// Root approximations as methods, for code generic over the float width.
///
/// The `*_approx` methods use the build configuration [`CONFIG`]; the `*_with`
/// methods take one explicitly.
pub trait Roots: Ieee754 {
    fn sqrt_with(self, cfg: Config) -> Self;
    fn cbrt_with(self, cfg: Config) -> Self;
    fn recip_cbrt_with(self, cfg: Config) -> Self;

    #[inline]
    fn sqrt_approx(self) -> Self {
        self.sqrt_with(CONFIG)
    }

    #[inline]
    fn cbrt_approx(self) -> Self {
        self.cbrt_with(CONFIG)
    }

    #[inline]
    fn recip_cbrt_approx(self) -> Self {
        self.recip_cbrt_with(CONFIG)
    }
}

impl Roots for f64 {
    #[inline]
    fn sqrt_with(self, cfg: Config) -> f64 {
        sqrt::sqrt_with(self, cfg)
    }

    #[inline]
    fn cbrt_with(self, cfg: Config) -> f64 {
        cbrt::cbrt_with(self, cfg)
    }

    #[inline]
    fn recip_cbrt_with(self, cfg: Config) -> f64 {
        cbrt::rcbrt_with(self, cfg)
    }
}

impl Roots for f32 {
    #[inline]
    fn sqrt_with(self, cfg: Config) -> f32 {
        sqrt::sqrtf_with(self, cfg)
    }

    #[inline]
    fn cbrt_with(self, cfg: Config) -> f32 {
        cbrt::cbrtf_with(self, cfg)
    }

    #[inline]
    fn recip_cbrt_with(self, cfg: Config) -> f32 {
        cbrt::rcbrtf_with(self, cfg)
    }
}
