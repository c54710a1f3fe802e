// Architecture-specific helpers (hardware FMA).

#[cfg(all(target_arch = "x86_64", target_feature = "fma"))]
mod x86;
#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(all(target_arch = "x86_64", target_feature = "fma"))]
pub(crate) use x86::fma_hw;

#[cfg(target_arch = "aarch64")]
pub(crate) use aarch64::fma_hw;

/// The target's fused multiply-add instruction may be used: the `soft-fma`
/// feature does not forbid it.
#[cfg(any(
    target_arch = "aarch64",
    all(target_arch = "x86_64", target_feature = "fma")
))]
pub(crate) const HAS_FMA: bool = !cfg!(feature = "soft-fma");
