use core::arch::x86_64::{_mm_cvtsd_f64, _mm_fmadd_sd, _mm_set_sd};

#[inline(always)]
pub(crate) fn fma_hw(a: f64, b: f64, c: f64) -> f64 {
    // SAFETY: this module is only compiled when `fma` is a static target feature.
    #[allow(unused_unsafe)]
    unsafe {
        _mm_cvtsd_f64(_mm_fmadd_sd(_mm_set_sd(a), _mm_set_sd(b), _mm_set_sd(c)))
    }
}
