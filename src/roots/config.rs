//! Build-time configuration.
//!
//! Every kernel takes a `Config` by value. The public entry points pass the
//! constant [`CONFIG`], derived from Cargo features, so after inlining every
//! flag test folds away.

/// Accuracy/robustness trade-offs shared by all root kernels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    /// Short-circuit zero, negative, NaN and infinite inputs. Without it the
    /// numeric pipeline runs unconditionally and those inputs give
    /// meaningless results.
    pub check_special_cases: bool,
    /// Run the final correction in the native width instead of a wider type
    /// (`f64` for `f32` inputs, double-double for `f64` inputs).
    pub strict: bool,
    /// Renormalise subnormal inputs for the initial guess and give them the
    /// long iteration schedule.
    pub subnormal_numbers: bool,
}

/// Configuration selected by the crate features this build was compiled with.
pub const CONFIG: Config = Config::from_features();

impl Config {
    /// All checks on, wide correction, whatever features are enabled.
    ///
    /// Use [`Config::default`] (or [`CONFIG`]) for the feature-selected
    /// configuration the free functions run with.
    pub const fn new() -> Self {
        Self {
            check_special_cases: true,
            strict: false,
            subnormal_numbers: true,
        }
    }

    /// Flags from the `special-cases`, `strict` and `subnormals` features.
    pub const fn from_features() -> Self {
        Self {
            check_special_cases: cfg!(feature = "special-cases"),
            strict: cfg!(feature = "strict"),
            subnormal_numbers: cfg!(feature = "subnormals"),
        }
    }

    pub const fn with_special_cases(self, on: bool) -> Self {
        Self {
            check_special_cases: on,
            ..self
        }
    }

    pub const fn with_strict(self, on: bool) -> Self {
        Self { strict: on, ..self }
    }

    pub const fn with_subnormal_numbers(self, on: bool) -> Self {
        Self {
            subnormal_numbers: on,
            ..self
        }
    }
}

/// Same as [`CONFIG`]. Unlike [`Config::new`] this follows the enabled
/// features, so `--no-default-features` turns the checks off here.
impl Default for Config {
    fn default() -> Self {
        CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_touches_one_flag() {
        let cfg = Config::new().with_strict(true);
        assert!(cfg.strict);
        assert!(cfg.check_special_cases);
        assert!(cfg.subnormal_numbers);

        let cfg = cfg.with_special_cases(false).with_subnormal_numbers(false);
        assert!(cfg.strict);
        assert!(!cfg.check_special_cases);
        assert!(!cfg.subnormal_numbers);
    }

    #[test]
    fn new_ignores_features() {
        let cfg = Config::new();
        assert!(cfg.check_special_cases);
        assert!(cfg.subnormal_numbers);
        assert!(!cfg.strict);
        let all_default = cfg!(feature = "special-cases")
            && cfg!(feature = "subnormals")
            && !cfg!(feature = "strict");
        assert_eq!(cfg == Config::default(), all_default);
    }

    #[test]
    fn default_follows_features() {
        assert_eq!(Config::default(), CONFIG);
        assert_eq!(CONFIG.strict, cfg!(feature = "strict"));
        assert_eq!(CONFIG.check_special_cases, cfg!(feature = "special-cases"));
        assert_eq!(CONFIG.subnormal_numbers, cfg!(feature = "subnormals"));
    }
}
