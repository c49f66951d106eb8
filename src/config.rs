//! Minimizer configuration

/// Options controlling how a [`PLA`](crate::PLA) is minimized
///
/// The defaults minimize outputs one after another and check that every
/// selected cover really covers its on-set.
///
/// ```
/// use quine_logic::MinimizerConfig;
///
/// let config = MinimizerConfig {
///     parallel: true,
///     ..Default::default()
/// };
/// assert!(config.verify);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Minimize each output on its own thread
    ///
    /// Outputs share no state, so the result is identical to the sequential
    /// run; only wall-clock time changes.
    ///
    /// **Default:** `false`
    pub parallel: bool,

    /// Re-check coverage of every on-set minterm after selection
    ///
    /// A failed check is reported as
    /// [`MinimizeError::IncompleteCover`](crate::MinimizeError::IncompleteCover).
    ///
    /// **Default:** `true`
    pub verify: bool,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            parallel: false,
            verify: true,
        }
    }
}
