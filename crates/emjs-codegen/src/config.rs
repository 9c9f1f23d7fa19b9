//! Generator configuration.
//!
//! Constructed programmatically by the embedding compiler; there is no
//! file-based or environment-based source, since the generator performs no
//! I/O of its own.

/// Tunable parameters of the arity-curry convention (§4.3, §4.5) and of
/// fresh-name minting (§3).
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix passed to [`crate::collaborators::NameMangler::fresh`]; the
    /// mangler decides how to combine it with the counter.
    pub fresh_prefix: String,
    /// Lowest arity, inclusive, that gets a curried `Fₙ`/`Aₙ` wrapper
    /// rather than a native function/call (§4.3, §4.5). Below this,
    /// arity-1 is compiled natively.
    pub min_curry_arity: usize,
    /// Highest arity, inclusive, that the runtime exposes an `Fₙ`/`Aₙ`
    /// helper for (§4.3, §4.5, §9 Open Question). Above this, functions
    /// and calls are folded into nested single-argument forms.
    pub max_curry_arity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fresh_prefix: "_v".to_string(),
            min_curry_arity: 2,
            max_curry_arity: 9,
        }
    }
}
