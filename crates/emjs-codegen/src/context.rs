//! Generator state threaded through a single top-level definition's
//! compilation.
//!
//! One mutable counter field, held by reference rather than passed
//! explicitly through every recursive call.

use crate::collaborators::{ForeignCodec, LiteralEncoder, NameMangler, RuntimeHelpers, TargetAst};
use crate::config::Config;

/// Borrowed collaborators plus the monotonic fresh-name counter.
pub struct Context<'a, A: TargetAst> {
    pub ast: &'a A,
    pub mangler: &'a dyn NameMangler<A>,
    pub literals: &'a dyn LiteralEncoder<A>,
    pub foreign: &'a dyn ForeignCodec<A>,
    pub runtime: &'a dyn RuntimeHelpers<A>,
    pub config: &'a Config,
    next_fresh: u32,
}

impl<'a, A: TargetAst> Context<'a, A> {
    pub fn new(
        ast: &'a A,
        mangler: &'a dyn NameMangler<A>,
        literals: &'a dyn LiteralEncoder<A>,
        foreign: &'a dyn ForeignCodec<A>,
        runtime: &'a dyn RuntimeHelpers<A>,
        config: &'a Config,
    ) -> Self {
        Self {
            ast,
            mangler,
            literals,
            foreign,
            runtime,
            config,
            next_fresh: 0,
        }
    }

    /// Mint the next fresh identifier. The counter only grows (§3).
    pub fn fresh(&mut self) -> String {
        emjs_core::invariant(self.next_fresh != u32::MAX, || emjs_core::Bug::CounterExhausted);
        let n = self.next_fresh;
        self.next_fresh += 1;
        self.mangler.fresh(n)
    }
}
