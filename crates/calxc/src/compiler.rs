//! Responsible with running calx source through every compiler stage

use calx_parsing::{parse, tokenize};
use calx_tokens::token::TokenSequence;
use tracing::{debug, info_span, instrument};

pub mod error;
pub mod passes;

pub use error::{CalxcError, CalxcResult};

/// Responsible with compiling calx source.
///
/// Must be configured using a [CalxcBuilder].
#[derive(Debug, Clone)]
pub struct Calxc {
    semantic_check: bool,
    fold_constants: bool,
}

impl Calxc {
    /// Creates the default CalxcBuilder
    #[inline]
    pub fn builder() -> CalxcBuilder {
        CalxcBuilder::new()
    }

    /// Compiles `src`, lexing, parsing, checking and folding it in that order.
    #[instrument(skip_all, fields(len = src.len()))]
    pub fn compile(&self, src: &str) -> CalxcResult<Compilation> {
        let tokens = info_span!("lex").in_scope(|| tokenize(src));
        info_span!("parse").in_scope(|| parse(&tokens))?;
        if self.semantic_check {
            info_span!("semantic_check").in_scope(|| passes::semantic_check::check(&tokens))?;
        }
        let optimized = if self.fold_constants {
            info_span!("constant_fold").in_scope(|| passes::constant_fold::fold(tokens.clone()))
        } else {
            tokens.clone()
        };
        debug!(
            "compiled {} token(s) into {} token(s)",
            tokens.len(),
            optimized.len()
        );
        Ok(Compilation { tokens, optimized })
    }
}

/// The outputs of a successful compilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    tokens: TokenSequence,
    optimized: TokenSequence,
}

impl Compilation {
    /// The tokens as lexed
    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    /// The tokens after optimization
    pub fn optimized(&self) -> &TokenSequence {
        &self.optimized
    }

    pub fn into_parts(self) -> (TokenSequence, TokenSequence) {
        (self.tokens, self.optimized)
    }
}

/// Builder for creating a [Calxc] instance.
#[derive(Debug)]
pub struct CalxcBuilder {
    /// Whether to run the semantic checker after parsing
    pub semantic_check: bool,
    /// Whether to fold constants after checking
    pub fold_constants: bool,
}

impl CalxcBuilder {
    /// Creates a CalxcBuilder with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn semantic_check(mut self, enabled: bool) -> Self {
        self.semantic_check = enabled;
        self
    }

    pub fn fold_constants(mut self, enabled: bool) -> Self {
        self.fold_constants = enabled;
        self
    }

    /// Builds a [Calxc] instance from this builder
    pub fn build(self) -> Calxc {
        Calxc {
            semantic_check: self.semantic_check,
            fold_constants: self.fold_constants,
        }
    }
}

impl Default for CalxcBuilder {
    fn default() -> Self {
        Self {
            semantic_check: true,
            fold_constants: true,
        }
    }
}
