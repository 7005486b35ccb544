//! A calx compilation error

use calx_parsing::parser::SyntaxError;
use std::convert::Infallible;
use thiserror::Error;

/// An error occurred while attempting to compile calx source
#[derive(Debug, Error)]
pub enum CalxcError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl CalxcError {
    /// Displays this error along with its location within `src`
    pub fn report(&self, src: &str) -> String {
        match self {
            CalxcError::Syntax(e) => e.report(src).to_string(),
        }
    }
}

impl From<Infallible> for CalxcError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

/// A type alias for general results in calxc
pub type CalxcResult<T> = Result<T, CalxcError>;
