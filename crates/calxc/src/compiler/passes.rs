//! The passes run over a token sequence once it has been parsed

pub mod constant_fold;
pub mod semantic_check;
