#![doc = include_str!("../README.md")]

mod compiler;
pub use compiler::*;
