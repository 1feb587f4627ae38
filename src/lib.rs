pub mod config;
pub mod core;
pub mod rules;

pub use core::syllable::{compose, is_hangul, separate};
pub use rules::{RuleError, TransformMode, Yaminator};
