//! 한글 음절 처리 핵심 모듈

pub mod syllable;

pub use syllable::{compose, is_hangul, separate};
