//! 한글 발음 변환 파이프라인
//!
//! 음절 분해 -> 발음 후보 생성 -> 경계 규칙 -> 후처리 순서로 동작합니다.

pub mod converter;
pub mod engine;
pub mod jamo;
pub mod realizer;
pub mod syllable;
pub mod unicode;
pub mod variants;

pub use converter::{romanize, strip_markup, Romanizer};
