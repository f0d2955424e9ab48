//! kopron - 한글 발음 표기 및 로마자 변환
//!
//! 한글 텍스트를 발음 한글, 국어의 로마자 표기법(rr, 전자법 rrr),
//! 매큔-라이샤워(mc), 예일(yr), IPA로 변환합니다.
//!
//! ```
//! use kopron::{romanize, RuleHints, System};
//!
//! let hints = RuleHints::default();
//! assert_eq!(romanize("한국어", System::Revised, &hints).unwrap(), "han-gugeo");
//! assert_eq!(romanize("한국어", System::Phonetic, &hints).unwrap(), "한구거");
//!
//! // 불규칙 발음은 위치 힌트로 지정
//! let hints = RuleHints::new().with_compounding([1]);
//! assert_eq!(romanize("상사병", System::McCuneReischauer, &hints).unwrap(), "sangsapyŏng");
//! ```

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod system;

pub use config::RuleHints;
pub use crate::core::converter::{romanize, Romanizer};
pub use data::PhonologyTables;
pub use error::{ConfigError, RomanizeError, TableError};
pub use system::System;
