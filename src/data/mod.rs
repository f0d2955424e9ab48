//! 음운표 (모음표, 경계표)
//!
//! 표는 `data/phonology.json`에 6개 열(ph, rr, rrr, mc, yr, ipa)로 저장되어 있고,
//! 내장본은 처음 사용할 때 한 번 파싱되어 프로세스 전체에서 읽기 전용으로 공유됩니다.
//!
//! ```
//! use kopron::data::PhonologyTables;
//!
//! let tables = PhonologyTables::builtin().unwrap();
//! assert_eq!(tables.boundary_len(), 580);
//! ```

mod tables;

pub use tables::{BoundaryKey, PhonologyTables, BUILTIN_JSON};
