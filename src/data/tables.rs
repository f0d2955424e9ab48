//! 음운표 로드 및 조회

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::core::jamo::{Final, Initial, Vowel};
use crate::core::syllable::{Coda, Nucleus};
use crate::error::{RomanizeError, TableError};
use crate::system::System;

/// 내장 음운표 원문
pub const BUILTIN_JSON: &str = include_str!("../../data/phonology.json");

lazy_static! {
    static ref BUILTIN: Result<PhonologyTables, TableError> =
        PhonologyTables::from_json(BUILTIN_JSON);
}

/// 경계표 키: (앞 음절 종성, 뒤 음절 초성). 초성 None = Ø
pub type BoundaryKey = (Coda, Option<Initial>);

/// 체계별 6개 열
type Columns = [String; 6];

/// JSON 파일 형식
#[derive(Deserialize)]
struct RawTables {
    version: u32,
    systems: Vec<String>,
    vowels: HashMap<String, Vec<String>>,
    boundary: HashMap<String, Vec<String>>,
}

/// 모음표와 경계표
#[derive(Debug, Clone)]
pub struct PhonologyTables {
    version: u32,
    vowels: HashMap<Nucleus, Columns>,
    boundary: HashMap<BoundaryKey, Columns>,
}

impl PhonologyTables {
    /// 내장 음운표 (처음 호출 시 한 번 파싱)
    pub fn builtin() -> Result<&'static PhonologyTables, RomanizeError> {
        BUILTIN
            .as_ref()
            .map_err(|e| RomanizeError::BuiltinTable(e.to_string()))
    }

    /// JSON 파일에서 음운표 로드
    ///
    /// # 파일 형식
    /// ```json
    /// {
    ///   "version": 1,
    ///   "systems": ["ph", "rr", "rrr", "mc", "yr", "ipa"],
    ///   "vowels": { "ᅡ": ["ᅡ", "a", "a", "a", "a", "a̠"] },
    ///   "boundary": { "ᆨ-ᄀ": ["ᆨᄁ", "kg", "gg", "kk", "kk", "k̚k͈"] }
    /// }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let raw: RawTables =
            serde_json::from_reader(reader).map_err(|e| TableError::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// JSON 문자열에서 음운표 로드
    pub fn from_json(json_str: &str) -> Result<Self, TableError> {
        let raw: RawTables =
            serde_json::from_str(json_str).map_err(|e| TableError::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawTables) -> Result<Self, TableError> {
        // 열 순서가 System::ALL과 같아야 함
        let systems: Vec<System> = raw
            .systems
            .iter()
            .map(|s| {
                s.parse::<System>()
                    .map_err(|_| TableError::Format(format!("알 수 없는 체계: {}", s)))
            })
            .collect::<Result<_, _>>()?;
        if systems != System::ALL {
            return Err(TableError::Format(format!(
                "체계 열 순서가 다릅니다: {:?}",
                raw.systems
            )));
        }

        let mut vowels = HashMap::with_capacity(raw.vowels.len());
        for (key, columns) in raw.vowels {
            let nucleus = parse_nucleus(&key)?;
            vowels.insert(nucleus, to_columns(&key, columns)?);
        }

        let mut boundary = HashMap::with_capacity(raw.boundary.len());
        for (key, columns) in raw.boundary {
            let parsed = parse_boundary_key(&key)?;
            boundary.insert(parsed, to_columns(&key, columns)?);
        }

        log::debug!(
            "음운표 로드: 버전 {}, 모음 {}개, 경계 {}개",
            raw.version,
            vowels.len(),
            boundary.len()
        );

        Ok(Self {
            version: raw.version,
            vowels,
            boundary,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// 경계표 항목 수
    pub fn boundary_len(&self) -> usize {
        self.boundary.len()
    }

    pub fn contains(&self, coda: Coda, onset: Option<Initial>) -> bool {
        self.boundary.contains_key(&(coda, onset))
    }

    /// 모음 실현형
    ///
    /// 공백이 아닌 경계 문자는 표를 거치지 않고 그대로 나옵니다.
    pub fn vowel(&self, nucleus: Nucleus, system: System) -> Result<String, RomanizeError> {
        if let Nucleus::Blank(c) = nucleus {
            if c != ' ' {
                return Ok(c.to_string());
            }
        }
        self.vowels
            .get(&nucleus)
            .map(|columns| columns[system.column()].clone())
            .ok_or_else(|| RomanizeError::MissingVowel {
                key: nucleus_key(nucleus),
            })
    }

    /// 경계 실현형: (종성, 다음 초성)
    pub fn junction(
        &self,
        coda: Coda,
        onset: Option<Initial>,
        system: System,
    ) -> Result<&str, RomanizeError> {
        self.boundary
            .get(&(coda, onset))
            .map(|columns| columns[system.column()].as_str())
            .ok_or_else(|| RomanizeError::MissingBoundary {
                key: boundary_key(coda, onset),
            })
    }

    /// 받침 복원: `<종성>-Ø` 항목의 발음 한글 열을 종성으로 읽음
    pub fn restored_coda(&self, coda: Coda) -> Result<Coda, RomanizeError> {
        let surface = self.junction(coda, None, System::Phonetic)?;
        let mut chars = surface.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Coda::Empty),
            (Some(c), None) => Final::from_char(c).map(Coda::Final).ok_or_else(|| {
                RomanizeError::Table(TableError::Format(format!(
                    "{} 항목이 종성이 아닙니다: {}",
                    boundary_key(coda, None),
                    surface
                )))
            }),
            _ => Err(RomanizeError::Table(TableError::Format(format!(
                "{} 항목이 종성이 아닙니다: {}",
                boundary_key(coda, None),
                surface
            )))),
        }
    }
}

/// 경계표 키 문자열 ("ᆨ-ᄀ", "Ø-Ø", "-ᄋ")
pub(crate) fn boundary_key(coda: Coda, onset: Option<Initial>) -> String {
    match onset {
        Some(initial) => format!("{}-{}", coda, initial),
        None => format!("{}-Ø", coda),
    }
}

fn nucleus_key(nucleus: Nucleus) -> String {
    match nucleus {
        Nucleus::Vowel(v) => v.to_string(),
        Nucleus::Empty => "Ø".to_string(),
        Nucleus::Blank(c) => c.to_string(),
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_nucleus(key: &str) -> Result<Nucleus, TableError> {
    match key {
        "Ø" => Ok(Nucleus::Empty),
        " " => Ok(Nucleus::Blank(' ')),
        _ => single_char(key)
            .and_then(Vowel::from_char)
            .map(Nucleus::Vowel)
            .ok_or_else(|| TableError::Format(format!("잘못된 모음 키: {}", key))),
    }
}

fn parse_boundary_key(key: &str) -> Result<BoundaryKey, TableError> {
    let invalid = || TableError::Format(format!("잘못된 경계 키: {} (expected 'X-Y')", key));
    let (left, right) = key.split_once('-').ok_or_else(invalid)?;

    let coda = match left {
        "" => Coda::WordStart,
        "Ø" => Coda::Empty,
        _ => single_char(left)
            .and_then(Final::from_char)
            .map(Coda::Final)
            .ok_or_else(invalid)?,
    };
    let onset = match right {
        "Ø" => None,
        _ => Some(single_char(right).and_then(Initial::from_char).ok_or_else(invalid)?),
    };
    Ok((coda, onset))
}

fn to_columns(key: &str, columns: Vec<String>) -> Result<Columns, TableError> {
    let count = columns.len();
    columns.try_into().map_err(|_| {
        TableError::Format(format!("{}: 열이 6개가 아닙니다 ({}개)", key, count))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> &'static PhonologyTables {
        PhonologyTables::builtin().unwrap()
    }

    #[test]
    fn test_builtin_loads() {
        assert_eq!(tables().version(), 1);
        assert_eq!(tables().boundary_len(), 580);
    }

    #[test]
    fn test_boundary_table_is_total() {
        let mut codas = vec![Coda::WordStart, Coda::Empty];
        codas.extend(Final::ALL.iter().copied().map(Coda::Final));
        let mut onsets: Vec<Option<Initial>> = Initial::ALL.iter().copied().map(Some).collect();
        onsets.push(None);

        for coda in &codas {
            for onset in &onsets {
                assert!(
                    tables().contains(*coda, *onset),
                    "missing {}",
                    boundary_key(*coda, *onset)
                );
            }
        }
    }

    #[test]
    fn test_vowel_lookup() {
        let t = tables();
        assert_eq!(t.vowel(Nucleus::Vowel(Vowel::Eo), System::McCuneReischauer).unwrap(), "ŏ");
        assert_eq!(t.vowel(Nucleus::Vowel(Vowel::U), System::Yale).unwrap(), "wu");
        assert_eq!(t.vowel(Nucleus::Empty, System::Ipa).unwrap(), "");
        assert_eq!(t.vowel(Nucleus::Blank(' '), System::Revised).unwrap(), " ");
        assert_eq!(t.vowel(Nucleus::Blank('\''), System::Revised).unwrap(), "'");
    }

    #[test]
    fn test_junction_lookup() {
        let t = tables();
        let j = t
            .junction(Coda::Final(Final::Kiyeok), Some(Initial::Ieung), System::Phonetic)
            .unwrap();
        assert_eq!(j, "ᄀ");
        let j = t
            .junction(Coda::WordStart, Some(Initial::Kiyeok), System::Revised)
            .unwrap();
        assert_eq!(j, "g");
    }

    #[test]
    fn test_missing_boundary_reports_key() {
        let json = r#"{
            "version": 1,
            "systems": ["ph", "rr", "rrr", "mc", "yr", "ipa"],
            "vowels": {},
            "boundary": { "Ø-Ø": ["", "", "", "", "", ""] }
        }"#;
        let t = PhonologyTables::from_json(json).unwrap();
        let err = t
            .junction(Coda::Final(Final::Kiyeok), Some(Initial::Kiyeok), System::Revised)
            .unwrap_err();
        assert_eq!(err.to_string(), "No boundary data for ᆨ-ᄀ.");
    }

    #[test]
    fn test_restored_coda() {
        let t = tables();
        assert_eq!(
            t.restored_coda(Coda::Final(Final::PieupSios)).unwrap(),
            Coda::Final(Final::Pieup)
        );
        assert_eq!(
            t.restored_coda(Coda::Final(Final::Cieuc)).unwrap(),
            Coda::Final(Final::Tikeut)
        );
        assert_eq!(t.restored_coda(Coda::Empty).unwrap(), Coda::Empty);
    }

    #[test]
    fn test_rejects_wrong_column_order() {
        let json = r#"{
            "version": 1,
            "systems": ["rr", "ph", "rrr", "mc", "yr", "ipa"],
            "vowels": {},
            "boundary": {}
        }"#;
        assert!(matches!(
            PhonologyTables::from_json(json),
            Err(TableError::Format(_))
        ));
    }

    #[test]
    fn test_rejects_bad_keys() {
        let json = r#"{
            "version": 1,
            "systems": ["ph", "rr", "rrr", "mc", "yr", "ipa"],
            "vowels": {},
            "boundary": { "ᆨᄀ": ["", "", "", "", "", ""] }
        }"#;
        assert!(matches!(
            PhonologyTables::from_json(json),
            Err(TableError::Format(_))
        ));

        let json = r#"{
            "version": 1,
            "systems": ["ph", "rr", "rrr", "mc", "yr", "ipa"],
            "vowels": {},
            "boundary": { "ᆨ-ᄀ": ["", ""] }
        }"#;
        assert!(matches!(
            PhonologyTables::from_json(json),
            Err(TableError::Format(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phonology.json");
        std::fs::write(&path, BUILTIN_JSON).unwrap();
        let t = PhonologyTables::load(&path).unwrap();
        assert_eq!(t.boundary_len(), 580);

        let missing = dir.path().join("missing.json");
        assert!(matches!(PhonologyTables::load(&missing), Err(TableError::Io(_))));
    }
}
