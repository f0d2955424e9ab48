//! 위치 힌트 설정 (JSON)
//!
//! 불규칙 발음은 철자만으로 알 수 없으므로 호출자가 음절 위치로 지정합니다.
//! 위치는 0부터 세며, 길이·사이시옷 힌트에서는 -1이 "첫 음절 앞"을 뜻합니다.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, RomanizeError};

/// 발음 규칙 힌트
///
/// 호출마다 새로 만들어 넘기는 값입니다. 지정하지 않은 항목은 "요청 없음"입니다.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RuleHints {
    /// 장음 위치
    #[serde(alias = "l")]
    pub lengthening: BTreeSet<i32>,
    /// 사이시옷(합성어 경계) 위치: 다음 음절 초성이 된소리가 됨
    #[serde(alias = "com")]
    pub compounding: BTreeSet<i32>,
    /// 로마자 첫 글자 대문자화
    #[serde(alias = "cap")]
    pub capitalize: bool,
    /// 초성이 ㄴ으로 바뀌는 음절 위치
    #[serde(alias = "nn")]
    pub nasal_insertion: BTreeSet<i32>,
    /// ㅢ를 ㅣ로 발음하는 음절 위치
    #[serde(alias = "ui")]
    pub vowel_to_i: Option<i32>,
    /// ㅢ를 ㅔ로 발음하는 음절 위치
    #[serde(alias = "ui_e")]
    pub vowel_to_e: Option<i32>,
    /// 받침을 발음하지 않는 음절 위치 (다음 초성은 된소리)
    #[serde(alias = "nobc")]
    pub no_boundary_release: Option<i32>,
    /// ㄴ 첨가 음절 위치
    #[serde(alias = "ni")]
    pub n_insertion: BTreeSet<i32>,
    /// 겹받침을 대표음으로 되돌리는 음절 위치
    #[serde(alias = "bcred")]
    pub coda_restoration: Option<i32>,
    /// 받침 ㅅ을 ㄷ으로도 발음하는 음절 위치
    #[serde(alias = "svar")]
    pub s_variant: Option<i32>,
    /// ㅏㅐㅓㅔ를 ㅑㅒㅕㅖ로도 발음하는 음절 위치
    #[serde(alias = "iot")]
    pub iotation: Option<i32>,
    /// ㅑㅒㅕㅖ를 ㅏㅐㅓㅔ로도 발음하는 음절 위치
    #[serde(alias = "yeored")]
    pub yeo_reduction: Option<i32>,
}

impl RuleHints {
    /// 빈 힌트 생성
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lengthening(mut self, positions: impl IntoIterator<Item = i32>) -> Self {
        self.lengthening.extend(positions);
        self
    }

    pub fn with_compounding(mut self, positions: impl IntoIterator<Item = i32>) -> Self {
        self.compounding.extend(positions);
        self
    }

    pub fn with_capitalize(mut self, capitalize: bool) -> Self {
        self.capitalize = capitalize;
        self
    }

    pub fn with_nasal_insertion(mut self, positions: impl IntoIterator<Item = i32>) -> Self {
        self.nasal_insertion.extend(positions);
        self
    }

    pub fn with_vowel_to_i(mut self, position: i32) -> Self {
        self.vowel_to_i = Some(position);
        self
    }

    pub fn with_vowel_to_e(mut self, position: i32) -> Self {
        self.vowel_to_e = Some(position);
        self
    }

    pub fn with_no_boundary_release(mut self, position: i32) -> Self {
        self.no_boundary_release = Some(position);
        self
    }

    pub fn with_n_insertion(mut self, positions: impl IntoIterator<Item = i32>) -> Self {
        self.n_insertion.extend(positions);
        self
    }

    pub fn with_coda_restoration(mut self, position: i32) -> Self {
        self.coda_restoration = Some(position);
        self
    }

    pub fn with_s_variant(mut self, position: i32) -> Self {
        self.s_variant = Some(position);
        self
    }

    pub fn with_iotation(mut self, position: i32) -> Self {
        self.iotation = Some(position);
        self
    }

    pub fn with_yeo_reduction(mut self, position: i32) -> Self {
        self.yeo_reduction = Some(position);
        self
    }

    /// 위치 범위 검사
    ///
    /// 장음·사이시옷은 -1..len, 나머지는 0..len 범위여야 합니다.
    pub fn validate(&self, len: usize) -> Result<(), RomanizeError> {
        let sets: [(&'static str, &BTreeSet<i32>, i32); 4] = [
            ("lengthening", &self.lengthening, -1),
            ("compounding", &self.compounding, -1),
            ("nasal_insertion", &self.nasal_insertion, 0),
            ("n_insertion", &self.n_insertion, 0),
        ];
        for (option, positions, min) in sets {
            for &position in positions {
                check_position(option, position, min, len)?;
            }
        }

        let singles: [(&'static str, Option<i32>); 7] = [
            ("vowel_to_i", self.vowel_to_i),
            ("vowel_to_e", self.vowel_to_e),
            ("no_boundary_release", self.no_boundary_release),
            ("coda_restoration", self.coda_restoration),
            ("s_variant", self.s_variant),
            ("iotation", self.iotation),
            ("yeo_reduction", self.yeo_reduction),
        ];
        for (option, position) in singles {
            if let Some(position) = position {
                check_position(option, position, 0, len)?;
            }
        }
        Ok(())
    }
}

fn check_position(
    option: &'static str,
    position: i32,
    min: i32,
    len: usize,
) -> Result<(), RomanizeError> {
    let in_range = position >= min && usize::try_from(position).map_or(true, |p| p < len);
    if in_range {
        Ok(())
    } else {
        Err(RomanizeError::InvalidHint {
            option,
            position,
            len,
        })
    }
}

/// JSON 문자열에서 힌트 파싱
pub fn parse_hints(json: &str) -> Result<RuleHints, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// JSON 파일에서 힌트 로드
pub fn load_hints(path: impl AsRef<Path>) -> Result<RuleHints, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_hints(&content)
}
