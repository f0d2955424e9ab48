//! 에러 타입

/// 음운표 로드/파싱 에러
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// 파일 읽기 실패
    #[error("파일 읽기 오류: {0}")]
    Io(#[from] std::io::Error),
    /// JSON 파싱 실패
    #[error("JSON 파싱 오류: {0}")]
    Parse(String),
    /// 표 형식 오류
    #[error("음운표 형식 오류: {0}")]
    Format(String),
}

/// 힌트 파일 로드 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("파일 읽기 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 파싱 오류: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 변환 에러
///
/// 실패하면 부분 결과 없이 에러 하나만 반환합니다.
#[derive(Debug, thiserror::Error)]
pub enum RomanizeError {
    /// 경계표에 (종성, 초성) 쌍이 없음: 음운표 데이터 결함
    #[error("No boundary data for {key}.")]
    MissingBoundary { key: String },
    /// 모음표에 항목이 없음: 음운표 데이터 결함
    #[error("No vowel data for {key}.")]
    MissingVowel { key: String },
    /// 단어 길이를 벗어난 위치 힌트
    #[error("hint `{option}` position {position} is out of range for a {len}-syllable word")]
    InvalidHint {
        option: &'static str,
        position: i32,
        len: usize,
    },
    /// 알 수 없는 표기 체계
    #[error("unknown system: {0}")]
    UnknownSystem(String),
    /// 내장 음운표를 읽지 못함
    #[error("built-in tables unavailable: {0}")]
    BuiltinTable(String),
    #[error(transparent)]
    Table(#[from] TableError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_boundary_message() {
        let err = RomanizeError::MissingBoundary {
            key: "ᆨ-ᄀ".to_string(),
        };
        assert_eq!(err.to_string(), "No boundary data for ᆨ-ᄀ.");
    }

    #[test]
    fn test_table_error_converts() {
        let err: RomanizeError = TableError::Format("bad".into()).into();
        assert!(matches!(err, RomanizeError::Table(TableError::Format(_))));
    }
}
