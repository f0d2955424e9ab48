//! 음절 분해
//!
//! 문자 하나를 {초성, 중성, 종성} 세 칸으로 나눕니다. 한글이 아닌 문자는
//! 단어 경계 표시(Ø, " ", X)로 바뀌어 규칙 처리에 참여합니다.

use std::fmt;

use crate::core::jamo::{Final, Initial, Vowel};
use crate::core::unicode::{
    compat_to_choseong, compat_to_jongseong, compat_to_jungseong, decompose_syllable,
    is_compat_jamo,
};

/// 중성 칸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleus {
    Vowel(Vowel),
    /// 모음 없음 (Ø)
    Empty,
    /// 단어 안의 비한글 문자 (공백, 아포스트로피 등)
    Blank(char),
}

/// 종성 칸 (경계표 왼쪽 키)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coda {
    /// 음절 없음 (X): 단어 앞 가상 음절과 경계 문자
    WordStart,
    /// 종성 없음 (Ø)
    Empty,
    Final(Final),
}

impl Coda {
    fn from_index(jongseong: u32) -> Self {
        Final::from_index(jongseong).map_or(Coda::Empty, Coda::Final)
    }
}

impl fmt::Display for Coda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coda::WordStart => Ok(()),
            Coda::Empty => write!(f, "Ø"),
            Coda::Final(jamo) => write!(f, "{}", jamo),
        }
    }
}

/// 분해된 음절
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    /// None = 초성 없음 (Ø)
    pub initial: Option<Initial>,
    pub nucleus: Nucleus,
    pub coda: Coda,
    /// 호환용 자모에서 온 종성 (음절 종성에만 적용되는 규칙에서 제외)
    pub standalone: bool,
}

impl Syllable {
    pub fn new(initial: Initial, vowel: Vowel, coda: Option<Final>) -> Self {
        Self {
            initial: Some(initial),
            nucleus: Nucleus::Vowel(vowel),
            coda: coda.map_or(Coda::Empty, Coda::Final),
            standalone: false,
        }
    }

    /// 단어 앞 가상 음절 (Ø, Ø, X)
    pub fn word_start() -> Self {
        Self {
            initial: None,
            nucleus: Nucleus::Empty,
            coda: Coda::WordStart,
            standalone: false,
        }
    }

    /// 단어 뒤 가상 음절 (Ø, Ø, Ø)
    pub fn word_end() -> Self {
        Self {
            initial: None,
            nucleus: Nucleus::Empty,
            coda: Coda::Empty,
            standalone: false,
        }
    }

    /// 경계 문자 (Ø, " ", X)
    pub fn blank(c: char) -> Self {
        Self {
            initial: None,
            nucleus: Nucleus::Blank(c),
            coda: Coda::WordStart,
            standalone: false,
        }
    }

    /// 중성 (모음이 있을 때만)
    pub fn vowel(&self) -> Option<Vowel> {
        match self.nucleus {
            Nucleus::Vowel(v) => Some(v),
            _ => None,
        }
    }

    /// 완성형 음절 블록에서 온 음절인지 확인
    pub fn is_block(&self) -> bool {
        self.initial.is_some() && self.vowel().is_some() && !self.standalone
    }

    /// 초성/중성/종성이 정확히 일치하는 완성형 음절인지 확인
    pub fn is(&self, initial: Initial, vowel: Vowel, coda: Option<Final>) -> bool {
        self.is_block()
            && self.initial == Some(initial)
            && self.vowel() == Some(vowel)
            && self.coda == coda.map_or(Coda::Empty, Coda::Final)
    }

    /// 완성형 문자로 다시 조합 (블록이 아니면 None)
    pub fn to_char(&self) -> Option<char> {
        if !self.is_block() {
            return None;
        }
        let initial = self.initial?;
        let vowel = self.vowel()?;
        let jong = match self.coda {
            Coda::Final(f) => f.index(),
            _ => 0,
        };
        crate::core::unicode::compose_syllable(initial.index(), vowel.index(), jong)
    }
}

/// 문자 하나를 음절로 분해
///
/// - 완성형 한글: 코드포인트 연산으로 초성/중성/종성 분리
/// - 초성/중성/종성 자모: 나머지 두 칸은 Ø
/// - 호환용 자음: 종성으로 (종성이 없는 ㄸㅃㅉ는 초성으로), standalone 표시
/// - 그 외: 경계 문자 (Ø, " ", X)
pub fn decompose_char(c: char) -> Syllable {
    if let Some((cho, jung, jong)) = decompose_syllable(c) {
        if let (Some(initial), Some(vowel)) = (Initial::from_index(cho), Vowel::from_index(jung)) {
            return Syllable {
                initial: Some(initial),
                nucleus: Nucleus::Vowel(vowel),
                coda: Coda::from_index(jong),
                standalone: false,
            };
        }
    }

    let mut syllable = Syllable::word_end();
    if let Some(initial) = Initial::from_char(c) {
        syllable.initial = Some(initial);
    } else if let Some(vowel) = Vowel::from_char(c) {
        syllable.nucleus = Nucleus::Vowel(vowel);
    } else if let Some(fin) = Final::from_char(c) {
        syllable.coda = Coda::Final(fin);
    } else if is_compat_jamo(c) {
        if let Some(jong) = compat_to_jongseong(c) {
            syllable.coda = Coda::from_index(jong);
            syllable.standalone = true;
        } else if let Some(initial) = compat_to_choseong(c).and_then(Initial::from_index) {
            syllable.initial = Some(initial);
        } else if let Some(vowel) = compat_to_jungseong(c).and_then(Vowel::from_index) {
            syllable.nucleus = Nucleus::Vowel(vowel);
        } else {
            // 옛한글 호환 자모
            return Syllable::blank(c);
        }
    } else {
        return Syllable::blank(c);
    }
    syllable
}

/// 단어 전체를 음절 목록으로 분해
pub fn decompose_word(word: &str) -> Vec<Syllable> {
    word.chars().map(decompose_char).collect()
}
