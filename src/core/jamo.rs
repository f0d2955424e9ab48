//! 초성/중성/종성 자모 기호
//!
//! 자모를 문자 대신 닫힌 열거형으로 다뤄서 규칙 검사가 빠짐없이 이루어지도록 합니다.

use std::fmt;

use crate::core::unicode::{
    choseong_index, jongseong_index, jungseong_index, CHOSEONG_BASE, JONGSEONG_BASE, JUNGSEONG_BASE,
};

/// 초성 (U+1100 ~ U+1112)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Initial {
    Kiyeok,
    SsangKiyeok,
    Nieun,
    Tikeut,
    SsangTikeut,
    Rieul,
    Mieum,
    Pieup,
    SsangPieup,
    Sios,
    SsangSios,
    Ieung,
    Cieuc,
    SsangCieuc,
    Chieuch,
    Khieukh,
    Thieuth,
    Phieuph,
    Hieuh,
}

impl Initial {
    /// 초성 인덱스 순서 (19개)
    pub const ALL: [Initial; 19] = [
        Initial::Kiyeok,
        Initial::SsangKiyeok,
        Initial::Nieun,
        Initial::Tikeut,
        Initial::SsangTikeut,
        Initial::Rieul,
        Initial::Mieum,
        Initial::Pieup,
        Initial::SsangPieup,
        Initial::Sios,
        Initial::SsangSios,
        Initial::Ieung,
        Initial::Cieuc,
        Initial::SsangCieuc,
        Initial::Chieuch,
        Initial::Khieukh,
        Initial::Thieuth,
        Initial::Phieuph,
        Initial::Hieuh,
    ];

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_char(c: char) -> Option<Self> {
        choseong_index(c).and_then(Self::from_index)
    }

    pub fn to_char(self) -> char {
        char::from_u32(CHOSEONG_BASE + self.index()).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// 평음 -> 경음 (ᄀᄃᄇᄉᄌ -> ᄁᄄᄈᄊᄍ)
    pub fn tensed(self) -> Option<Self> {
        match self {
            Initial::Kiyeok => Some(Initial::SsangKiyeok),
            Initial::Tikeut => Some(Initial::SsangTikeut),
            Initial::Pieup => Some(Initial::SsangPieup),
            Initial::Sios => Some(Initial::SsangSios),
            Initial::Cieuc => Some(Initial::SsangCieuc),
            _ => None,
        }
    }

    /// 양순음 (ᄆᄇᄈᄑ)
    pub fn is_labial(self) -> bool {
        matches!(
            self,
            Initial::Mieum | Initial::Pieup | Initial::SsangPieup | Initial::Phieuph
        )
    }
}

impl fmt::Display for Initial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 중성 (U+1161 ~ U+1175)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vowel {
    A,
    Ae,
    Ya,
    Yae,
    Eo,
    E,
    Yeo,
    Ye,
    O,
    Wa,
    Wae,
    Oe,
    Yo,
    U,
    Wo,
    We,
    Wi,
    Yu,
    Eu,
    Yi,
    I,
}

impl Vowel {
    /// 중성 인덱스 순서 (21개)
    pub const ALL: [Vowel; 21] = [
        Vowel::A,
        Vowel::Ae,
        Vowel::Ya,
        Vowel::Yae,
        Vowel::Eo,
        Vowel::E,
        Vowel::Yeo,
        Vowel::Ye,
        Vowel::O,
        Vowel::Wa,
        Vowel::Wae,
        Vowel::Oe,
        Vowel::Yo,
        Vowel::U,
        Vowel::Wo,
        Vowel::We,
        Vowel::Wi,
        Vowel::Yu,
        Vowel::Eu,
        Vowel::Yi,
        Vowel::I,
    ];

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_char(c: char) -> Option<Self> {
        jungseong_index(c).and_then(Self::from_index)
    }

    pub fn to_char(self) -> char {
        char::from_u32(JUNGSEONG_BASE + self.index()).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// ㅏㅐㅓㅔ -> ㅑㅒㅕㅖ
    pub fn iotated(self) -> Option<Self> {
        match self {
            Vowel::A => Some(Vowel::Ya),
            Vowel::Ae => Some(Vowel::Yae),
            Vowel::Eo => Some(Vowel::Yeo),
            Vowel::E => Some(Vowel::Ye),
            _ => None,
        }
    }

    /// ㅑㅒㅕㅖ -> ㅏㅐㅓㅔ
    pub fn deiotated(self) -> Option<Self> {
        match self {
            Vowel::Ya => Some(Vowel::A),
            Vowel::Yae => Some(Vowel::Ae),
            Vowel::Yeo => Some(Vowel::Eo),
            Vowel::Ye => Some(Vowel::E),
            _ => None,
        }
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 종성 (U+11A8 ~ U+11C2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Final {
    Kiyeok,
    SsangKiyeok,
    KiyeokSios,
    Nieun,
    NieunCieuc,
    NieunHieuh,
    Tikeut,
    Rieul,
    RieulKiyeok,
    RieulMieum,
    RieulPieup,
    RieulSios,
    RieulThieuth,
    RieulPhieuph,
    RieulHieuh,
    Mieum,
    Pieup,
    PieupSios,
    Sios,
    SsangSios,
    Ieung,
    Cieuc,
    Chieuch,
    Khieukh,
    Thieuth,
    Phieuph,
    Hieuh,
}

impl Final {
    /// 종성 인덱스 1~27 순서
    pub const ALL: [Final; 27] = [
        Final::Kiyeok,
        Final::SsangKiyeok,
        Final::KiyeokSios,
        Final::Nieun,
        Final::NieunCieuc,
        Final::NieunHieuh,
        Final::Tikeut,
        Final::Rieul,
        Final::RieulKiyeok,
        Final::RieulMieum,
        Final::RieulPieup,
        Final::RieulSios,
        Final::RieulThieuth,
        Final::RieulPhieuph,
        Final::RieulHieuh,
        Final::Mieum,
        Final::Pieup,
        Final::PieupSios,
        Final::Sios,
        Final::SsangSios,
        Final::Ieung,
        Final::Cieuc,
        Final::Chieuch,
        Final::Khieukh,
        Final::Thieuth,
        Final::Phieuph,
        Final::Hieuh,
    ];

    /// 종성 인덱스(1~27)로 생성, 0(종성 없음)은 None
    pub fn from_index(index: u32) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize).copied())
    }

    /// 종성 인덱스 (1~27)
    pub fn index(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_char(c: char) -> Option<Self> {
        jongseong_index(c).and_then(Self::from_index)
    }

    pub fn to_char(self) -> char {
        char::from_u32(JONGSEONG_BASE + self.index()).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl fmt::Display for Final {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
