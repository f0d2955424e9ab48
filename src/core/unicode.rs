//! 유니코드 한글 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 자모 시작 코드포인트 (ᄀ)
pub const CHOSEONG_BASE: u32 = 0x1100;
/// 중성 자모 시작 코드포인트 (ᅡ)
pub const JUNGSEONG_BASE: u32 = 0x1161;
/// 종성 자모 기준 코드포인트 (종성 인덱스 1 = ᆨ = 0x11A8)
pub const JONGSEONG_BASE: u32 = 0x11A7;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 하나가 차지하는 음절 수 (21 × 28 = 588)
const SYLLABLES_PER_CHOSEONG: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + choseong * SYLLABLES_PER_CHOSEONG
        + jungseong * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset % SYLLABLES_PER_CHOSEONG) / JONGSEONG_COUNT;
    let choseong = offset / SYLLABLES_PER_CHOSEONG;
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성 자모(ᄀ-ᄒ)이면 초성 인덱스 반환
pub fn choseong_index(c: char) -> Option<u32> {
    let cp = c as u32;
    (CHOSEONG_BASE..CHOSEONG_BASE + CHOSEONG_COUNT)
        .contains(&cp)
        .then(|| cp - CHOSEONG_BASE)
}

/// 중성 자모(ᅡ-ᅵ)이면 중성 인덱스 반환
pub fn jungseong_index(c: char) -> Option<u32> {
    let cp = c as u32;
    (JUNGSEONG_BASE..JUNGSEONG_BASE + JUNGSEONG_COUNT)
        .contains(&cp)
        .then(|| cp - JUNGSEONG_BASE)
}

/// 종성 자모(ᆨ-ᇂ)이면 종성 인덱스(1~27) 반환
pub fn jongseong_index(c: char) -> Option<u32> {
    let cp = c as u32;
    (JONGSEONG_BASE + 1..JONGSEONG_BASE + JONGSEONG_COUNT)
        .contains(&cp)
        .then(|| cp - JONGSEONG_BASE)
}

/// 호환용 자모 영역 (ㄱ-ㆎ): U+3131 ~ U+318E
pub fn is_compat_jamo(c: char) -> bool {
    (0x3131..=0x318E).contains(&(c as u32))
}

/// 호환용 자음 -> 종성 인덱스
/// 종성으로 쓸 수 없는 자음(ㄸ, ㅃ, ㅉ)은 None
pub fn compat_to_jongseong(c: char) -> Option<u32> {
    // 종성 인덱스: 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
    // ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
    // ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
    #[rustfmt::skip]
    let jong = match c {
        'ㄱ' => 1, 'ㄲ' => 2, 'ㄳ' => 3, 'ㄴ' => 4, 'ㄵ' => 5, 'ㄶ' => 6, 'ㄷ' => 7,
        'ㄹ' => 8, 'ㄺ' => 9, 'ㄻ' => 10, 'ㄼ' => 11, 'ㄽ' => 12, 'ㄾ' => 13, 'ㄿ' => 14,
        'ㅀ' => 15, 'ㅁ' => 16, 'ㅂ' => 17, 'ㅄ' => 18, 'ㅅ' => 19, 'ㅆ' => 20, 'ㅇ' => 21,
        'ㅈ' => 22, 'ㅊ' => 23, 'ㅋ' => 24, 'ㅌ' => 25, 'ㅍ' => 26, 'ㅎ' => 27,
        _ => return None,
    };
    Some(jong)
}

/// 호환용 자음 -> 초성 인덱스 (ㄸ, ㅃ, ㅉ 처럼 종성이 없는 자음용)
pub fn compat_to_choseong(c: char) -> Option<u32> {
    match c {
        'ㄸ' => Some(4),
        'ㅃ' => Some(8),
        'ㅉ' => Some(13),
        _ => None,
    }
}

/// 호환용 모음(ㅏ-ㅣ) -> 중성 인덱스
pub fn compat_to_jungseong(c: char) -> Option<u32> {
    // 호환용 모음 자모: ㅏ(0x314F) ~ ㅣ(0x3163), 중성 순서와 동일
    let cp = c as u32;
    (0x314F..=0x3163).contains(&cp).then(|| cp - 0x314F)
}

/// 변환 대상 구간에 속하는 문자인지 확인
/// 한글 음절, 자모, 호환용 자모와 단어 내부 구두점(공백, 아포스트로피)
pub fn is_span_char(c: char) -> bool {
    is_hangul_char(c) || c == ' ' || c == '\''
}

/// 한글 음절 또는 자모인지 확인
pub fn is_hangul_char(c: char) -> bool {
    is_hangul_syllable(c)
        || choseong_index(c).is_some()
        || jungseong_index(c).is_some()
        || jongseong_index(c).is_some()
        || is_compat_jamo(c)
}
