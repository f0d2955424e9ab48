//! 토큰 결합 및 체계별 후처리

use unicode_normalization::UnicodeNormalization;

use crate::system::System;

/// 국어의 로마자 표기법에서 붙임표로 음절 경계를 밝히는 글자 쌍
const AMBIGUOUS_PAIRS: [&str; 5] = ["oe", "eo", "eu", "ae", "ui"];

/// 음절 경계 임시 표시 (ㅇ 초성 앞 모음 뒤)
const SYLLABLE_MARK: char = '…';

/// ㅋ 변이음
const ASPIRATED_K: [(&str, &str); 3] = [("kʰi", "kçi"), ("kʰj", "kçj"), ("kʰɯ", "kxɯ")];

/// ㅎ/ɦ 변이음
const GLOTTAL_H: [(&str, &str); 12] = [
    ("hi", "çi"),
    ("hj", "çj"),
    ("hɯ", "xɯ"),
    ("ho", "ɸʷo"),
    ("hu", "ɸʷu"),
    ("hw", "ɸw"),
    ("ɦi", "ʝi"),
    ("ɦj", "ʝj"),
    ("ɦɯ", "ɣɯ"),
    ("ɦo", "βo"),
    ("ɦu", "βu"),
    ("ɦw", "βw"),
];

/// 후보 하나의 토큰을 이어 붙이고 체계별로 정리
///
/// `original`은 변환 전 단어 원문으로, 발음 한글 정렬에 쓰입니다.
pub fn assemble(tokens: &[String], system: System, capitalize: bool, original: &str) -> String {
    let mut text = tokens.concat();
    if capitalize && system.capitalizes() {
        text = capitalize_first(&text);
    }
    match system {
        System::Phonetic => {
            let composed: String = text.nfc().collect();
            tidy_phonetic(original, &composed)
        }
        System::Revised | System::RevisedTranslit => {
            let once = hyphenate_ambiguous(&text);
            hyphenate_ambiguous(&once)
        }
        System::McCuneReischauer => text.replace("swi", "shwi"),
        System::Yale | System::Ipa => text,
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 발음 한글 정렬
///
/// 원문과 변환 결과를 나란히 읽으며 일치하면 두 커서를 함께 옮기고,
/// 다르면 각 커서를 ':'나 공백이 아닌 글자일 때만 옮깁니다.
/// 결과 글자는 커서 위치에서 하나씩 복사합니다.
pub fn tidy_phonetic(original: &str, romanized: &str) -> String {
    let original: Vec<char> = original.chars().collect();
    let romanized: Vec<char> = romanized.chars().collect();
    let is_real = |c: Option<char>| c.is_some_and(|c| c != ':' && c != ' ');

    let (mut j, mut k) = (0, 0);
    let mut out = String::with_capacity(romanized.len() * 3);
    for _ in 0..romanized.len() {
        let r = romanized.get(k).copied();
        let o = original.get(j).copied();
        out.extend(r);
        if r == o {
            j += 1;
            k += 1;
        } else {
            if is_real(o) {
                k += 1;
            }
            if is_real(r) {
                j += 1;
            }
        }
    }
    out
}

/// `(.)…(.)` 한 번 훑기: 모호한 글자 쌍이면 붙임표, 아니면 표시만 제거
fn hyphenate_ambiguous(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 2 < chars.len() && chars[i + 1] == SYLLABLE_MARK {
            let (a, b) = (chars[i], chars[i + 2]);
            out.push(a);
            let pair: String = [a, b].iter().collect();
            if AMBIGUOUS_PAIRS.contains(&pair.as_str()) {
                out.push('-');
            }
            out.push(b);
            i += 3;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

/// IPA 변이음 처리
///
/// 단어의 모든 후보를 구분자로 이은 뒤 한 번 적용합니다.
pub fn tidy_ipa(ipa: &str) -> String {
    let mut ipa = ipa.replace("ʌ̹ː", "ɘː");
    for glide in ["j", "i"] {
        ipa = ipa.replace(&format!("ɭɭ{}", glide), &format!("ɭʎ{}", glide));
    }
    ipa = ipa.replace("sʰɥi", "ʃʰɥi").replace("s͈ʰɥi", "ʃ͈ʰɥi");
    for mark in ["ʰ", "\u{0348}"] {
        for glide in ["j", "i"] {
            ipa = ipa.replace(&format!("s{}{}", mark, glide), &format!("ɕ{}{}", mark, glide));
        }
    }
    ipa = ipa.replace("nj", "ɲj");
    for (from, to) in ASPIRATED_K.iter().chain(GLOTTAL_H.iter()) {
        ipa = ipa.replace(from, to);
    }

    // 뒤쪽 절반(글자 수 기준)에서만 ɥi -> y
    if ipa.contains("ɥi") {
        let mid = ipa.chars().count() / 2;
        let split = ipa.char_indices().nth(mid).map_or(ipa.len(), |(i, _)| i);
        let (head, tail) = ipa.split_at(split);
        ipa = format!("{}{}", head, tail.replace("ɥi", "y"));
    }
    ipa
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_capitalize_romanizations_only() {
        let t = tokens(&["h", "an-g", "ug", "eo"]);
        assert_eq!(assemble(&t, System::Revised, true, "한국어"), "Han-gugeo");
        assert_eq!(assemble(&t, System::Yale, true, "한국어"), "Han-gugeo");
        assert_eq!(assemble(&t, System::Ipa, true, "한국어"), "han-gugeo");
        assert_eq!(assemble(&t, System::Revised, false, "한국어"), "han-gugeo");
    }

    #[test]
    fn test_hyphenate_ambiguous() {
        assert_eq!(hyphenate_ambiguous("ba…eo"), "ba-eo");
        assert_eq!(hyphenate_ambiguous("o…a"), "oa");
        // 표시가 연달아 붙으면 두 번 훑어야 모두 처리됨
        let once = hyphenate_ambiguous("a……e");
        assert_eq!(once, "a…e");
        assert_eq!(hyphenate_ambiguous(&once), "a-e");
    }

    #[test]
    fn test_mc_swi() {
        let t = tokens(&["s", "wi"]);
        assert_eq!(assemble(&t, System::McCuneReischauer, false, "쉬"), "shwi");
    }

    #[test]
    fn test_tidy_phonetic_keeps_length_mark() {
        assert_eq!(tidy_phonetic("한국어", "한:구거"), "한:구거");
        assert_eq!(tidy_phonetic("국물", "궁물"), "궁물");
    }

    #[test]
    fn test_tidy_ipa_allophones() {
        assert_eq!(tidy_ipa("sʰi"), "ɕʰi");
        assert_eq!(tidy_ipa("s͈ja̠"), "ɕ͈ja̠");
        assert_eq!(tidy_ipa("ɭɭi"), "ɭʎi");
        assert_eq!(tidy_ipa("njo̞"), "ɲjo̞");
        assert_eq!(tidy_ipa("kʰɯ"), "kxɯ");
        assert_eq!(tidy_ipa("ho̞"), "ɸʷo̞");
        assert_eq!(tidy_ipa("ʌ̹ːn"), "ɘːn");
    }

    #[test]
    fn test_tidy_ipa_midpoint_split() {
        // 앞쪽 절반의 ɥi는 그대로 둠
        assert_eq!(tidy_ipa("t͈ɥia̠] ~ [t͈ɥia̠"), "t͈ɥia̠] ~ [t͈ya̠");
        assert_eq!(tidy_ipa("a̠"), "a̠");
    }
}
