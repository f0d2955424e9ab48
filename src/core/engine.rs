//! 음절 경계 규칙 엔진
//!
//! 단어 앞뒤에 가상 음절을 붙이고 -1..N 위치를 왼쪽부터 한 번 훑습니다.
//! 각 위치에서 (현재 음절, 다음 음절) 작업 사본에 문맥 규칙을 적용한 뒤
//! 경계표에서 (종성, 다음 초성) 실현형을 읽어 `모음 + 경계` 토큰을 만듭니다.
//!
//! 규칙이 바꾼 다음 음절의 초성은 작업 배열에 기록되어 다음 위치에서 그대로 쓰입니다.
//! 입력 단어 자체는 바뀌지 않습니다.

use unicode_normalization::UnicodeNormalization;

use crate::config::RuleHints;
use crate::core::jamo::{Final, Initial, Vowel};
use crate::core::syllable::{Coda, Nucleus, Syllable};
use crate::data::PhonologyTables;
use crate::error::RomanizeError;
use crate::system::System;

/// 매큔-라이샤워 사이시옷 자음 변화 ("sy" = 대문자화할 때의 s)
const MC_COMPOUND: [(&str, &str); 6] = [
    ("g", "k"),
    ("d", "t"),
    ("b", "p"),
    ("j", "ch"),
    ("sy", "s"),
    ("s", "ss"),
];

/// 후보 표기 하나를 체계별 토큰 열로 변환
///
/// 반환되는 토큰은 위치 -1..N 각각의 `모음 + 경계` 문자열입니다.
pub fn realize(
    word: &[Syllable],
    system: System,
    hints: &RuleHints,
    tables: &PhonologyTables,
) -> Result<Vec<String>, RomanizeError> {
    let len = word.len() as i32;
    let mut arena = word.to_vec();
    let mut tokens = Vec::with_capacity(word.len() + 1);

    for index in -1..len {
        let written = at(word, index);
        let written_next = at(word, index + 1);
        let mut current = at(&arena, index).unwrap_or_else(Syllable::word_start);
        let mut next = at(&arena, index + 1).unwrap_or_else(Syllable::word_end);

        // 예일: 양순음 뒤 ㅜ -> ㅡ
        if system == System::Yale
            && current.vowel() == Some(Vowel::U)
            && current.initial.is_some_and(Initial::is_labial)
        {
            current.nucleus = Nucleus::Vowel(Vowel::Eu);
        }

        if system.branches() {
            // ㅢ는 단독 "의"를 빼고 ㅣ로 발음
            if current.vowel() == Some(Vowel::Yi)
                && !written.is_some_and(|s| s.is(Initial::Ieung, Vowel::Yi, None))
            {
                current.nucleus = Nucleus::Vowel(Vowel::I);
            }
            if written.is_some_and(|s| s.is(Initial::Nieun, Vowel::Eo, Some(Final::RieulPieup))) {
                neolb_coda(&mut current, &next);
            }
        }

        let mut vowel = tables.vowel(current.nucleus, system)?;

        if hints.nasal_insertion.contains(&(index + 1)) {
            next.initial = Some(Initial::Nieun);
        }
        if hints.compounding.contains(&index) && system.branches() {
            next.initial = next.initial.map(|i| i.tensed().unwrap_or(i));
        }
        if hints.n_insertion.contains(&(index + 1)) && system != System::RevisedTranslit {
            next.initial = if system == System::Yale && current.coda == Coda::Final(Final::Rieul) {
                Some(Initial::Rieul)
            } else {
                Some(Initial::Nieun)
            };
        }

        if !matches!(system, System::RevisedTranslit | System::Yale) {
            if hints.coda_restoration == Some(index) {
                current.coda = tables.restored_coda(current.coda)?;
            }
            if written.is_some_and(|s| s.is(Initial::Pieup, Vowel::A, Some(Final::RieulPieup))) {
                current.coda = Coda::Final(Final::Pieup);
            }
            if !current.standalone {
                palatalize(&mut current, written_next);
            }
        }

        let mut junction = tables
            .junction(current.coda, next.initial, system)?
            .to_string();
        log::trace!(
            "{} 경계 {}{}: {:?}",
            system,
            current.coda,
            next.initial.map_or_else(|| "Ø".to_string(), |i| i.to_string()),
            junction
        );

        if hints.lengthening.contains(&index) {
            match system {
                System::Phonetic => junction = lengthen_phonetic(&junction),
                System::Yale => vowel = add_macrons(&vowel),
                System::Ipa => vowel.push('ː'),
                _ => {}
            }
        }
        if index == -1 && hints.lengthening.contains(&0) && system == System::Ipa && len > 1 {
            vowel.push('ˈ');
        }

        if hints.compounding.contains(&index) {
            junction = mark_compound(&junction, system, hints.capitalize);
        }
        if hints.n_insertion.contains(&(index + 1)) && system == System::Yale {
            junction = superscript_inserted(&junction);
        }

        tokens.push(vowel + &junction);

        if let Ok(i) = usize::try_from(index) {
            arena[i] = current;
        }
        if let Some(slot) = usize::try_from(index + 1).ok().and_then(|i| arena.get_mut(i)) {
            *slot = next;
        }
    }

    Ok(tokens)
}

fn at(word: &[Syllable], index: i32) -> Option<Syllable> {
    usize::try_from(index).ok().and_then(|i| word.get(i)).copied()
}

/// 넓-: ㅈ/ㅅ 앞, 또는 ㅏ/ㅣ가 아닌 모음을 가진 ㄷ 앞에서 ㅂ으로 발음
fn neolb_coda(current: &mut Syllable, next: &Syllable) {
    let before_bilabial = match next.initial {
        Some(Initial::Cieuc | Initial::Sios) => true,
        Some(Initial::Tikeut) => !matches!(next.vowel(), Some(Vowel::A | Vowel::I)),
        _ => false,
    };
    if before_bilabial {
        current.coda = Coda::Final(Final::Pieup);
    }
}

/// 구개음화: ㅌ/ㄾ + 이/히 -> ㅊ, ㄷ + 이 -> ㅈ, ㄷ + 히 -> ㅊ
fn palatalize(current: &mut Syllable, written_next: Option<Syllable>) {
    let Some(next) = written_next else {
        return;
    };
    let before_i = next.is(Initial::Ieung, Vowel::I, None);
    let before_hi = next.is(Initial::Hieuh, Vowel::I, None);
    if !(before_i || before_hi) {
        return;
    }
    current.coda = match current.coda {
        Coda::Final(Final::Thieuth | Final::RieulThieuth) => Coda::Final(Final::Chieuch),
        Coda::Final(Final::Tikeut) if before_i => Coda::Final(Final::Cieuc),
        Coda::Final(Final::Tikeut) => Coda::Final(Final::Chieuch),
        other => other,
    };
}

/// 발음 한글 장음 표시: 종성 뒤, 아니면 경계 앞에 ':'
fn lengthen_phonetic(junction: &str) -> String {
    let chars: Vec<char> = junction.chars().collect();
    match chars.as_slice() {
        [first, rest @ ..] if rest.len() <= 1 => {
            let rest: String = rest.iter().collect();
            if Final::from_char(*first).is_some() {
                format!("{}:{}", first, rest)
            } else {
                format!(":{}{}", first, rest)
            }
        }
        _ => junction.to_string(),
    }
}

/// 예일 장음: 모음 글자에 장음 부호 (ā ē ī ō ū)
fn add_macrons(vowel: &str) -> String {
    vowel
        .chars()
        .flat_map(|c| {
            let macron = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u').then_some('\u{0304}');
            std::iter::once(c).chain(macron)
        })
        .nfc()
        .collect()
}

/// 사이시옷 표시: 경계 마지막 글자를 바꿈
fn mark_compound(junction: &str, system: System, capitalize: bool) -> String {
    let mut chars: Vec<char> = junction.chars().collect();
    let Some(last) = chars.pop() else {
        return junction.to_string();
    };
    let mut out: String = chars.into_iter().collect();
    if system == System::Yale {
        out.push('q');
    }
    if system == System::McCuneReischauer {
        out.push_str(&mc_compound(last, capitalize));
    } else {
        out.push(last);
    }
    out
}

fn mc_compound(letter: char, capitalize: bool) -> String {
    let lookup = |key: &str| {
        MC_COMPOUND
            .iter()
            .find(|(from, _)| *from == key)
            .map(|(_, to)| to.to_string())
    };
    let capitalized = if capitalize {
        lookup(&format!("{}y", letter))
    } else {
        None
    };
    capitalized
        .or_else(|| lookup(&letter.to_string()))
        .unwrap_or_else(|| letter.to_string())
}

/// 예일 ㄴ 첨가 표시: 끝의 n/l을 위첨자로
fn superscript_inserted(junction: &str) -> String {
    if let Some(stem) = junction.strip_suffix('n') {
        format!("{}ⁿ", stem)
    } else if let Some(stem) = junction.strip_suffix('l') {
        format!("{}ˡ", stem)
    } else {
        junction.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::syllable::decompose_word;

    fn run(word: &str, system: System, hints: &RuleHints) -> String {
        let tables = PhonologyTables::builtin().unwrap();
        // 발음 한글은 조합형 자모로 나오므로 완성형으로 모아서 비교
        realize(&decompose_word(word), system, hints, tables)
            .unwrap()
            .concat()
            .nfc()
            .collect()
    }

    #[test]
    fn test_token_per_position() {
        let tables = PhonologyTables::builtin().unwrap();
        let tokens = realize(
            &decompose_word("한국어"),
            System::Revised,
            &RuleHints::default(),
            tables,
        )
        .unwrap();
        assert_eq!(tokens, vec!["h", "an-g", "ug", "eo"]);
    }

    #[test]
    fn test_liaison_and_nasalization() {
        let hints = RuleHints::default();
        assert_eq!(run("국물", System::Phonetic, &hints), "궁물");
        assert_eq!(run("국물", System::Revised, &hints), "gungmul");
        assert_eq!(run("신라", System::Phonetic, &hints), "실라");
        assert_eq!(run("학교", System::McCuneReischauer, &hints), "hakkyo");
    }

    #[test]
    fn test_palatalization() {
        let hints = RuleHints::default();
        assert_eq!(run("같이", System::Revised, &hints), "gachi");
        assert_eq!(run("굳이", System::Revised, &hints), "guji");
        // 전자법은 철자를 따름
        assert_eq!(run("같이", System::RevisedTranslit, &hints), "gat-i");
        // 히 앞의 ㄷ/ㅌ, 이 앞의 ㄾ
        assert_eq!(run("닫히다", System::Phonetic, &hints), "다치다");
        assert_eq!(run("닫히다", System::Revised, &hints), "dachida");
        assert_eq!(run("밭히다", System::McCuneReischauer, &hints), "pach'ida");
        assert_eq!(run("핥이다", System::Phonetic, &hints), "하치다");
        assert_eq!(run("핥이다", System::Yale, &hints), "halth.ita");
    }

    #[test]
    fn test_neolb_coda() {
        let hints = RuleHints::default();
        assert_eq!(run("넓죽", System::Phonetic, &hints), "넙쭉");
        assert_eq!(run("넓죽", System::Ipa, &hints), "nʌ̹p̚t͡ɕ͈uk̚");
        assert_eq!(run("넓다", System::Phonetic, &hints), "널따");
        // 로마자 체계는 겹받침 그대로
        assert_eq!(run("넓죽", System::Revised, &hints), "neoljuk");
    }

    #[test]
    fn test_yale_unrounding_after_labial() {
        let hints = RuleHints::default();
        assert_eq!(run("부모", System::Yale, &hints), "pumo");
        assert_eq!(run("구두", System::Yale, &hints), "kwutwu");
    }

    #[test]
    fn test_nasal_insertion_hint() {
        let hints = RuleHints::new().with_nasal_insertion([2]);
        assert_eq!(run("의견란", System::Revised, &hints), "uigyeonnan");
    }

    #[test]
    fn test_n_insertion_yale_superscript() {
        let hints = RuleHints::new().with_n_insertion([1]);
        assert_eq!(run("깻잎", System::Yale, &hints), "kkaysⁿiph");
        assert_eq!(run("깻잎", System::Revised, &hints), "kkaennip");
        assert_eq!(run("깻잎", System::RevisedTranslit, &hints), "kkaes-ip");
        // ㄹ 받침 뒤에는 ㄹ 첨가
        assert_eq!(run("솔잎", System::Yale, &hints), "solˡiph");
        assert_eq!(run("솔잎", System::Revised, &hints), "sollip");
    }

    #[test]
    fn test_compounding_markers() {
        let hints = RuleHints::new().with_compounding([1]);
        assert_eq!(run("상사병", System::McCuneReischauer, &hints), "sangsapyŏng");
        assert_eq!(run("상사병", System::Yale, &hints), "sangsaqpyeng");
        assert_eq!(run("상사병", System::Phonetic, &hints), "상사뼝");
    }

    #[test]
    fn test_lengthening() {
        let hints = RuleHints::new().with_lengthening([0]);
        assert_eq!(run("한국어", System::Ipa, &hints), "ˈha̠ːnɡuɡʌ̹");
        assert_eq!(run("한국어", System::Yale, &hints), "hānkwuk.e");
    }

    #[test]
    fn test_missing_boundary_is_fatal() {
        let json = r#"{
            "version": 1,
            "systems": ["ph", "rr", "rrr", "mc", "yr", "ipa"],
            "vowels": { "ᅡ": ["ᅡ", "a", "a", "a", "a", "a"], "Ø": ["", "", "", "", "", ""] },
            "boundary": { "-ᄀ": ["ᄀ", "g", "g", "k", "k", "k"] }
        }"#;
        let tables = PhonologyTables::from_json(json).unwrap();
        let err = realize(
            &decompose_word("가"),
            System::Revised,
            &RuleHints::default(),
            &tables,
        )
        .unwrap_err();
        assert!(matches!(err, RomanizeError::MissingBoundary { ref key } if key == "Ø-Ø"));
    }

    #[test]
    fn test_helpers() {
        assert_eq!(lengthen_phonetic("ᆫᄀ"), "ᆫ:ᄀ");
        assert_eq!(lengthen_phonetic("ᄀ"), ":ᄀ");
        assert_eq!(lengthen_phonetic(""), "");
        assert_eq!(add_macrons("wu"), "wū");
        assert_eq!(mc_compound('s', false), "ss");
        assert_eq!(mc_compound('s', true), "s");
        assert_eq!(mc_compound('g', true), "k");
        assert_eq!(mc_compound('n', false), "n");
        assert_eq!(superscript_inserted("l"), "ˡ");
    }
}
