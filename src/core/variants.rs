//! 발음 후보 생성
//!
//! 한 단어가 두 가지 이상으로 발음될 수 있을 때 각 발음을 철자 수준의 후보로
//! 만들어 따로 변환합니다. 후보 순서가 곧 출력에서 구분자로 이어지는 순서입니다.

use crate::config::RuleHints;
use crate::core::jamo::{Final, Initial, Vowel};
use crate::core::syllable::{Coda, Nucleus, Syllable};
use crate::system::System;

type Word = Vec<Syllable>;

/// 자동으로 변이 후보를 만드는 모음
struct VowelClass {
    vowel: Vowel,
    replacement: Vowel,
    systems: &'static [System],
    /// 변이 후보를 기존 후보 앞에 둠
    front: bool,
}

const VOWEL_CLASSES: [VowelClass; 3] = [
    VowelClass {
        vowel: Vowel::Wi,
        replacement: Vowel::Wi,
        systems: &[System::Ipa],
        front: false,
    },
    VowelClass {
        vowel: Vowel::Oe,
        replacement: Vowel::We,
        systems: &[System::Phonetic, System::Ipa],
        front: true,
    },
    VowelClass {
        vowel: Vowel::Ye,
        replacement: Vowel::E,
        systems: &[System::Phonetic, System::Ipa],
        front: false,
    },
];

/// 단어의 발음 후보 목록 (첫 후보는 항상 철자 그대로)
pub fn respellings(word: &[Syllable], system: System, hints: &RuleHints) -> Vec<Word> {
    let mut candidates = vec![word.to_vec()];

    if system.branches() {
        // 의 밖의 ㅢ는 엔진이 이미 ㅣ로 읽으므로 "의"만 대상
        branch(&mut candidates, "vowel_to_i", hints.vowel_to_i, |w, p| {
            w.get(p)?.is(Initial::Ieung, Vowel::Yi, None).then_some(())?;
            respell_vowel(w, p, |v| (v == Vowel::Yi).then_some(Vowel::I))
        });
        branch(&mut candidates, "vowel_to_e", hints.vowel_to_e, |w, p| {
            respell_vowel(w, p, |v| (v == Vowel::Yi).then_some(Vowel::E))
        });
        branch(
            &mut candidates,
            "no_boundary_release",
            hints.no_boundary_release,
            drop_coda,
        );
        branch(&mut candidates, "s_variant", hints.s_variant, |w, p| {
            let syllable = w.get_mut(p).filter(|s| s.is_block())?;
            (syllable.coda == Coda::Final(Final::Sios)).then(|| {
                syllable.coda = Coda::Final(Final::Tikeut);
            })
        });
        branch(&mut candidates, "iotation", hints.iotation, |w, p| {
            respell_vowel(w, p, Vowel::iotated)
        });
        branch(&mut candidates, "yeo_reduction", hints.yeo_reduction, |w, p| {
            respell_vowel(w, p, Vowel::deiotated)
        });
    }

    for class in &VOWEL_CLASSES {
        if !class.systems.contains(&system) || !word.iter().any(|s| carries(s, class.vowel)) {
            continue;
        }
        let variants: Vec<Word> = candidates
            .iter()
            .map(|candidate| {
                candidate
                    .iter()
                    .map(|s| {
                        let mut s = *s;
                        if carries(&s, class.vowel) {
                            s.nucleus = Nucleus::Vowel(class.replacement);
                        }
                        s
                    })
                    .collect()
            })
            .collect();
        if class.front {
            let existing = std::mem::replace(&mut candidates, variants);
            candidates.extend(existing);
        } else {
            candidates.extend(variants);
        }
    }

    candidates
}

/// 모든 후보에 재표기를 적용해 새 후보를 뒤에 덧붙임
///
/// 대상 음절에 필요한 자모가 없는 후보는 건너뜁니다.
fn branch<F>(candidates: &mut Vec<Word>, option: &str, position: Option<i32>, respell: F)
where
    F: Fn(&mut Word, usize) -> Option<()>,
{
    let Some(position) = position.and_then(|p| usize::try_from(p).ok()) else {
        return;
    };
    let mut added = Vec::new();
    for candidate in candidates.iter() {
        let mut respelled = candidate.clone();
        if respell(&mut respelled, position).is_some() {
            added.push(respelled);
        } else {
            log::warn!("{} 힌트 무시: {}번째 음절에 해당 자모가 없습니다", option, position);
        }
    }
    candidates.extend(added);
}

fn respell_vowel(
    word: &mut Word,
    position: usize,
    change: impl Fn(Vowel) -> Option<Vowel>,
) -> Option<()> {
    let syllable = word.get_mut(position).filter(|s| s.is_block())?;
    let vowel = change(syllable.vowel()?)?;
    syllable.nucleus = Nucleus::Vowel(vowel);
    Some(())
}

/// 받침 탈락: 받침을 없애고 다음 음절의 예사소리 초성을 된소리로
fn drop_coda(word: &mut Word, position: usize) -> Option<()> {
    let has_coda = word
        .get(position)
        .is_some_and(|s| s.is_block() && matches!(s.coda, Coda::Final(_)));
    let next = word.get(position + 1).filter(|s| s.is_block())?;
    let tensed = next.initial.and_then(Initial::tensed)?;
    if !has_coda {
        return None;
    }
    word[position].coda = Coda::Empty;
    word[position + 1].initial = Some(tensed);
    Some(())
}

/// 예, 옛, 례, 롄은 모음 변이에서 제외
///
/// 변이 후보 판정뿐 아니라 치환에서도 빠집니다. 계예는 계예/게예가 됩니다.
fn is_exempt(syllable: &Syllable) -> bool {
    syllable.is(Initial::Ieung, Vowel::Ye, None)
        || syllable.is(Initial::Ieung, Vowel::Ye, Some(Final::Sios))
        || syllable.is(Initial::Rieul, Vowel::Ye, None)
        || syllable.is(Initial::Rieul, Vowel::Ye, Some(Final::Nieun))
}

fn carries(syllable: &Syllable, vowel: Vowel) -> bool {
    syllable.is_block() && syllable.vowel() == Some(vowel) && !is_exempt(syllable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::syllable::decompose_word;

    fn spell(word: &[Syllable]) -> String {
        word.iter().filter_map(Syllable::to_char).collect()
    }

    fn spellings(word: &str, system: System, hints: &RuleHints) -> Vec<String> {
        respellings(&decompose_word(word), system, hints)
            .iter()
            .map(|w| spell(w))
            .collect()
    }

    #[test]
    fn test_identity_first() {
        let out = spellings("한국어", System::Phonetic, &RuleHints::default());
        assert_eq!(out, vec!["한국어"]);
    }

    #[test]
    fn test_vowel_to_i_and_e() {
        let hints = RuleHints::new().with_vowel_to_i(3);
        assert_eq!(
            spellings("공산주의", System::Phonetic, &hints),
            vec!["공산주의", "공산주이"]
        );
        let hints = RuleHints::new().with_vowel_to_e(0);
        assert_eq!(spellings("의", System::Ipa, &hints), vec!["의", "에"]);
    }

    #[test]
    fn test_romanizations_do_not_branch() {
        let hints = RuleHints::new().with_vowel_to_e(0);
        assert_eq!(spellings("의", System::Revised, &hints), vec!["의"]);
        assert_eq!(spellings("외", System::Yale, &RuleHints::default()), vec!["외"]);
    }

    #[test]
    fn test_no_boundary_release() {
        let hints = RuleHints::new().with_no_boundary_release(1);
        assert_eq!(
            spellings("고춧가루", System::Phonetic, &hints),
            vec!["고춧가루", "고추까루"]
        );
    }

    #[test]
    fn test_hint_without_required_jamo_is_ignored() {
        // 두 번째 음절에 ㅢ가 없음
        let hints = RuleHints::new().with_vowel_to_i(1);
        assert_eq!(spellings("의사", System::Phonetic, &hints), vec!["의사"]);
        // 마지막 음절 뒤에는 된소리로 바꿀 초성이 없음
        let hints = RuleHints::new().with_no_boundary_release(1);
        assert_eq!(spellings("국밥", System::Phonetic, &hints), vec!["국밥"]);
    }

    #[test]
    fn test_branches_are_additive() {
        let hints = RuleHints::new().with_s_variant(0).with_iotation(1);
        assert_eq!(
            spellings("멋어", System::Phonetic, &hints),
            vec!["멋어", "먿어", "멋여", "먿여"]
        );
    }

    #[test]
    fn test_oe_variant_goes_first() {
        assert_eq!(
            spellings("외국", System::Phonetic, &RuleHints::default()),
            vec!["웨국", "외국"]
        );
    }

    #[test]
    fn test_ye_variant_and_exemptions() {
        assert_eq!(
            spellings("계산", System::Phonetic, &RuleHints::default()),
            vec!["계산", "게산"]
        );
        assert_eq!(spellings("예절", System::Phonetic, &RuleHints::default()), vec!["예절"]);
        assert_eq!(spellings("실례", System::Ipa, &RuleHints::default()), vec!["실례"]);
        // 다른 ㅖ가 후보를 만들어도 예는 그대로 남음
        assert_eq!(
            spellings("계예", System::Phonetic, &RuleHints::default()),
            vec!["계예", "게예"]
        );
    }

    #[test]
    fn test_vowel_to_i_only_on_standalone_ui() {
        // 희의 ㅢ는 이미 ㅣ로 읽히므로 같은 후보가 생기지 않음
        let hints = RuleHints::new().with_vowel_to_i(0);
        assert_eq!(spellings("희망", System::Phonetic, &hints), vec!["희망"]);
        // ㅔ 변이는 그대로 허용
        let hints = RuleHints::new().with_vowel_to_e(0);
        assert_eq!(spellings("희망", System::Phonetic, &hints), vec!["희망", "헤망"]);
    }

    #[test]
    fn test_wi_duplicate_for_ipa_only() {
        let hints = RuleHints::new().with_iotation(1);
        assert_eq!(
            spellings("뛰어들다", System::Ipa, &hints),
            vec!["뛰어들다", "뛰여들다", "뛰어들다", "뛰여들다"]
        );
        assert_eq!(
            spellings("뛰어들다", System::Phonetic, &hints),
            vec!["뛰어들다", "뛰여들다"]
        );
    }
}
