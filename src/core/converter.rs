//! 한글 -> 발음/로마자 통합 변환기
//!
//! 입력에서 한글 구간을 찾아 구간마다 후보 생성, 경계 규칙, 후처리를 거친 뒤
//! 원래 자리에 되돌려 놓습니다. 한글이 아닌 글자는 그대로 유지됩니다.

use crate::config::RuleHints;
use crate::core::syllable::decompose_word;
use crate::core::unicode::is_span_char;
use crate::core::{engine, realizer, variants};
use crate::data::PhonologyTables;
use crate::error::RomanizeError;
use crate::system::System;

/// 마크업 문자 (", #, $, %)
const MARKUP: [char; 4] = ['"', '#', '$', '%'];

/// 입력 조각
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'t> {
    /// 그대로 통과
    Text(&'t str),
    /// 변환 대상 한글 구간
    Word(&'t str),
}

/// 음운표를 묶은 변환기
#[derive(Debug, Clone, Copy)]
pub struct Romanizer<'a> {
    tables: &'a PhonologyTables,
}

impl Romanizer<'static> {
    /// 내장 음운표 사용
    pub fn new() -> Result<Self, RomanizeError> {
        Ok(Self {
            tables: PhonologyTables::builtin()?,
        })
    }
}

impl<'a> Romanizer<'a> {
    /// 별도로 로드한 음운표 사용
    pub fn with_tables(tables: &'a PhonologyTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'a PhonologyTables {
        self.tables
    }

    /// 텍스트 변환
    ///
    /// 힌트 위치는 각 한글 구간 안에서의 음절 위치입니다. 같은 힌트가 모든 구간에
    /// 적용되고 구간마다 따로 검사되므로, `"한국어, 가"`에 위치 2를 주면 두 번째
    /// 구간(길이 1)에서 [`RomanizeError::InvalidHint`]가 납니다.
    /// 구간 하나라도 실패하면 부분 결과 없이 에러를 반환합니다.
    pub fn romanize(
        &self,
        text: &str,
        system: System,
        hints: &RuleHints,
    ) -> Result<String, RomanizeError> {
        let text = strip_markup(text);
        let mut out = String::with_capacity(text.len() * 2);
        for segment in split_spans(&text) {
            match segment {
                Segment::Text(s) => out.push_str(s),
                Segment::Word(word) => out.push_str(&self.romanize_word(word, system, hints)?),
            }
        }
        Ok(out)
    }

    /// 한글 구간 하나 변환 (후보들을 체계의 구분자로 이음)
    pub fn romanize_word(
        &self,
        word: &str,
        system: System,
        hints: &RuleHints,
    ) -> Result<String, RomanizeError> {
        let syllables = decompose_word(word);
        hints.validate(syllables.len())?;

        let candidates = variants::respellings(&syllables, system, hints);
        log::debug!("{} [{}] 후보 {}개", word, system, candidates.len());

        let mut renderings = Vec::with_capacity(candidates.len());
        for candidate in &candidates {
            let tokens = engine::realize(candidate, system, hints, self.tables)?;
            renderings.push(realizer::assemble(&tokens, system, hints.capitalize, word));
        }

        let joined = renderings.join(system.separator());
        Ok(match system {
            System::Ipa => realizer::tidy_ipa(&joined),
            _ => joined,
        })
    }
}

/// 내장 음운표로 텍스트 변환
pub fn romanize(text: &str, system: System, hints: &RuleHints) -> Result<String, RomanizeError> {
    Romanizer::new()?.romanize(text, system, hints)
}

/// 마크업 제거: 마크업 문자 바로 뒤에 줄바꿈이 아닌 글자가 있으면 마크업 문자를 지움
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if MARKUP.contains(&c) {
            if let Some(&next) = chars.peek() {
                if next != '\n' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

fn is_edge(c: char) -> bool {
    c == ' ' || c == '\''
}

/// 한글 구간 분리
///
/// 한글·공백·아포스트로피가 이어진 구간에서 앞뒤 공백과 아포스트로피를 떼어낸
/// 나머지가 변환 대상입니다.
fn split_spans(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let run_end = rest.find(|c: char| !is_span_char(c)).unwrap_or(rest.len());
        if run_end == 0 {
            let text_end = rest.find(is_span_char).unwrap_or(rest.len());
            segments.push(Segment::Text(&rest[..text_end]));
            rest = &rest[text_end..];
            continue;
        }

        let run = &rest[..run_end];
        let start = run.len() - run.trim_start_matches(is_edge).len();
        let end = run.trim_end_matches(is_edge).len();
        if start >= end {
            segments.push(Segment::Text(run));
        } else {
            if start > 0 {
                segments.push(Segment::Text(&run[..start]));
            }
            segments.push(Segment::Word(&run[start..end]));
            if end < run.len() {
                segments.push(Segment::Text(&run[end..]));
            }
        }
        rest = &rest[run_end..];
    }
    segments
}
