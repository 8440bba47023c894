//! Audience-level transform: vocabulary complexity and formality by age
//! bracket.
//!
//! - child: short sentences, simplified verbs
//! - teen/adult: pass-through
//! - senior: slang stripped, readability normalized

use std::sync::LazyLock;

use regex::Regex;

use reword_core::text::{collapse_spaces, split_sentences};

use crate::context::StageContext;

type Rules = Vec<(Regex, &'static str)>;

fn build(pairs: &[(&str, &'static str)]) -> Rules {
    pairs
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
}

static CHILD: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        ("요청드립니다", "부탁해요"),
        ("부탁드립니다", "부탁해요"),
        ("주시기 바랍니다", "주세요"),
        ("검토", "확인"),
        ("회신", "답장"),
    ])
});

static SENIOR: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        (r"\b낼\b", "내일"),
        (r"\b담주\b", "다음 주"),
        ("ㅇㅋ", "알겠습니다"),
        ("ㄱㅅ", "감사합니다"),
        (r"\b넵\b", "네"),
        ("~", ""),
    ])
});

/// Keep at most this many sentences for young readers.
const CHILD_SENTENCE_CAP: usize = 2;

fn apply_rules(text: &str, rules: &Rules) -> String {
    let mut out = text.to_owned();
    for (pattern, replacement) in rules {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out
}

/// Stage 7 entry point.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    match ctx.audience.id {
        "child" => {
            let simplified = apply_rules(text, &CHILD);
            let sentences = split_sentences(&simplified);
            if sentences.len() > CHILD_SENTENCE_CAP {
                sentences[..CHILD_SENTENCE_CAP].join(" ")
            } else {
                simplified
            }
        }
        "senior" => collapse_spaces(&apply_rules(text, &SENIOR)),
        _ => text.to_owned(),
    }
}
