//! Style consistency pass: a single variant must not mix deferential and
//! casual sentence endings.
//!
//! When a mix is detected the whole candidate is pulled toward the register
//! the tone's formality class requires: formal-locked tones unify upward,
//! everything else unifies downward to the polite casual register.

use std::sync::LazyLock;

use regex::Regex;

use reword_core::text::split_sentences;

use crate::context::StageContext;
use crate::repair::formality;

static FORMAL_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(니다|십시오)[\s.!?…~]*$").unwrap());

static INFORMAL_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(요|죠|야|해|줘)[\s.!?…~]*$").unwrap());

type Rules = Vec<(Regex, &'static str)>;

static CASUALIZE: LazyLock<Rules> = LazyLock::new(|| {
    [
        ("해 주시기 바랍니다", "해 주세요"),
        ("주시기 바랍니다", "주세요"),
        ("감사합니다", "고마워요"),
        ("죄송합니다", "미안해요"),
        ("부탁드립니다", "부탁드려요"),
        ("요청드립니다", "요청드려요"),
        ("말씀드립니다", "말씀드려요"),
        ("드리겠습니다", "드릴게요"),
        ("하겠습니다", "할게요"),
        ("드립니다", "드려요"),
        ("입니다", "이에요"),
        ("합니다", "해요"),
        ("됩니다", "돼요"),
        ("습니다", "어요"),
    ]
    .iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
    .collect()
});

fn casualize(text: &str) -> String {
    let mut out = text.to_owned();
    for (pattern, replacement) in CASUALIZE.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out
}

/// Register of the candidate's last register-bearing sentence. Lines that
/// carry no Korean ending (a two-line gloss, a lone Latin span) are skipped.
pub(crate) fn ends_formal(text: &str) -> bool {
    split_sentences(text)
        .iter()
        .rev()
        .find_map(|sentence| {
            if FORMAL_END.is_match(sentence) {
                Some(true)
            } else if INFORMAL_END.is_match(sentence) {
                Some(false)
            } else {
                None
            }
        })
        .unwrap_or(false)
}

fn is_mixed(text: &str) -> bool {
    let mut formal = false;
    let mut informal = false;
    for sentence in split_sentences(text) {
        if FORMAL_END.is_match(&sentence) {
            formal = true;
        } else if INFORMAL_END.is_match(&sentence) {
            informal = true;
        }
    }
    formal && informal
}

/// Repair pass 1 entry point.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    if !is_mixed(text) {
        return text.to_owned();
    }
    if ctx.formal_locked() {
        formality::formalize(text)
    } else {
        casualize(text)
    }
}
