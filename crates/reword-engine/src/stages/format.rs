//! Format transform: message vs email phrase endings.
//!
//! A register dial independent of tone — formal-locked tones get their
//! register restored by the repair chain even when the message format pulls
//! endings toward contracted forms.

use std::sync::LazyLock;

use regex::Regex;

use reword_core::types::MessageFormat;

use crate::context::StageContext;

type Rules = Vec<(Regex, &'static str)>;

fn build(pairs: &[(&str, &'static str)]) -> Rules {
    pairs
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
}

static MESSAGE: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        ("주시기 바랍니다", "주세요"),
        ("하십시오", "하세요"),
        ("부탁드립니다", "부탁드려요"),
        ("요청드립니다", "요청드려요"),
        ("말씀드립니다", "말씀드려요"),
        ("입니다", "이에요"),
    ])
});

static EMAIL: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        ("해 주세요", "해 주시기 바랍니다"),
        ("주세요", "주시기 바랍니다"),
        ("할게요", "하겠습니다"),
        ("이에요", "입니다"),
        ("드려요", "드립니다"),
        ("해요", "합니다"),
    ])
});

/// Stage 5 entry point.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    let rules = match ctx.format {
        MessageFormat::Message => &MESSAGE,
        MessageFormat::Email => &EMAIL,
    };
    let mut out = text.to_owned();
    for (pattern, replacement) in rules.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }

    // Emails close with thanks when nothing of the sort is present yet.
    if ctx.format == MessageFormat::Email && !out.contains("감사") && !out.contains("고마") {
        let trimmed = out.trim_end();
        if !trimmed.is_empty() {
            let base = if trimmed.ends_with(['.', '!', '?', '…']) {
                trimmed.to_owned()
            } else {
                format!("{trimmed}.")
            };
            out = format!("{base} 감사합니다.");
        }
    }
    out
}
