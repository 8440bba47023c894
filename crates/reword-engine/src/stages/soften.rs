//! Soft-request transform: directive phrasing becomes a softened
//! interrogative/conditional request form.
//!
//! Idempotent — text already carrying a softened form is left alone. The
//! softened target tracks the register: firm/antagonistic tones land on the
//! deferential imperative, other formal-locked tones on the conditional
//! gratitude form, casual tones on the polite interrogative.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::StageContext;

type Rules = Vec<(Regex, &'static str)>;

fn build(pairs: &[(&str, &'static str)]) -> Rules {
    pairs
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
}

/// Firm registers: bare directives become the deferential imperative.
static FIRM_TARGET: LazyLock<Rules> =
    LazyLock::new(|| build(&[(r"주세요[.!]?", "주시기 바랍니다.")]));

/// Formal registers: directives become the conditional gratitude form.
static FORMAL_TARGET: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        (r"해 주시기 바랍니다[.!]?", "해 주시면 감사하겠습니다."),
        (r"주시기 바랍니다[.!]?", "주시면 감사하겠습니다."),
        (r"주세요[.!]?", "주시면 감사하겠습니다."),
    ])
});

/// Casual registers: directives become the polite interrogative.
static CASUAL_TARGET: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        (r"해 주세요[.!]?", "해 주실 수 있을까요?"),
        (r"주세요[.!]?", "주실 수 있을까요?"),
    ])
});

/// Markers meaning the text is already in a softened form.
static SOFTENED: &[&str] = &["있을까요", "주시겠어요", "주시면 감사하겠습니다"];

/// Stage 8 entry point.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    if SOFTENED.iter().any(|marker| text.contains(marker)) {
        return text.to_owned();
    }

    let rules = match ctx.tone.id {
        "firm" | "warning" | "protest" => &FIRM_TARGET,
        _ if ctx.formal_locked() => &FORMAL_TARGET,
        _ => &CASUAL_TARGET,
    };

    let mut out = text.to_owned();
    for (pattern, replacement) in rules.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out
}
