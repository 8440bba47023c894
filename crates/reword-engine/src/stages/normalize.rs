//! Input normalizer: strips informal filler and rewrites casual imperatives
//! into the canonical request phrase for the tone's register class.
//!
//! Later stages (purpose template, tone transform, soft request) assume this
//! canonicalization has already happened.

use std::sync::LazyLock;

use regex::Regex;

use reword_core::text::collapse_spaces;

use crate::context::StageContext;

/// Filler/throat-clearing tokens that carry no content.
static FILLERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"그냥\s*|아무튼\s*|암튼\s*|뭐랄까\s*|어쨌든\s*").unwrap());

/// Bare imperative request forms ("just do it" register). Word-final only,
/// so connective forms like 해줘서 stay untouched.
static CASUAL_IMPERATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:해\s?줘|해라|하셈|해\s?버려|해주라)\b").unwrap());

/// Bare "give/do for me" tail without the verb stem. Word-final only.
static BARE_GIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"줘라?\b").unwrap());

/// "whatever" register.
static WHATEVER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"아무거나|맘대로").unwrap());

/// Stage 2 entry point.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    let canonical_request = if ctx.formal_locked() {
        "해 주시기 바랍니다"
    } else {
        "해 주세요"
    };
    let canonical_give = if ctx.formal_locked() {
        "주시기 바랍니다"
    } else {
        "주세요"
    };

    let out = FILLERS.replace_all(text, "");
    let out = CASUAL_IMPERATIVE.replace_all(&out, canonical_request);
    let out = BARE_GIVE.replace_all(&out, canonical_give);
    let out = WHATEVER.replace_all(&out, "편하신 것으로");
    collapse_spaces(&out)
}
