//! Formality consistency pass: formal-locked tones must end every sentence
//! in the deferential register.
//!
//! The replacement table is ordered longest-match-first so `해 주세요` is
//! rewritten as a unit before the bare `주세요` rule can split it.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::StageContext;

type Rules = Vec<(Regex, &'static str)>;

static FORMALIZE: LazyLock<Rules> = LazyLock::new(|| {
    [
        ("해 주세요", "해 주시기 바랍니다"),
        ("주세요", "주시기 바랍니다"),
        ("고마워요", "감사합니다"),
        ("고마워", "감사합니다"),
        ("미안해요", "죄송합니다"),
        ("미안해", "죄송합니다"),
        ("부탁드려요", "부탁드립니다"),
        ("요청드려요", "요청드립니다"),
        ("말씀드려요", "말씀드립니다"),
        ("드릴게요", "드리겠습니다"),
        ("드려요", "드립니다"),
        ("할게요", "하겠습니다"),
        ("바라요", "바랍니다"),
        ("거예요", "것입니다"),
        ("이에요", "입니다"),
        ("예요", "입니다"),
        ("해요", "합니다"),
        ("돼요", "됩니다"),
        ("어요", "습니다"),
    ]
    .iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
    .collect()
});

/// Rewrite every casual ending in `text` to its deferential counterpart.
#[must_use]
pub fn formalize(text: &str) -> String {
    let mut out = text.to_owned();
    for (pattern, replacement) in FORMALIZE.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out
}

/// Repair pass 3 entry point. Non-locked tones are left alone; the general
/// style pass already unified their register.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    if !ctx.formal_locked() {
        return text.to_owned();
    }
    formalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StageContext;
    use reword_core::types::{BilingualMode, LengthClass, MessageFormat, ResultOptions};

    fn ctx(tone: &str) -> StageContext<'static> {
        StageContext {
            tone: reword_catalog::tone(tone).unwrap(),
            purpose: reword_catalog::purpose("request").unwrap(),
            audience: reword_catalog::audience("adult").unwrap(),
            relationship: None,
            strength: 50,
            format: MessageFormat::Message,
            bilingual: BilingualMode::Off,
            korean: true,
            length: LengthClass::Standard,
            options: ResultOptions::default(),
            original: "",
        }
    }

    #[test]
    fn locked_tone_formalizes_casual_endings() {
        let out = apply("자료를 보내 주세요. 검토는 제가 할게요.", &ctx("formal"));
        assert_eq!(out, "자료를 보내 주시기 바랍니다. 검토는 제가 하겠습니다.");
    }

    #[test]
    fn unlocked_tone_is_untouched() {
        let text = "자료를 보내 주세요. 검토는 제가 할게요.";
        assert_eq!(apply(text, &ctx("casual")), text);
    }

    #[test]
    fn longest_rule_wins_over_bare_directive() {
        assert_eq!(formalize("확인해 주세요."), "확인해 주시기 바랍니다.");
    }

    #[test]
    fn apology_endings_are_formalized() {
        let out = apply("늦어서 미안해요. 내일 꼭 드릴게요.", &ctx("apology"));
        assert_eq!(out, "늦어서 죄송합니다. 내일 꼭 드리겠습니다.");
    }

    #[test]
    fn idempotent_on_formal_text() {
        let text = "자료를 보내 주시기 바랍니다.";
        assert_eq!(apply(text, &ctx("firm")), text);
    }
}
