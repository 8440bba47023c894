//! Length policy: realizes the short/standard/long contract for the run's
//! length class.
//!
//! Every optional clause is gated on a cue in the *original* input — the
//! pipeline must never invent a deadline or a consequence. The one exception
//! is the contact invitation, which asserts no fact and is always
//! permissible for the long class.

use reword_core::text::{split_sentences, truncate_at_word};
use reword_core::types::LengthClass;

use crate::context::StageContext;
use crate::cues;

/// Character budget for the short class (ellipsis included).
pub const SHORT_BUDGET: usize = 50;

const ELLIPSIS: &str = "…";

fn join_first(sentences: &[String], n: usize) -> String {
    sentences[..sentences.len().min(n)].join(" ")
}

fn append_sentence(base: &str, clause: &str) -> String {
    let trimmed = base.trim_end();
    if trimmed.is_empty() {
        return clause.to_owned();
    }
    if trimmed.ends_with(['.', '!', '?', '…']) {
        format!("{trimmed} {clause}")
    } else {
        format!("{trimmed}. {clause}")
    }
}

fn short(text: &str) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return text.to_owned();
    }

    // Take whole sentences while they fit the budget.
    let mut kept = String::new();
    let mut taken = 0;
    for sentence in &sentences {
        let candidate = if kept.is_empty() {
            sentence.clone()
        } else {
            format!("{kept} {sentence}")
        };
        if candidate.chars().count() <= SHORT_BUDGET {
            kept = candidate;
            taken += 1;
        } else {
            break;
        }
    }
    if kept.is_empty() {
        // First sentence alone exceeds the budget: word-boundary truncation.
        return truncate_at_word(&sentences[0], SHORT_BUDGET, ELLIPSIS);
    }
    if taken < sentences.len() {
        return mark_elided(&kept);
    }
    kept
}

/// Dropped whole sentences are still a truncation: the cut is marked with an
/// ellipsis in place of the final stop, without breaking the budget.
fn mark_elided(kept: &str) -> String {
    let trimmed = kept.trim_end().trim_end_matches(['.', '!', '?', '…']);
    let marked = format!("{trimmed}{ELLIPSIS}");
    if marked.chars().count() <= SHORT_BUDGET {
        marked
    } else {
        truncate_at_word(kept, SHORT_BUDGET, ELLIPSIS)
    }
}

fn standard(text: &str, ctx: &StageContext) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return text.to_owned();
    }
    let mut out = join_first(&sentences, 2);
    if cues::has_temporal_cue(ctx.original) && !cues::has_temporal_cue(&out) {
        out = append_sentence(&out, "기한까지 처리해 주시면 감사하겠습니다.");
    }
    out
}

fn long(text: &str, ctx: &StageContext) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return text.to_owned();
    }
    let mut out = join_first(&sentences, 3);

    if ctx.options.auto_include_details && !out.contains("다름이 아니라") {
        out = format!("다름이 아니라 말씀드릴 내용이 있어 연락드립니다. {out}");
    }
    if cues::has_temporal_cue(ctx.original) && !cues::has_temporal_cue(&out) {
        out = append_sentence(&out, "말씀하신 기한 안에 처리해 주시면 감사하겠습니다.");
    }
    if cues::has_consequence_cue(ctx.original) && !out.contains("별도로 안내") {
        out = append_sentence(&out, "이후 진행될 조치는 별도로 안내드리겠습니다.");
    }
    if !out.contains("연락 주") {
        out = append_sentence(&out, "궁금한 점이 있으시면 언제든지 연락 주세요.");
    }
    out
}

/// Stage 9 entry point.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    match ctx.length {
        LengthClass::Short => short(text),
        LengthClass::Standard => standard(text, ctx),
        LengthClass::Long => long(text, ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StageContext;
    use reword_core::types::{BilingualMode, MessageFormat, ResultOptions};

    fn ctx(length: LengthClass, original: &str) -> StageContext<'_> {
        StageContext {
            tone: reword_catalog::tone("formal").unwrap(),
            purpose: reword_catalog::purpose("request").unwrap(),
            audience: reword_catalog::audience("adult").unwrap(),
            relationship: None,
            strength: 50,
            format: MessageFormat::Message,
            bilingual: BilingualMode::Off,
            korean: true,
            length,
            options: ResultOptions::default(),
            original,
        }
    }

    #[test]
    fn short_keeps_whole_sentences_within_budget() {
        let text = "확인 부탁드립니다. 두 번째 문장은 길어서 들어가지 않아도 됩니다만 첫 문장은 유지됩니다.";
        let out = apply(text, &ctx(LengthClass::Short, text));
        assert_eq!(out, "확인 부탁드립니다…");
    }

    #[test]
    fn short_without_truncation_has_no_ellipsis() {
        let text = "확인 부탁드립니다.";
        let out = apply(text, &ctx(LengthClass::Short, text));
        assert_eq!(out, "확인 부탁드립니다.");
    }

    #[test]
    fn short_marks_dropped_sentences_within_budget() {
        // Every kept sentence fits, one is dropped: the ellipsis replaces the
        // final stop and the bound still holds.
        let text =
            "내일 회의 자료를 준비해 두었습니다. 목차도 같이 정리했습니다. 셋째 문장은 너무 길어서 오십 글자 제한에 밀려납니다.";
        let out = apply(text, &ctx(LengthClass::Short, text));
        assert!(out.ends_with('…'), "{out}");
        assert!(out.chars().count() <= SHORT_BUDGET, "{out}");
        assert!(out.contains("목차도"), "{out}");
        assert!(!out.contains("셋째"), "{out}");
    }

    #[test]
    fn short_never_exceeds_budget() {
        let text = "이 문장은 일부러 아주 길게 작성해서 오십 글자 제한을 확실히 넘기도록 만든 예시 문장이며 계속 이어집니다";
        let out = apply(text, &ctx(LengthClass::Short, text));
        assert!(out.chars().count() <= SHORT_BUDGET);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn standard_keeps_two_sentences() {
        let text = "첫 문장입니다. 둘째 문장입니다. 셋째 문장입니다.";
        let out = apply(text, &ctx(LengthClass::Standard, text));
        assert_eq!(out, "첫 문장입니다. 둘째 문장입니다.");
    }

    #[test]
    fn standard_appends_deadline_only_with_original_cue() {
        // Original carries "내일까지" but the candidate lost it.
        let out = apply(
            "보고서 전달 부탁드립니다.",
            &ctx(LengthClass::Standard, "내일까지 보고서 부탁해"),
        );
        assert!(out.contains("기한까지"), "{out}");

        // No temporal cue in the original: nothing may be appended.
        let out = apply(
            "보고서 전달 부탁드립니다.",
            &ctx(LengthClass::Standard, "보고서 부탁해"),
        );
        assert!(!out.contains("기한"), "{out}");
    }

    #[test]
    fn standard_does_not_duplicate_retained_deadline() {
        let text = "내일까지 보고서 전달 부탁드립니다.";
        let out = apply(text, &ctx(LengthClass::Standard, text));
        assert_eq!(out, "내일까지 보고서 전달 부탁드립니다.");
    }

    #[test]
    fn long_contact_clause_is_always_permissible() {
        let text = "회의 정리 부탁드립니다.";
        let out = apply(text, &ctx(LengthClass::Long, text));
        assert!(out.contains("연락 주세요"), "{out}");
        assert!(!out.contains("기한"), "{out}");
        assert!(!out.contains("조치"), "{out}");
    }

    #[test]
    fn long_background_framing_gated_on_option() {
        let text = "회의 정리 부탁드립니다.";
        let mut c = ctx(LengthClass::Long, text);
        c.options.auto_include_details = true;
        let out = apply(text, &c);
        assert!(out.starts_with("다름이 아니라"), "{out}");
    }

    #[test]
    fn long_next_steps_gated_on_consequence_cue() {
        let original = "기한을 어기면 불이익이 있다고 전달해 주세요.";
        let out = apply(
            "기한 준수 요청을 전달드립니다.",
            &ctx(LengthClass::Long, original),
        );
        assert!(out.contains("별도로 안내"), "{out}");
    }
}
