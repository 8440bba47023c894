//! Bilingual normalizer (stage 1) and language policy (stage 10).
//!
//! Both stages enforce the same contract over Latin-script spans; the policy
//! stage re-runs it last because intermediate stages may reintroduce or strip
//! foreign spans. The final repair pass delegates here as well.
//!
//! - `OFF`: no foreign script survives — spans are converted to Korean
//!   equivalents (lexicon hit) or the generic gloss, never silently deleted.
//! - `PAREN`: `한국어 (original)` — one parenthetical per span, never doubled.
//! - `TWOLINES`: Korean line, then the original foreign content on the next
//!   line — one gloss line per source line, never doubled.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use reword_core::text::collapse_spaces;
use reword_core::types::BilingualMode;

use crate::context::StageContext;

/// A run of Latin-script words (single spaces between them stay in the run).
static LATIN_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z][A-Za-z0-9'&.-]*(?: [A-Za-z][A-Za-z0-9'&.-]*)*").unwrap()
});

/// Parenthetical holding Latin content, e.g. `(draft)`.
static PAREN_GLOSS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([A-Za-z][^)]*\)").unwrap());

/// Gloss used for spans the lexicon does not know. Substitution, not
/// deletion: dropping a span without a replacement is a defect class.
const GENERIC_GLOSS: &str = "영문 표현";

/// Business-Korean lexicon for common embedded English terms.
static LEXICON: &[(&str, &str)] = &[
    ("asap", "최대한 빨리"),
    ("call", "전화"),
    ("check", "확인"),
    ("deadline", "마감"),
    ("draft", "초안"),
    ("email", "이메일"),
    ("feedback", "피드백"),
    ("file", "파일"),
    ("issue", "이슈"),
    ("manager", "매니저"),
    ("meeting", "회의"),
    ("memo", "메모"),
    ("ok", "알겠습니다"),
    ("project", "프로젝트"),
    ("report", "보고서"),
    ("review", "검토"),
    ("schedule", "일정"),
    ("team", "팀"),
    ("thanks", "감사합니다"),
    ("update", "업데이트"),
];

fn lexicon_word(word: &str) -> Option<&'static str> {
    let lowered = word.to_ascii_lowercase();
    LEXICON
        .iter()
        .find(|(en, _)| *en == lowered)
        .map(|(_, ko)| *ko)
}

/// Korean equivalent of a Latin span when every word is in the lexicon.
fn korean_gloss(span: &str) -> Option<String> {
    let words: Vec<&'static str> = span
        .split_whitespace()
        .map(lexicon_word)
        .collect::<Option<Vec<_>>>()?;
    Some(words.join(" "))
}

/// Korean equivalent, falling back to the generic gloss.
fn gloss_or_generic(span: &str) -> String {
    korean_gloss(span).unwrap_or_else(|| GENERIC_GLOSS.to_owned())
}

fn is_latin_only(s: &str) -> bool {
    let has_letter = s.chars().any(|c| c.is_ascii_alphabetic());
    has_letter && !s.chars().any(is_hangul)
}

fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
}

// ─────────────────────────────────────────────────────────────────────────────
// Stage entry points
// ─────────────────────────────────────────────────────────────────────────────

/// Stage 1: bring foreign spans into line with the bilingual mode.
#[must_use]
pub fn normalize(text: &str, ctx: &StageContext) -> String {
    if !ctx.korean {
        return text.to_owned();
    }
    match ctx.bilingual {
        BilingualMode::Off => convert_all(text),
        BilingualMode::Paren => gloss_paren(text),
        BilingualMode::TwoLines => gloss_two_lines(text),
    }
}

/// Stage 10 (and the final repair pass): re-enforce the contract after all
/// other stages, deduplicating any gloss attached twice.
#[must_use]
pub fn enforce_policy(text: &str, ctx: &StageContext) -> String {
    if !ctx.korean {
        return text.to_owned();
    }
    match ctx.bilingual {
        BilingualMode::Off => convert_all(text),
        BilingualMode::Paren => dedupe_parens(&gloss_paren(text)),
        BilingualMode::TwoLines => gloss_two_lines(text),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// OFF
// ─────────────────────────────────────────────────────────────────────────────

fn convert_all(text: &str) -> String {
    let replaced = LATIN_RUN.replace_all(text, |caps: &regex::Captures<'_>| {
        gloss_or_generic(&caps[0])
    });
    collapse_spaces(&replaced)
}

// ─────────────────────────────────────────────────────────────────────────────
// PAREN
// ─────────────────────────────────────────────────────────────────────────────

fn gloss_paren(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut seen: HashSet<String> = HashSet::new();

    for m in LATIN_RUN.find_iter(text) {
        let span = m.as_str();
        let key = span.to_ascii_lowercase();
        let prefix = &text[..m.start()];
        out.push_str(&text[cursor..m.start()]);
        cursor = m.end();

        if prefix.trim_end().ends_with('(') {
            // Already sits inside a parenthetical gloss.
            out.push_str(span);
            let _ = seen.insert(key);
        } else if seen.contains(&key) {
            // Repeated token: the gloss was already attached once.
            out.push_str(&gloss_or_generic(span));
        } else if prefix.trim_end().ends_with(gloss_or_generic(span).as_str()) {
            // The Korean gloss already precedes the span; just wrap it.
            out.push('(');
            out.push_str(span);
            out.push(')');
            let _ = seen.insert(key);
        } else {
            out.push_str(&gloss_or_generic(span));
            out.push_str(" (");
            out.push_str(span);
            out.push(')');
            let _ = seen.insert(key);
        }
    }
    out.push_str(&text[cursor..]);
    out
}

/// Remove repeated parentheticals carrying identical Latin content.
fn dedupe_parens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    let mut seen: HashSet<String> = HashSet::new();

    for m in PAREN_GLOSS.find_iter(text) {
        let content = m.as_str().trim_matches(['(', ')']).to_ascii_lowercase();
        if seen.insert(content) {
            continue;
        }
        // Duplicate: drop it along with the whitespace before it.
        out.push_str(text[cursor..m.start()].trim_end());
        cursor = m.end();
    }
    out.push_str(&text[cursor..]);
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// TWOLINES
// ─────────────────────────────────────────────────────────────────────────────

fn gloss_two_lines(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim_end();
        let trimmed = line.trim();
        if trimmed.is_empty() {
            out.push(String::new());
            continue;
        }

        if is_latin_only(trimmed) {
            // Duplicate of the gloss line just emitted?
            if out.last().map(String::as_str) == Some(trimmed) {
                continue;
            }
            // The gloss line belonging to the previous Korean line?
            let prev_holds_gloss = out
                .last()
                .is_some_and(|prev| prev.contains(gloss_or_generic(trimmed).as_str()));
            if prev_holds_gloss {
                out.push(trimmed.to_owned());
                continue;
            }
            // Standalone foreign line: Korean first, original beneath.
            out.push(gloss_or_generic(trimmed));
            out.push(trimmed.to_owned());
            continue;
        }

        let spans: Vec<&str> = LATIN_RUN.find_iter(line).map(|m| m.as_str()).collect();
        if spans.is_empty() {
            out.push(line.to_owned());
            continue;
        }

        let glossed = LATIN_RUN.replace_all(line, |caps: &regex::Captures<'_>| {
            let gloss = gloss_or_generic(&caps[0]);
            // The gloss is already in this line (a re-joined gloss line):
            // drop the span rather than doubling the Korean.
            if line.contains(gloss.as_str()) {
                String::new()
            } else {
                gloss
            }
        });
        out.push(collapse_spaces(&glossed));
        out.push(spans.join(" "));
    }

    out.join("\n")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StageContext;
    use reword_core::types::{LengthClass, MessageFormat, ResultOptions};

    fn ctx(mode: BilingualMode) -> StageContext<'static> {
        StageContext {
            tone: reword_catalog::tone("formal").unwrap(),
            purpose: reword_catalog::purpose("request").unwrap(),
            audience: reword_catalog::audience("adult").unwrap(),
            relationship: None,
            strength: 50,
            format: MessageFormat::Message,
            bilingual: mode,
            korean: true,
            length: LengthClass::Standard,
            options: ResultOptions::default(),
            original: "",
        }
    }

    // ── OFF ──────────────────────────────────────────────────────────────

    #[test]
    fn off_converts_known_terms() {
        let out = normalize("meeting 정리 부탁드립니다", &ctx(BilingualMode::Off));
        assert_eq!(out, "회의 정리 부탁드립니다");
    }

    #[test]
    fn off_never_deletes_unknown_spans() {
        let out = normalize("Xqzt 정리 부탁드립니다", &ctx(BilingualMode::Off));
        assert_eq!(out, "영문 표현 정리 부탁드립니다");
    }

    #[test]
    fn off_output_has_no_latin() {
        let out = normalize(
            "ASAP review 부탁드립니다 thanks",
            &ctx(BilingualMode::Off),
        );
        assert!(!out.chars().any(|c| c.is_ascii_alphabetic()), "{out}");
    }

    // ── PAREN ────────────────────────────────────────────────────────────

    #[test]
    fn paren_glosses_once() {
        let out = normalize("보고서 draft 검토 부탁드립니다", &ctx(BilingualMode::Paren));
        assert_eq!(out, "보고서 초안 (draft) 검토 부탁드립니다");
    }

    #[test]
    fn paren_is_idempotent() {
        let c = ctx(BilingualMode::Paren);
        let once = normalize("보고서 draft 검토 부탁드립니다", &c);
        let twice = enforce_policy(&once, &c);
        assert_eq!(once, twice);
    }

    #[test]
    fn paren_repeated_token_glossed_once() {
        let out = normalize("draft 확인 후 draft 전달 부탁드립니다", &ctx(BilingualMode::Paren));
        assert_eq!(out.matches("(draft)").count(), 1, "{out}");
        assert_eq!(out, "초안 (draft) 확인 후 초안 전달 부탁드립니다");
    }

    #[test]
    fn paren_does_not_double_existing_gloss() {
        let out = normalize("초안 (draft) 검토 부탁드립니다", &ctx(BilingualMode::Paren));
        assert_eq!(out, "초안 (draft) 검토 부탁드립니다");
    }

    #[test]
    fn paren_wraps_span_already_preceded_by_gloss() {
        let out = normalize("초안 draft 검토 부탁드립니다", &ctx(BilingualMode::Paren));
        assert_eq!(out, "초안 (draft) 검토 부탁드립니다");
    }

    #[test]
    fn dedupe_removes_doubled_parenthetical() {
        let c = ctx(BilingualMode::Paren);
        let out = enforce_policy("초안 (draft) (draft) 검토 부탁드립니다", &c);
        assert_eq!(out, "초안 (draft) 검토 부탁드립니다");
    }

    // ── TWOLINES ─────────────────────────────────────────────────────────

    #[test]
    fn two_lines_appends_foreign_line() {
        let out = normalize("내일 meeting 참석 부탁드립니다", &ctx(BilingualMode::TwoLines));
        assert_eq!(out, "내일 회의 참석 부탁드립니다\nmeeting");
    }

    #[test]
    fn two_lines_is_idempotent() {
        let c = ctx(BilingualMode::TwoLines);
        let once = normalize("내일 meeting 참석 부탁드립니다", &c);
        let twice = enforce_policy(&once, &c);
        assert_eq!(once, twice);
    }

    #[test]
    fn two_lines_unknown_span_is_idempotent() {
        let c = ctx(BilingualMode::TwoLines);
        let once = normalize("내일 Xqzt 참석 부탁드립니다", &c);
        assert_eq!(once, "내일 영문 표현 참석 부탁드립니다\nXqzt");
        let twice = enforce_policy(&once, &c);
        assert_eq!(once, twice);
    }

    #[test]
    fn two_lines_recovers_rejoined_gloss_line() {
        // Sentence-level processing can fold the gloss line back into the
        // Korean line; the policy must split it again without doubling the
        // Korean gloss.
        let c = ctx(BilingualMode::TwoLines);
        let out = enforce_policy("보고서 초안 검토 부탁드려요 draft", &c);
        assert_eq!(out, "보고서 초안 검토 부탁드려요\ndraft");
    }

    #[test]
    fn korean_only_text_is_untouched() {
        for mode in [BilingualMode::Off, BilingualMode::Paren, BilingualMode::TwoLines] {
            let out = normalize("회의 정리 부탁드립니다.", &ctx(mode));
            assert_eq!(out, "회의 정리 부탁드립니다.");
        }
    }

    #[test]
    fn non_korean_request_skips_bilingual_logic() {
        let mut c = ctx(BilingualMode::Off);
        c.korean = false;
        let out = normalize("please review the draft", &c);
        assert_eq!(out, "please review the draft");
    }
}
