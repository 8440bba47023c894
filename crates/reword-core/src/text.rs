//! Unicode-aware text utilities for the rewrite pipeline.
//!
//! Korean text makes byte-indexed truncation unsafe and byte budgets
//! meaningless, so every budget here is counted in chars and every cut lands
//! on a char boundary. Word-boundary truncation never splits a word.

/// Longest prefix of `s` containing at most `max_chars` chars.
#[must_use]
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Truncate `s` to at most `max_chars` chars, breaking on a word boundary
/// and appending `ellipsis` when anything was cut.
///
/// The returned string is at most `max_chars` chars including the ellipsis.
/// When the budget falls inside a word, the cut backs up to the previous
/// whitespace so no word is ever split. A single word longer than the whole
/// budget is hard-cut — the budget wins over the word in that degenerate
/// case.
#[must_use]
pub fn truncate_at_word(s: &str, max_chars: usize, ellipsis: &str) -> String {
    if s.chars().count() <= max_chars {
        return s.to_owned();
    }
    let body_budget = max_chars.saturating_sub(ellipsis.chars().count());
    let prefix = truncate_chars(s, body_budget);

    // Back up to a word boundary unless the cut already sits on one.
    let at_boundary = s[prefix.len()..]
        .chars()
        .next()
        .is_some_and(char::is_whitespace);
    let body = if at_boundary {
        prefix
    } else {
        match prefix.rfind(char::is_whitespace) {
            Some(idx) => &prefix[..idx],
            None => prefix,
        }
    };

    format!("{}{ellipsis}", body.trim_end())
}

/// Split text into sentences on sentence-final punctuation and newlines.
///
/// Punctuation stays attached to its sentence. Empty segments are dropped.
#[must_use]
pub fn split_sentences(s: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    for c in s.chars() {
        if c == '\n' {
            push_sentence(&mut sentences, &mut current);
            continue;
        }
        current.push(c);
        if matches!(c, '.' | '!' | '?' | '…') {
            push_sentence(&mut sentences, &mut current);
        }
    }
    push_sentence(&mut sentences, &mut current);
    sentences
}

fn push_sentence(out: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_owned());
    }
    current.clear();
}

/// Collapse runs of spaces/tabs into a single space and trim the ends.
#[must_use]
pub fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_gap = false;
    for c in s.chars() {
        if c == ' ' || c == '\t' {
            in_gap = true;
        } else {
            if in_gap && !out.is_empty() {
                out.push(' ');
            }
            in_gap = false;
            out.push(c);
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── truncate_chars ───────────────────────────────────────────────────

    #[test]
    fn chars_within_limit() {
        assert_eq!(truncate_chars("안녕하세요", 10), "안녕하세요");
    }

    #[test]
    fn chars_exact_limit() {
        assert_eq!(truncate_chars("안녕하세요", 5), "안녕하세요");
    }

    #[test]
    fn chars_truncated_korean() {
        assert_eq!(truncate_chars("안녕하세요 반갑습니다", 5), "안녕하세요");
    }

    #[test]
    fn chars_zero_max() {
        assert_eq!(truncate_chars("안녕", 0), "");
    }

    // ── truncate_at_word ─────────────────────────────────────────────────

    #[test]
    fn word_fit_is_unchanged() {
        assert_eq!(truncate_at_word("짧은 문장", 20, "…"), "짧은 문장");
    }

    #[test]
    fn word_cut_lands_on_boundary() {
        // budget 10, ellipsis 1 → body budget 9 ends on the space after
        // "보고서"; the trailing space is trimmed before the ellipsis.
        let out = truncate_at_word("내일까지 보고서 부탁드립니다", 10, "…");
        assert_eq!(out, "내일까지 보고서…");
    }

    #[test]
    fn word_cut_on_exact_space() {
        // body budget lands exactly on the space after "내일까지".
        let out = truncate_at_word("내일까지 보고서를 전달합니다", 5, "…");
        assert_eq!(out, "내일까지…");
    }

    #[test]
    fn single_overlong_word_hard_cuts() {
        let out = truncate_at_word("가나다라마바사아자차", 5, "…");
        assert_eq!(out, "가나다라…");
    }

    #[test]
    fn never_exceeds_budget() {
        let out = truncate_at_word("하나 둘 셋 넷 다섯 여섯 일곱", 8, "…");
        assert!(out.chars().count() <= 8, "got {} chars: {out}", out.chars().count());
        assert!(out.ends_with('…'));
    }

    proptest! {
        #[test]
        fn prop_budget_always_respected(
            words in proptest::collection::vec("[가-힣]{1,4}", 1..12),
            budget in 6usize..40,
        ) {
            let text = words.join(" ");
            let out = truncate_at_word(&text, budget, "…");
            // Either the text fit untouched or the budget holds.
            prop_assert!(out == text || out.chars().count() <= budget);
        }

        #[test]
        fn prop_no_word_is_split(
            words in proptest::collection::vec("[가-힣]{1,5}", 2..10),
            budget in 7usize..30,
        ) {
            let text = words.join(" ");
            let out = truncate_at_word(&text, budget, "…");
            let body = out.trim_end_matches('…');
            // Every word in the output must be a whole word of the input.
            for word in body.split_whitespace() {
                prop_assert!(words.iter().any(|w| w == word), "split word: {word}");
            }
        }
    }

    // ── split_sentences ──────────────────────────────────────────────────

    #[test]
    fn splits_on_terminal_punctuation() {
        let out = split_sentences("안녕하세요. 회의 자료입니다! 확인 부탁드려요?");
        assert_eq!(
            out,
            vec!["안녕하세요.", "회의 자료입니다!", "확인 부탁드려요?"]
        );
    }

    #[test]
    fn splits_on_newlines() {
        let out = split_sentences("첫 줄\n둘째 줄");
        assert_eq!(out, vec!["첫 줄", "둘째 줄"]);
    }

    #[test]
    fn trailing_fragment_kept() {
        let out = split_sentences("확인했습니다. 감사합니다");
        assert_eq!(out, vec!["확인했습니다.", "감사합니다"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(split_sentences("   ").is_empty());
    }

    // ── collapse_spaces ──────────────────────────────────────────────────

    #[test]
    fn collapses_runs() {
        assert_eq!(collapse_spaces("안녕  하세요   반가워요"), "안녕 하세요 반가워요");
    }

    #[test]
    fn trims_ends() {
        assert_eq!(collapse_spaces("  안녕 "), "안녕");
    }
}
