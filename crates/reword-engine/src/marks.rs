//! Speech markup: break markers for a downstream synthesizer.
//!
//! Cosmetic annotation over the final plain text; the rewrite pipeline never
//! consumes this output.

/// Insert a `<break/>` marker after every sentence boundary except the last.
#[must_use]
pub fn annotate_breaks(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(trimmed.len() + 16);
    let chars: Vec<char> = trimmed.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        out.push(*c);
        let boundary = matches!(c, '.' | '!' | '?' | '…')
            && chars.get(i + 1).is_some_and(|next| next.is_whitespace());
        if boundary {
            out.push_str(" <break/>");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_break_between_sentences() {
        let out = annotate_breaks("확인 부탁드립니다. 감사합니다.");
        assert_eq!(out, "확인 부탁드립니다. <break/> 감사합니다.");
    }

    #[test]
    fn no_break_after_final_sentence() {
        let out = annotate_breaks("확인 부탁드립니다.");
        assert_eq!(out, "확인 부탁드립니다.");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(annotate_breaks("   "), "");
    }

    #[test]
    fn handles_question_and_exclamation_boundaries() {
        let out = annotate_breaks("가능할까요? 네! 좋습니다.");
        assert_eq!(out, "가능할까요? <break/> 네! <break/> 좋습니다.");
    }
}
