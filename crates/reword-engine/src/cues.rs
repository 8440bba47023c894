//! Cue detection over the original input.
//!
//! The length stage and the context-integrity repair both gate on these:
//! a deadline clause may only exist in output when the original carried a
//! temporal cue, and a sanction clause only when it carried a consequence
//! cue. Centralizing the patterns keeps the two sides of that contract in
//! agreement.

use std::sync::LazyLock;

use regex::Regex;

/// Temporal expressions: dates, relative days, clock times, deadline words.
static TEMPORAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"까지|내일|오늘|모레|이번\s*주|다음\s*주|금주|월요일|화요일|수요일|목요일|금요일|토요일|일요일|[0-9]+\s*일|[0-9]+\s*시|오전|오후|마감|기한|조속히",
    )
    .unwrap()
});

/// Sanction/consequence expressions.
static CONSEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"불이익|조치|제재|페널티|위약|책임|법적|배상|손해|환불|신고").unwrap()
});

/// Vague-referent expressions that make a request ambiguous.
static AMBIGUITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"그거|저거|이거|그것|저것|알아서|적당히|대충").unwrap());

/// Whether `text` contains a temporal cue (date/relative-time/deadline).
#[must_use]
pub fn has_temporal_cue(text: &str) -> bool {
    TEMPORAL.is_match(text)
}

/// Whether `text` contains a sanction/consequence cue.
#[must_use]
pub fn has_consequence_cue(text: &str) -> bool {
    CONSEQUENCE.is_match(text)
}

/// Whether `text` leaves its object ambiguous.
#[must_use]
pub fn has_ambiguity_cue(text: &str) -> bool {
    AMBIGUITY.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_words_are_temporal() {
        assert!(has_temporal_cue("내일까지 보고서 부탁드립니다"));
        assert!(has_temporal_cue("금요일 오전 중으로 전달해 주세요"));
        assert!(has_temporal_cue("3일 안에 회신 바랍니다"));
        assert!(has_temporal_cue("마감이 얼마 안 남았습니다"));
    }

    #[test]
    fn plain_requests_have_no_temporal_cue() {
        assert!(!has_temporal_cue("회의 정리 부탁드립니다"));
        assert!(!has_temporal_cue("보고서 검토 부탁드립니다"));
    }

    #[test]
    fn sanction_words_are_consequences() {
        assert!(has_consequence_cue("시정되지 않으면 법적 조치를 검토하겠습니다"));
        assert!(has_consequence_cue("환불을 요청합니다"));
        assert!(!has_consequence_cue("회의 정리 부탁드립니다"));
    }

    #[test]
    fn vague_referents_are_ambiguous() {
        assert!(has_ambiguity_cue("그거 알아서 처리해 주세요"));
        assert!(!has_ambiguity_cue("회의록 정리를 부탁드립니다"));
    }
}
