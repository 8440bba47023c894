//! Context integrity pass: the hard backstop for the anti-hallucination
//! invariant.
//!
//! The length stage only *adds* clauses under cue gating; this pass removes
//! any deadline or sanction sentence that survived without a matching cue in
//! the original input, wherever it came from.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use reword_core::text::split_sentences;

use crate::context::StageContext;
use crate::cues;

static DEADLINE_PHRASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"기한|마감|까지").unwrap());

static SANCTION_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"조치|불이익|제재|책임|법적|배상|손해").unwrap());

/// Repair pass 2 entry point.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    let drop_deadlines = !cues::has_temporal_cue(ctx.original);
    let drop_sanctions = !cues::has_consequence_cue(ctx.original);
    if !drop_deadlines && !drop_sanctions {
        return text.to_owned();
    }

    let sentences = split_sentences(text);
    let kept: Vec<String> = sentences
        .iter()
        .filter(|sentence| {
            if drop_deadlines && DEADLINE_PHRASE.is_match(sentence) {
                debug!(sentence = %sentence, "dropped uncued deadline sentence");
                return false;
            }
            if drop_sanctions && SANCTION_PHRASE.is_match(sentence) {
                debug!(sentence = %sentence, "dropped uncued sanction sentence");
                return false;
            }
            true
        })
        .cloned()
        .collect();

    if kept.len() == sentences.len() {
        // Nothing removed: keep the candidate byte-for-byte.
        return text.to_owned();
    }
    kept.join(" ")
}
