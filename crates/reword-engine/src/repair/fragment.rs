//! Particle fragment pass: a candidate reduced to a bare particle (or to
//! nothing at all) is not a sentence and must be rebuilt.
//!
//! The rebuilt sentence is seeded from the first sentence of the original
//! input so the repair can never introduce content the user did not write.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use reword_core::text::split_sentences;

use crate::context::StageContext;

static PARTICLE_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:은|는|이|가|을|를|에|에게|께|도|만|와|과|로|으로)[\s.…!?~]*$").unwrap()
});

fn is_fragment(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || PARTICLE_ONLY.is_match(trimmed)
}

/// Repair pass 4 entry point.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    if !is_fragment(text) {
        return text.to_owned();
    }

    let seed = split_sentences(ctx.original)
        .into_iter()
        .next()
        .unwrap_or_default();
    let seed = seed.trim_end_matches(['.', '!', '?', '…']).trim_end();
    if seed.is_empty() {
        return String::new();
    }
    debug!("rebuilt fragment candidate from original input");
    format!("{seed} 관련하여 아래 내용을 참고해 주시기 바랍니다.")
}
