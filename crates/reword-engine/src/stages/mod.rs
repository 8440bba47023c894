//! Transformation stages, applied in a fixed order.
//!
//! Each stage is a pure `(text, &StageContext) -> String` function. Order
//! matters: later stages assume the canonical phrasing left by earlier ones
//! (e.g. the tone transform relies on the input normalizer having already
//! rewritten casual imperatives into canonical request forms).

pub mod audience;
pub mod bilingual;
pub mod format;
pub mod length;
pub mod normalize;
pub mod purpose;
pub mod relationship;
pub mod soften;
pub mod tone;

use tracing::trace;

use crate::context::StageContext;

/// A single transformation stage.
pub type StageFn = fn(&str, &StageContext) -> String;

/// The ordered stage list. Changing this order changes semantics.
pub static STAGES: &[(&str, StageFn)] = &[
    ("bilingual_normalizer", bilingual::normalize),
    ("input_normalizer", normalize::apply),
    ("purpose_template", purpose::apply),
    ("tone_transform", tone::apply),
    ("format_transform", format::apply),
    ("relationship_transform", relationship::apply),
    ("audience_transform", audience::apply),
    ("soft_request", soften::apply),
    ("length_policy", length::apply),
    ("language_policy", bilingual::enforce_policy),
];

/// Run the full stage sequence over `text`.
#[must_use]
pub fn run_pipeline(text: &str, ctx: &StageContext) -> String {
    let mut candidate = text.to_owned();
    for (name, stage) in STAGES {
        let next = stage(&candidate, ctx);
        if next != candidate {
            trace!(stage = name, "stage rewrote candidate");
        }
        candidate = next;
    }
    candidate
}
