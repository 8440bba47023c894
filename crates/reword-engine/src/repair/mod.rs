//! Repair passes, applied in a fixed order after the transform stages.
//!
//! Each pass re-scans the candidate and, when it detects its defect class,
//! rewrites the candidate to remove it — repairs in place, never just flags.
//! The two-list design (transform stages, then repair passes) keeps the
//! anti-hallucination invariant auditable in one place.

pub mod bilingual;
pub mod formality;
pub mod fragment;
pub mod integrity;
pub mod style;

use tracing::debug;

use crate::context::StageContext;
use crate::stages::StageFn;

/// The ordered repair pass list. Changing this order changes semantics:
/// formality runs after integrity so stripped clauses cannot resurrect
/// informal endings, and the bilingual check runs last.
pub static REPAIRS: &[(&str, StageFn)] = &[
    ("style_consistency", style::apply),
    ("context_integrity", integrity::apply),
    ("formality_consistency", formality::apply),
    ("particle_fragment", fragment::apply),
    ("bilingual_mode", bilingual::apply),
];

/// Run the full repair chain over a candidate.
#[must_use]
pub fn run_repairs(text: &str, ctx: &StageContext) -> String {
    let mut candidate = text.to_owned();
    for (name, pass) in REPAIRS {
        let next = pass(&candidate, ctx);
        if next != candidate {
            debug!(repair = name, "repair pass rewrote candidate");
        }
        candidate = next;
    }
    candidate
}
