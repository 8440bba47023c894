//! Bilingual mode pass: re-runs the bilingual policy as the final repair so
//! no earlier pass can leave an unglossed Latin span or a stale gloss shape.

use tracing::debug;

use crate::context::StageContext;
use crate::stages;

/// Repair pass 5 entry point.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    let out = stages::bilingual::enforce_policy(text, ctx);
    if out != text {
        debug!(mode = ?ctx.bilingual, "bilingual policy re-applied");
    }
    out
}
