//! Per-run context handed to every stage and repair pass.

use reword_catalog::{AudienceLevel, PurposeType, Relationship, TonePreset};
use reword_core::types::{BilingualMode, LengthClass, MessageFormat, ResultOptions};

/// Resolved, request-derived context for one pipeline run.
///
/// One `StageContext` exists per length class per request; runs share nothing
/// mutable. `original` always points at the untouched input text — cue gating
/// (deadlines, consequences) must consult the original, never the candidate.
#[derive(Clone, Copy, Debug)]
pub struct StageContext<'a> {
    /// Resolved tone preset.
    pub tone: &'static TonePreset,
    /// Resolved purpose.
    pub purpose: &'static PurposeType,
    /// Resolved audience level.
    pub audience: &'static AudienceLevel,
    /// Resolved relationship, when the request named one.
    pub relationship: Option<&'static Relationship>,
    /// Soft↔firm scalar, 0–100.
    pub strength: u8,
    /// Delivery format register dial.
    pub format: MessageFormat,
    /// Bilingual-assist policy.
    pub bilingual: BilingualMode,
    /// Whether bilingual logic is active (request language was `"ko"`).
    pub korean: bool,
    /// Length class this run realizes.
    pub length: LengthClass,
    /// Presentation options.
    pub options: ResultOptions,
    /// The untouched original input.
    pub original: &'a str,
}

impl<'a> StageContext<'a> {
    /// Whether the tone demands a single formal register in the output.
    #[must_use]
    pub fn formal_locked(&self) -> bool {
        self.tone.formal_locked
    }

    /// Whether escalation phrasing is suppressed: antagonistic tones must
    /// never override a plain request purpose.
    #[must_use]
    pub fn escalation_suppressed(&self) -> bool {
        self.tone.category == reword_catalog::ToneCategory::Strong && self.purpose.id == "request"
    }
}
