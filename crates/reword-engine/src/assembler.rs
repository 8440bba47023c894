//! Variant assembler: the request-level entry points.
//!
//! `rewrite` drives one request end to end: safety gate, preset resolution,
//! one pipeline-plus-repair run per produced length class, presentation.
//! `rewrite_batch` fans a shared input across templates with per-item panic
//! isolation.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

use reword_core::errors::{Result, RewordError};
use reword_core::text::split_sentences;
use reword_core::types::{
    BatchOutcome, BatchTemplate, LengthClass, PlanTier, RewriteRequest, RewriteResult,
    RewriteVariant, VariantLayout,
};

use crate::context::StageContext;
use crate::cues;
use crate::repair::run_repairs;
use crate::safety;
use crate::stages::run_pipeline;

/// Operator-level engine configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineConfig {
    /// Lift the free-tier restriction on the long length class.
    pub unlock_all_lengths: bool,
}

/// Length classes produced for a request: every class up to the requested
/// one, minus `long` on the free tier unless the operator override is set.
fn allowed_lengths(plan: PlanTier, requested: LengthClass, config: &EngineConfig) -> Vec<LengthClass> {
    LengthClass::all()
        .into_iter()
        .filter(|class| class.rank() <= requested.rank())
        .filter(|class| {
            *class != LengthClass::Long || plan != PlanTier::Free || config.unlock_all_lengths
        })
        .collect()
}

const AMBIGUITY_NOTE_FORMAL: &str =
    "※ 가리키는 대상이 명확하지 않습니다. 구체적인 내용을 함께 적어 주시면 더 정확하게 전달됩니다.";
const AMBIGUITY_NOTE_CASUAL: &str =
    "※ 가리키는 대상이 명확하지 않아요. 구체적인 내용을 함께 적어 주시면 더 정확하게 전달돼요.";

/// The ambiguity note, when the option and the cue both apply. The rendition
/// follows the body's register, and the short budget covers the whole variant
/// text: a note that does not fit is dropped rather than breaking the bound.
fn ambiguity_note(body: &str, ctx: &StageContext<'_>) -> Option<&'static str> {
    if !ctx.options.ambiguity_warning || !cues::has_ambiguity_cue(ctx.original) {
        return None;
    }
    let note = if crate::repair::style::ends_formal(body) {
        AMBIGUITY_NOTE_FORMAL
    } else {
        AMBIGUITY_NOTE_CASUAL
    };
    if ctx.length == LengthClass::Short
        && body.chars().count() + 1 + note.chars().count() > crate::stages::length::SHORT_BUDGET
    {
        return None;
    }
    Some(note)
}

fn present(text: String, ctx: &StageContext<'_>) -> String {
    let note = ambiguity_note(&text, ctx);
    let mut out = match ctx.options.format {
        VariantLayout::Paragraph => text,
        VariantLayout::Bullet => split_sentences(&text)
            .iter()
            .map(|sentence| format!("- {sentence}"))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    if let Some(note) = note {
        out.push('\n');
        out.push_str(note);
    }
    out
}

/// Run one rewrite request.
///
/// Safety blocks and unresolved presets return well-formed results; `Err` is
/// reserved for request-shape violations the HTTP boundary maps to 400.
pub fn rewrite(request: &RewriteRequest, config: &EngineConfig) -> Result<RewriteResult> {
    let original = request.text.trim();
    if original.is_empty() {
        return Err(RewordError::EmptyText);
    }
    if request.strength > 100 {
        return Err(RewordError::StrengthOutOfRange(request.strength));
    }

    let tone = reword_catalog::tone(&request.tone_id);
    let safety = safety::check(original, tone);
    if safety.blocked {
        return Ok(RewriteResult::blocked(safety));
    }

    // Unknown tone/purpose/audience ids resolve to an empty success.
    let (Some(tone), Some(purpose), Some(audience)) = (
        tone,
        reword_catalog::purpose(&request.purpose_id),
        reword_catalog::audience(&request.audience_id),
    ) else {
        debug!(
            tone = %request.tone_id,
            purpose = %request.purpose_id,
            audience = %request.audience_id,
            "unresolved preset id, returning empty result"
        );
        return Ok(RewriteResult::empty());
    };
    // An unknown relationship id degrades to "no relationship".
    let relationship = request
        .relationship_id
        .as_deref()
        .and_then(reword_catalog::relationship);

    let mut variants = Vec::new();
    for class in allowed_lengths(request.plan_tier, request.length, config) {
        let ctx = StageContext {
            tone,
            purpose,
            audience,
            relationship,
            strength: request.strength,
            format: request.format,
            bilingual: request.bilingual_mode,
            korean: request.language == "ko",
            length: class,
            options: request.result_options,
            original,
        };
        let candidate = run_pipeline(original, &ctx);
        let mut repaired = run_repairs(&candidate, &ctx);
        // Register repairs can lengthen endings; the short budget is a hard
        // bound, so clamp once more after the repair chain.
        if class == LengthClass::Short {
            repaired = crate::stages::length::apply(&repaired, &ctx);
            // The clamp can re-join a two-line gloss; restore the policy.
            repaired = crate::repair::bilingual::apply(&repaired, &ctx);
        }
        variants.push(RewriteVariant {
            length_class: class,
            text: present(repaired, &ctx),
        });
    }

    Ok(RewriteResult { variants, safety })
}

fn template_request(text: &str, template: &BatchTemplate, plan: PlanTier) -> RewriteRequest {
    let strength = template.strength.unwrap_or_else(|| {
        reword_catalog::tone(&template.tone_id).map_or(50, |t| t.default_strength)
    });
    RewriteRequest {
        text: text.to_owned(),
        tone_id: template.tone_id.clone(),
        purpose_id: template.purpose_id.clone(),
        audience_id: template.audience_id.clone(),
        relationship_id: template.relationship_id.clone(),
        strength,
        length: template.length,
        format: template.format,
        language: "ko".to_owned(),
        bilingual_mode: template.bilingual_mode,
        result_options: template.result_options,
        plan_tier: plan,
    }
}

/// Fan one input text across templates. Items are fully independent: a
/// failure (or panic) in one is reported in place and never aborts siblings.
#[must_use]
pub fn rewrite_batch(
    text: &str,
    templates: &[BatchTemplate],
    plan: PlanTier,
    config: &EngineConfig,
) -> Vec<BatchOutcome> {
    templates
        .iter()
        .map(|template| {
            let request = template_request(text, template, plan);
            let run = catch_unwind(AssertUnwindSafe(|| rewrite(&request, config)));
            match run {
                Ok(Ok(result)) => BatchOutcome::Completed {
                    template_id: template.template_id.clone(),
                    result,
                },
                Ok(Err(err)) => BatchOutcome::Failed {
                    template_id: template.template_id.clone(),
                    error: err.to_string(),
                },
                Err(_) => {
                    warn!(template = %template.template_id, "batch item panicked");
                    BatchOutcome::Failed {
                        template_id: template.template_id.clone(),
                        error: "internal error while processing template".to_owned(),
                    }
                }
            }
        })
        .collect()
}
