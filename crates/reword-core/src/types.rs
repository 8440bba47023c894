//! Request/result data model for the rewrite engine.
//!
//! All wire types serialize camelCase. Every entity here is created and fully
//! consumed within a single request — there is no cross-request state in the
//! core.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Request-side enums
// ─────────────────────────────────────────────────────────────────────────────

/// Output length class. Each class is regenerated independently from the
/// original input — never derived by truncating another variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthClass {
    /// One clause within a fixed character budget.
    Short,
    /// 1–2 sentences.
    Standard,
    /// 2–3 sentences plus gated optional clauses.
    Long,
}

impl LengthClass {
    /// Ordering rank: short < standard < long.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Short => 0,
            Self::Standard => 1,
            Self::Long => 2,
        }
    }

    /// All classes in ascending rank order.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Short, Self::Standard, Self::Long]
    }
}

/// Delivery format — a register dial independent of tone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageFormat {
    /// Messenger text: casual, contracted endings.
    #[default]
    Message,
    /// Email: full deferential endings.
    Email,
}

/// Bilingual-assist policy for non-Korean (Latin-script) spans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BilingualMode {
    /// No foreign script in the output; spans are converted, never deleted.
    #[default]
    Off,
    /// Korean gloss followed by the original span in parentheses.
    Paren,
    /// Korean line followed by the original span on a second line.
    #[serde(rename = "TWOLINES")]
    TwoLines,
}

/// Subscription tier, consumed only to bound the produced length classes.
/// Usage tracking lives with the caller, not here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Reduced variant set (short + standard).
    #[default]
    Free,
    /// All length classes.
    Pro,
    /// All length classes.
    Business,
}

/// Presentation layout for the final variant text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantLayout {
    /// Sentences joined as flowing text.
    #[default]
    Paragraph,
    /// One sentence per `- ` line.
    Bullet,
}

/// Result presentation options — an explicit struct, not an option bag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultOptions {
    /// Layout of the produced text.
    pub format: VariantLayout,
    /// Append a note when the input is ambiguous about its object.
    pub ambiguity_warning: bool,
    /// Allow the long variant to add background framing.
    pub auto_include_details: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

fn default_language() -> String {
    "ko".to_string()
}

fn default_strength() -> u8 {
    50
}

fn default_length() -> LengthClass {
    LengthClass::Standard
}

/// A single rewrite request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteRequest {
    /// Source text. Must be non-empty after trimming (validated at the
    /// HTTP boundary).
    pub text: String,
    /// Tone preset id, e.g. `"formal"`, `"warning"`.
    pub tone_id: String,
    /// Purpose preset id, e.g. `"request"`, `"apology"`.
    pub purpose_id: String,
    /// Audience level id, e.g. `"adult"`, `"child"`.
    pub audience_id: String,
    /// Optional relationship id; absence skips the relationship stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_id: Option<String>,
    /// Soft↔firm scalar, 0–100.
    #[serde(default = "default_strength")]
    pub strength: u8,
    /// Requested length class; bounds which classes are produced.
    #[serde(default = "default_length")]
    pub length: LengthClass,
    /// Delivery format.
    #[serde(default)]
    pub format: MessageFormat,
    /// ISO language code. Bilingual logic only activates for `"ko"`.
    #[serde(default = "default_language")]
    pub language: String,
    /// Bilingual-assist policy.
    #[serde(default)]
    pub bilingual_mode: BilingualMode,
    /// Presentation options.
    #[serde(default)]
    pub result_options: ResultOptions,
    /// Plan tier for variant-count limits.
    #[serde(default)]
    pub plan_tier: PlanTier,
}

// ─────────────────────────────────────────────────────────────────────────────
// Results
// ─────────────────────────────────────────────────────────────────────────────

/// One produced variant. Immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteVariant {
    /// Which length class this variant realizes.
    pub length_class: LengthClass,
    /// The rewritten text.
    pub text: String,
}

/// Outcome of the safety gate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyCheck {
    /// Whether the input was blocked.
    pub blocked: bool,
    /// Human-readable reason when blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Optional safer phrasing suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_alternative: Option<String>,
}

impl SafetyCheck {
    /// A passing check.
    #[must_use]
    pub fn pass() -> Self {
        Self::default()
    }

    /// A blocking check with a reason and an optional alternative.
    #[must_use]
    pub fn block(reason: impl Into<String>, alternative: Option<String>) -> Self {
        Self {
            blocked: true,
            reason: Some(reason.into()),
            suggested_alternative: alternative,
        }
    }
}

/// Complete result of one rewrite invocation.
///
/// Invariant: `safety.blocked == true` implies `variants` is empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResult {
    /// Produced variants, one per generated length class.
    pub variants: Vec<RewriteVariant>,
    /// Safety gate outcome.
    pub safety: SafetyCheck,
}

impl RewriteResult {
    /// A blocked result: no variants, blocking safety check.
    #[must_use]
    pub fn blocked(safety: SafetyCheck) -> Self {
        Self {
            variants: Vec::new(),
            safety,
        }
    }

    /// An empty-but-successful result (unresolved preset quirk).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            variants: Vec::new(),
            safety: SafetyCheck::pass(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Batch mode
// ─────────────────────────────────────────────────────────────────────────────

/// One template in a batch run: a request minus the shared input text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchTemplate {
    /// Caller-side identifier echoed back in the outcome.
    pub template_id: String,
    /// Tone preset id.
    pub tone_id: String,
    /// Purpose preset id.
    pub purpose_id: String,
    /// Audience level id.
    pub audience_id: String,
    /// Optional relationship id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_id: Option<String>,
    /// Soft↔firm scalar; `None` takes the tone's default strength.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<u8>,
    /// Requested length class.
    #[serde(default = "default_length")]
    pub length: LengthClass,
    /// Delivery format.
    #[serde(default)]
    pub format: MessageFormat,
    /// Bilingual-assist policy.
    #[serde(default)]
    pub bilingual_mode: BilingualMode,
    /// Presentation options.
    #[serde(default)]
    pub result_options: ResultOptions,
}

/// Per-item outcome of a batch run. A failure in one item never aborts
/// its siblings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "status")]
pub enum BatchOutcome {
    /// The template's pipeline run completed.
    #[serde(rename = "completed")]
    Completed {
        /// Echoed template id.
        template_id: String,
        /// The rewrite result for this template.
        result: RewriteResult,
    },
    /// The template's pipeline run failed; siblings are unaffected.
    #[serde(rename = "failed")]
    Failed {
        /// Echoed template id.
        template_id: String,
        /// Failure message.
        error: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_with_defaults() {
        let json = r#"{
            "text": "회의 정리 부탁드립니다",
            "toneId": "formal",
            "purposeId": "request",
            "audienceId": "adult"
        }"#;
        let req: RewriteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.strength, 50);
        assert_eq!(req.length, LengthClass::Standard);
        assert_eq!(req.format, MessageFormat::Message);
        assert_eq!(req.language, "ko");
        assert_eq!(req.bilingual_mode, BilingualMode::Off);
        assert_eq!(req.plan_tier, PlanTier::Free);
        assert!(req.relationship_id.is_none());
        assert!(!req.result_options.auto_include_details);
    }

    #[test]
    fn bilingual_mode_wire_names() {
        assert_eq!(
            serde_json::to_string(&BilingualMode::TwoLines).unwrap(),
            "\"TWOLINES\""
        );
        assert_eq!(serde_json::to_string(&BilingualMode::Off).unwrap(), "\"OFF\"");
        assert_eq!(
            serde_json::from_str::<BilingualMode>("\"PAREN\"").unwrap(),
            BilingualMode::Paren
        );
    }

    #[test]
    fn length_class_rank_is_ordered() {
        let ranks: Vec<u8> = LengthClass::all().iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[test]
    fn blocked_result_has_no_variants() {
        let result = RewriteResult::blocked(SafetyCheck::block("폭력적 표현", None));
        assert!(result.variants.is_empty());
        assert!(result.safety.blocked);
        assert!(result.safety.suggested_alternative.is_none());
    }

    #[test]
    fn safety_check_pass_serializes_minimal() {
        let json = serde_json::to_string(&SafetyCheck::pass()).unwrap();
        assert_eq!(json, r#"{"blocked":false}"#);
    }

    #[test]
    fn batch_outcome_is_status_tagged() {
        let outcome = BatchOutcome::Failed {
            template_id: "t-1".into(),
            error: "boom".into(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["templateId"], "t-1");
    }

    #[test]
    fn variant_round_trips() {
        let variant = RewriteVariant {
            length_class: LengthClass::Long,
            text: "안내드립니다.".into(),
        };
        let json = serde_json::to_string(&variant).unwrap();
        assert!(json.contains("\"lengthClass\":\"long\""));
        let back: RewriteVariant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, variant);
    }
}
