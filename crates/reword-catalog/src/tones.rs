//! Tone presets: rhetorical register definitions.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Tone grouping. Strong-category tones get the stricter safety pass and the
/// purpose-gated escalation downgrade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneCategory {
    /// Everyday registers.
    Base,
    /// Antagonistic registers (warning, protest).
    Strong,
    /// Apology register.
    Apology,
}

/// One tone preset. Immutable reference data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TonePreset {
    /// Stable string id used in requests.
    pub id: &'static str,
    /// Korean display label.
    pub label: &'static str,
    /// Category for safety and purpose gating.
    pub category: ToneCategory,
    /// Default soft↔firm strength when the caller leaves it unset.
    pub default_strength: u8,
    /// Whether output must be 100% formal register (repair chain unifies
    /// toward formal endings for these tones).
    pub formal_locked: bool,
}

/// The full tone table, in display order.
pub static TONES: &[TonePreset] = &[
    TonePreset {
        id: "formal",
        label: "정중한",
        category: ToneCategory::Base,
        default_strength: 50,
        formal_locked: true,
    },
    TonePreset {
        id: "casual",
        label: "친근한",
        category: ToneCategory::Base,
        default_strength: 40,
        formal_locked: false,
    },
    TonePreset {
        id: "firm",
        label: "단호한",
        category: ToneCategory::Base,
        default_strength: 70,
        formal_locked: true,
    },
    TonePreset {
        id: "apology",
        label: "사과하는",
        category: ToneCategory::Apology,
        default_strength: 30,
        formal_locked: true,
    },
    TonePreset {
        id: "warm",
        label: "따뜻한",
        category: ToneCategory::Base,
        default_strength: 40,
        formal_locked: false,
    },
    TonePreset {
        id: "humor",
        label: "유머러스한",
        category: ToneCategory::Base,
        default_strength: 40,
        formal_locked: false,
    },
    TonePreset {
        id: "notice",
        label: "공지/안내",
        category: ToneCategory::Base,
        default_strength: 55,
        formal_locked: true,
    },
    TonePreset {
        id: "warning",
        label: "경고",
        category: ToneCategory::Strong,
        default_strength: 80,
        formal_locked: true,
    },
    TonePreset {
        id: "protest",
        label: "항의",
        category: ToneCategory::Strong,
        default_strength: 85,
        formal_locked: true,
    },
];

static TONE_INDEX: LazyLock<HashMap<&'static str, &'static TonePreset>> =
    LazyLock::new(|| TONES.iter().map(|t| (t.id, t)).collect());

/// Resolve a tone preset by id.
#[must_use]
pub fn tone(id: &str) -> Option<&'static TonePreset> {
    TONE_INDEX.get(id).copied()
}

/// All tone presets in display order.
#[must_use]
pub fn all_tones() -> &'static [TonePreset] {
    TONES
}
