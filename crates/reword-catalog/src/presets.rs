//! Audience, purpose, relationship, and voice reference tables.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

// ─────────────────────────────────────────────────────────────────────────────
// Audience levels
// ─────────────────────────────────────────────────────────────────────────────

/// Reader age/formality bracket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceLevel {
    /// Stable string id.
    pub id: &'static str,
    /// Korean display label.
    pub label: &'static str,
}

/// Audience table, youngest first.
pub static AUDIENCES: &[AudienceLevel] = &[
    AudienceLevel { id: "child", label: "어린이" },
    AudienceLevel { id: "teen", label: "청소년" },
    AudienceLevel { id: "adult", label: "성인" },
    AudienceLevel { id: "senior", label: "어르신" },
];

// ─────────────────────────────────────────────────────────────────────────────
// Purposes
// ─────────────────────────────────────────────────────────────────────────────

/// Communicative intent framing the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurposeType {
    /// Stable string id.
    pub id: &'static str,
    /// Korean display label.
    pub label: &'static str,
}

/// Purpose table.
pub static PURPOSES: &[PurposeType] = &[
    PurposeType { id: "request", label: "요청" },
    PurposeType { id: "notice", label: "안내" },
    PurposeType { id: "apology", label: "사과" },
    PurposeType { id: "review", label: "검토 요청" },
    PurposeType { id: "complaint", label: "불만 전달" },
];

// ─────────────────────────────────────────────────────────────────────────────
// Relationships
// ─────────────────────────────────────────────────────────────────────────────

/// Social relationship to the reader.
///
/// `address` is the vocative form the relationship stage weaves in — never a
/// label prefix like `"상사:"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Stable string id.
    pub id: &'static str,
    /// Korean display label.
    pub label: &'static str,
    /// Vocative address form used inline.
    pub address: &'static str,
}

/// Relationship table.
pub static RELATIONSHIPS: &[Relationship] = &[
    Relationship { id: "boss", label: "상사", address: "팀장님" },
    Relationship { id: "teacher", label: "선생님", address: "선생님" },
    Relationship { id: "colleague", label: "동료", address: "동료님" },
    Relationship { id: "client", label: "고객", address: "고객님" },
    Relationship { id: "friend", label: "친구", address: "친구야" },
    Relationship { id: "parent", label: "부모님", address: "부모님" },
];

// ─────────────────────────────────────────────────────────────────────────────
// Voices
// ─────────────────────────────────────────────────────────────────────────────

/// Synthesizer voice gender.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    /// Female voice.
    Female,
    /// Male voice.
    Male,
}

/// A downstream speech-synthesizer voice. The engine never renders audio;
/// these exist so the preset listing can offer voice choices to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicePreset {
    /// Stable string id.
    pub id: &'static str,
    /// Korean display label.
    pub label: &'static str,
    /// Voice gender.
    pub gender: VoiceGender,
}

/// Voice table.
pub static VOICES: &[VoicePreset] = &[
    VoicePreset { id: "ara", label: "아라", gender: VoiceGender::Female },
    VoicePreset { id: "dana", label: "다나", gender: VoiceGender::Female },
    VoicePreset { id: "minho", label: "민호", gender: VoiceGender::Male },
];

// ─────────────────────────────────────────────────────────────────────────────
// Lookup
// ─────────────────────────────────────────────────────────────────────────────

static AUDIENCE_INDEX: LazyLock<HashMap<&'static str, &'static AudienceLevel>> =
    LazyLock::new(|| AUDIENCES.iter().map(|a| (a.id, a)).collect());

static PURPOSE_INDEX: LazyLock<HashMap<&'static str, &'static PurposeType>> =
    LazyLock::new(|| PURPOSES.iter().map(|p| (p.id, p)).collect());

static RELATIONSHIP_INDEX: LazyLock<HashMap<&'static str, &'static Relationship>> =
    LazyLock::new(|| RELATIONSHIPS.iter().map(|r| (r.id, r)).collect());

static VOICE_INDEX: LazyLock<HashMap<&'static str, &'static VoicePreset>> =
    LazyLock::new(|| VOICES.iter().map(|v| (v.id, v)).collect());

/// Resolve an audience level by id.
#[must_use]
pub fn audience(id: &str) -> Option<&'static AudienceLevel> {
    AUDIENCE_INDEX.get(id).copied()
}

/// Resolve a purpose by id.
#[must_use]
pub fn purpose(id: &str) -> Option<&'static PurposeType> {
    PURPOSE_INDEX.get(id).copied()
}

/// Resolve a relationship by id.
#[must_use]
pub fn relationship(id: &str) -> Option<&'static Relationship> {
    RELATIONSHIP_INDEX.get(id).copied()
}

/// Resolve a voice by id.
#[must_use]
pub fn voice(id: &str) -> Option<&'static VoicePreset> {
    VOICE_INDEX.get(id).copied()
}

/// All audience levels.
#[must_use]
pub fn all_audiences() -> &'static [AudienceLevel] {
    AUDIENCES
}

/// All purposes.
#[must_use]
pub fn all_purposes() -> &'static [PurposeType] {
    PURPOSES
}

/// All relationships.
#[must_use]
pub fn all_relationships() -> &'static [Relationship] {
    RELATIONSHIPS
}

/// All voices.
#[must_use]
pub fn all_voices() -> &'static [VoicePreset] {
    VOICES
}
