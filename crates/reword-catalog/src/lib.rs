//! # reword-catalog
//!
//! Static preset catalog consumed by the rewrite engine.
//!
//! - **Tones**: [`tones::TonePreset`] — register, category, default strength
//! - **Audiences / purposes / relationships / voices**: [`presets`]
//!
//! All tables are compiled-in reference data: loaded once, immutable, looked
//! up by string id in O(1). Unknown ids resolve to `None`; the engine decides
//! what that means (silent empty result for tone/purpose/audience, skipped
//! stage for relationship).

#![deny(unsafe_code)]

pub mod presets;
pub mod tones;

pub use presets::{
    audience, all_audiences, all_purposes, all_relationships, all_voices, purpose, relationship,
    voice, AudienceLevel, PurposeType, Relationship, VoiceGender, VoicePreset,
};
pub use tones::{all_tones, tone, ToneCategory, TonePreset};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tone_is_resolvable_by_id() {
        for preset in all_tones() {
            let found = tone(preset.id).expect("tone must resolve");
            assert_eq!(found.id, preset.id);
        }
    }

    #[test]
    fn unknown_ids_resolve_to_none() {
        assert!(tone("no-such-tone").is_none());
        assert!(purpose("no-such-purpose").is_none());
        assert!(audience("no-such-audience").is_none());
        assert!(relationship("no-such-relationship").is_none());
        assert!(voice("no-such-voice").is_none());
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for t in all_tones() {
            assert!(seen.insert(t.id), "duplicate tone id {}", t.id);
        }
        seen.clear();
        for p in all_purposes() {
            assert!(seen.insert(p.id), "duplicate purpose id {}", p.id);
        }
    }
}
