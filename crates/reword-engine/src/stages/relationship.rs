//! Relationship transform: weaves the relationship's vocative address into
//! the text. Inline only — never a `"상사:"`-style label prefix.

use tracing::trace;

use crate::context::StageContext;

/// Stage 6 entry point.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    let Some(rel) = ctx.relationship else {
        return text.to_owned();
    };
    if text.contains(rel.address) || text.contains(rel.label) {
        trace!(relationship = rel.id, "address already present, stage skipped");
        return text.to_owned();
    }
    format!("{}, {}", rel.address, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StageContext;
    use reword_core::types::{BilingualMode, LengthClass, MessageFormat, ResultOptions};

    fn ctx(relationship: Option<&str>) -> StageContext<'static> {
        StageContext {
            tone: reword_catalog::tone("formal").unwrap(),
            purpose: reword_catalog::purpose("request").unwrap(),
            audience: reword_catalog::audience("adult").unwrap(),
            relationship: relationship.and_then(reword_catalog::relationship),
            strength: 50,
            format: MessageFormat::Message,
            bilingual: BilingualMode::Off,
            korean: true,
            length: LengthClass::Standard,
            options: ResultOptions::default(),
            original: "",
        }
    }

    #[test]
    fn weaves_vocative_for_boss() {
        let out = apply("보고서 검토 부탁드립니다", &ctx(Some("boss")));
        assert_eq!(out, "팀장님, 보고서 검토 부탁드립니다");
    }

    #[test]
    fn skips_when_address_already_present() {
        let out = apply("팀장님, 보고서 검토 부탁드립니다", &ctx(Some("boss")));
        assert_eq!(out, "팀장님, 보고서 검토 부탁드립니다");
    }

    #[test]
    fn skips_when_label_already_present() {
        let out = apply("선생님께 드릴 질문이 있습니다", &ctx(Some("teacher")));
        assert_eq!(out, "선생님께 드릴 질문이 있습니다");
    }

    #[test]
    fn absent_relationship_is_a_no_op() {
        let out = apply("보고서 검토 부탁드립니다", &ctx(None));
        assert_eq!(out, "보고서 검토 부탁드립니다");
    }

    #[test]
    fn never_emits_label_prefix() {
        let out = apply("회의 일정 공유 부탁드립니다", &ctx(Some("client")));
        assert!(!out.contains("고객:"));
        assert!(out.starts_with("고객님, "));
    }
}
