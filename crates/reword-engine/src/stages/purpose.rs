//! Purpose template: frames the text with a purpose-appropriate opening or
//! closing phrase.
//!
//! Guarded against template pollution: nothing is added when the text is
//! empty, already carries this purpose's marker, or carries a marker for a
//! *conflicting* purpose (a notice prefix never lands on text that already
//! reads as a complaint, and vice versa).

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::context::StageContext;

struct PurposeRule {
    /// Marker meaning this purpose's framing already exists.
    marker: LazyLock<Regex>,
    /// Markers of conflicting purposes that veto the template.
    conflict: Option<LazyLock<Regex>>,
    /// Sentence placed before the text.
    prefix: Option<&'static str>,
    /// Sentence placed after the text.
    suffix: Option<&'static str>,
}

static REQUEST: PurposeRule = PurposeRule {
    marker: LazyLock::new(|| Regex::new(r"부탁|요청|주세요|주시").unwrap()),
    conflict: None,
    prefix: None,
    suffix: Some("잘 부탁드립니다."),
};

static NOTICE: PurposeRule = PurposeRule {
    marker: LazyLock::new(|| Regex::new(r"안내드립니다|안내 말씀|공지").unwrap()),
    conflict: Some(LazyLock::new(|| Regex::new(r"항의|경고|불만|유감").unwrap())),
    prefix: Some("안내드립니다."),
    suffix: None,
};

static APOLOGY: PurposeRule = PurposeRule {
    marker: LazyLock::new(|| Regex::new(r"죄송|사과|미안").unwrap()),
    conflict: None,
    prefix: Some("죄송합니다."),
    suffix: None,
};

static REVIEW: PurposeRule = PurposeRule {
    marker: LazyLock::new(|| Regex::new(r"검토").unwrap()),
    conflict: None,
    prefix: None,
    suffix: Some("검토 부탁드립니다."),
};

static COMPLAINT: PurposeRule = PurposeRule {
    marker: LazyLock::new(|| Regex::new(r"불편|불만|항의").unwrap()),
    conflict: Some(LazyLock::new(|| Regex::new(r"안내드립니다|공지").unwrap())),
    prefix: Some("불편 사항이 있어 말씀드립니다."),
    suffix: None,
};

fn rule_for(purpose_id: &str) -> Option<&'static PurposeRule> {
    match purpose_id {
        "request" => Some(&REQUEST),
        "notice" => Some(&NOTICE),
        "apology" => Some(&APOLOGY),
        "review" => Some(&REVIEW),
        "complaint" => Some(&COMPLAINT),
        _ => None,
    }
}

fn ensure_period(s: &str) -> String {
    let trimmed = s.trim_end();
    if trimmed.ends_with(['.', '!', '?', '…']) {
        trimmed.to_owned()
    } else {
        format!("{trimmed}.")
    }
}

/// Stage 3 entry point.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return text.to_owned();
    }
    let Some(rule) = rule_for(ctx.purpose.id) else {
        return text.to_owned();
    };

    if let Some(conflict) = &rule.conflict {
        if conflict.is_match(trimmed) {
            trace!(purpose = ctx.purpose.id, "conflicting purpose marker, template skipped");
            return text.to_owned();
        }
    }
    if rule.marker.is_match(trimmed) {
        return text.to_owned();
    }

    let mut out = String::new();
    if let Some(prefix) = rule.prefix {
        out.push_str(prefix);
        out.push(' ');
    }
    out.push_str(trimmed);
    if let Some(suffix) = rule.suffix {
        out = ensure_period(&out);
        out.push(' ');
        out.push_str(suffix);
    }
    out
}
