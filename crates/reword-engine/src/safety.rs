//! Safety gate: pure predicate over input text and tone.
//!
//! Runs before parameter resolution or any text mutation. A block
//! short-circuits the whole pipeline with zero variants. Strong-category
//! tones (warning/protest) get a second, stricter pass: escalation-threat
//! phrasing is blocked unless the text stays within a small allow-list of
//! legally-framed wording.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use reword_catalog::{ToneCategory, TonePreset};
use reword_core::types::SafetyCheck;

struct DisallowedSet {
    pattern: LazyLock<Regex>,
    reason: &'static str,
    alternative: Option<&'static str>,
}

static VIOLENCE: DisallowedSet = DisallowedSet {
    pattern: LazyLock::new(|| Regex::new(r"죽여|죽이|때리|때려|패버|폭행|협박").unwrap()),
    reason: "폭력적인 표현이 포함되어 있습니다.",
    alternative: Some("감정적인 표현 대신 상황과 요구 사항을 사실 중심으로 적어 보세요."),
};

static ILLEGAL: DisallowedSet = DisallowedSet {
    pattern: LazyLock::new(|| Regex::new(r"마약|밀수|해킹|위조|장물|몰카|도청").unwrap()),
    reason: "불법 행위와 관련된 내용은 변환할 수 없습니다.",
    alternative: None,
};

static HARASSMENT: DisallowedSet = DisallowedSet {
    pattern: LazyLock::new(|| {
        Regex::new(r"신상을?\s*털|저격하|조리돌림|망신을?\s*주").unwrap()
    }),
    reason: "특정인을 겨냥한 괴롭힘 표현이 포함되어 있습니다.",
    alternative: Some("문제가 된 행동 자체에 대한 의견으로 바꿔 보세요."),
};

static PERSONAL_DATA: DisallowedSet = DisallowedSet {
    pattern: LazyLock::new(|| {
        Regex::new(r"주민등록번호|계좌\s*비밀번호|보안카드|신분증\s*사본").unwrap()
    }),
    reason: "개인정보 제공을 요구하는 내용이 포함되어 있습니다.",
    alternative: None,
};

/// Escalation-threat phrasing that strong tones may not carry.
static ESCALATION_RISK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"고소하겠|고발하겠|가만두지 않|후회하게|각오해|찾아가겠").unwrap()
});

/// Legally-framed strong phrasing that stays permitted.
static STRONG_ALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"법적 절차[를을]?\s*검토|내용증명|정식으로 이의|시정[을]?\s*요청|기한 내 시정").unwrap()
});

fn disallowed_sets() -> [&'static DisallowedSet; 4] {
    [&VIOLENCE, &ILLEGAL, &HARASSMENT, &PERSONAL_DATA]
}

/// Check `text` against the disallowed-content sets.
///
/// `tone` is the *requested* tone when it resolved; the gate runs before
/// resolution, so an unknown tone simply gets the base pass.
#[must_use]
pub fn check(text: &str, tone: Option<&TonePreset>) -> SafetyCheck {
    for set in disallowed_sets() {
        if set.pattern.is_match(text) {
            debug!(reason = set.reason, "safety gate blocked input");
            return SafetyCheck::block(set.reason, set.alternative.map(String::from));
        }
    }

    let strong = tone.is_some_and(|t| t.category == ToneCategory::Strong);
    if strong && ESCALATION_RISK.is_match(text) && !STRONG_ALLOWED.is_match(text) {
        debug!("safety gate blocked escalation phrasing under strong tone");
        return SafetyCheck::block(
            "경고/항의 어조에서는 위협적인 표현을 사용할 수 없습니다.",
            Some(
                "'법적 절차를 검토하겠습니다' 또는 '기한 내 시정을 요청합니다'처럼 절차 중심으로 표현해 보세요."
                    .to_string(),
            ),
        );
    }

    SafetyCheck::pass()
}
