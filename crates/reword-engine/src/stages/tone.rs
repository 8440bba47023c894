//! Tone transform: per-tone lexical/register substitution tables, modulated
//! by the soft↔firm strength scalar.
//!
//! Purpose-gated for antagonistic registers: when the purpose is a plain
//! request, warning/protest escalation is suppressed and demand phrasing is
//! downgraded — tone never overrides purpose.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::StageContext;

type Rules = Vec<(Regex, &'static str)>;

fn build(pairs: &[(&str, &'static str)]) -> Rules {
    pairs
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect()
}

fn apply_rules(text: &str, rules: &Rules) -> String {
    let mut out = text.to_owned();
    for (pattern, replacement) in rules {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out
}

// Longest pattern first within each table so suffixed forms win.

static FORMAL: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        ("고마워요", "감사합니다"),
        ("고맙습니다", "감사합니다"),
        ("고마워", "감사합니다"),
        ("미안해요", "죄송합니다"),
        ("미안합니다", "죄송합니다"),
        ("부탁해요", "부탁드립니다"),
        ("부탁해", "부탁드립니다"),
    ])
});

static CASUAL: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        ("감사합니다", "고마워요"),
        ("죄송합니다", "미안해요"),
        ("부탁드립니다", "부탁해요"),
        ("주시기 바랍니다", "주세요"),
        ("입니다", "이에요"),
    ])
});

static FIRM: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        ("주시면 감사하겠습니다", "주시기 바랍니다"),
        ("부탁드립니다", "요청드립니다"),
        ("부탁드려요", "요청드립니다"),
        ("해 주세요", "해 주시기 바랍니다"),
    ])
});

static APOLOGY: LazyLock<Rules> =
    LazyLock::new(|| build(&[("해 주세요", "해 주시면 감사하겠습니다")]));

static WARM: LazyLock<Rules> = LazyLock::new(|| {
    build(&[("부탁드립니다", "부탁드려요"), ("감사합니다", "감사해요")])
});

static NOTICE: LazyLock<Rules> =
    LazyLock::new(|| build(&[("해 주세요", "해 주시기 바랍니다")]));

static WARNING: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        ("부탁드립니다", "요구합니다"),
        ("부탁드려요", "요구합니다"),
        ("해 주세요", "조치해 주시기 바랍니다"),
    ])
});

static PROTEST: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        ("말씀드립니다", "정식으로 항의드립니다"),
        ("부탁드립니다", "시정을 요청합니다"),
        ("부탁드려요", "시정을 요청합니다"),
    ])
});

/// Demand phrasing back to plain-request register (purpose gate).
static DOWNGRADE: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        ("조치해 주시기 바랍니다", "확인해 주시기 바랍니다"),
        ("시정을 요청합니다", "부탁드립니다"),
        ("정식으로 항의드립니다", "말씀드립니다"),
        ("항의드립니다", "말씀드립니다"),
        ("요구합니다", "부탁드립니다"),
        ("경고합니다", "말씀드립니다"),
    ])
});

/// Strength > 70: push toward assertive, demanding forms.
static ASSERTIVE: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        ("주시면 감사하겠습니다", "주시기 바랍니다"),
        ("부탁드립니다", "요청드립니다"),
        ("해 주세요", "해 주시기 바랍니다"),
    ])
});

/// Strength < 30: pull toward softened, gratitude-framed forms.
static SOFT: LazyLock<Rules> = LazyLock::new(|| {
    build(&[
        ("해 주시기 바랍니다", "해 주시면 감사하겠습니다"),
        ("요구합니다", "부탁드립니다"),
        ("요청드립니다", "부탁드립니다"),
    ])
});

static YO_PERIOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"요\.").unwrap());

fn has(text: &str, needle: &str) -> bool {
    text.contains(needle)
}

/// Append `clause` as its own sentence.
fn append_sentence(mut s: String, clause: &str) -> String {
    let trimmed = s.trim_end();
    if !trimmed.is_empty() && !trimmed.ends_with(['.', '!', '?', '…']) {
        s = format!("{trimmed}.");
    }
    s.push(' ');
    s.push_str(clause);
    s
}

/// Stage 4 entry point.
#[must_use]
pub fn apply(text: &str, ctx: &StageContext) -> String {
    let mut out = if ctx.escalation_suppressed() {
        apply_rules(text, &DOWNGRADE)
    } else {
        match ctx.tone.id {
            "formal" => apply_rules(text, &FORMAL),
            "casual" => apply_rules(text, &CASUAL),
            "firm" => apply_rules(text, &FIRM),
            "apology" => {
                let mut s = apply_rules(text, &APOLOGY);
                if !has(&s, "죄송") && !has(&s, "사과") && !has(&s, "미안") {
                    s = format!("불편을 드려 죄송합니다. {s}");
                }
                s
            }
            "warm" => apply_rules(text, &WARM),
            "humor" => {
                let mut s = YO_PERIOD.replace_all(text, "요~.").into_owned();
                if s.ends_with('요') {
                    s.push('~');
                }
                s
            }
            "notice" => {
                let mut s = apply_rules(text, &NOTICE);
                if !has(&s, "안내") && !has(&s, "공지") {
                    s = format!("안내 말씀드립니다. {s}");
                }
                s
            }
            "warning" => {
                let mut s = apply_rules(text, &WARNING);
                if !has(&s, "조치를 검토") {
                    s = append_sentence(s, "시정되지 않을 경우 필요한 조치를 검토하겠습니다.");
                }
                s
            }
            "protest" => {
                let mut s = apply_rules(text, &PROTEST);
                if !has(&s, "항의") {
                    s = append_sentence(s, "이 문제에 대해 정식으로 항의드립니다.");
                }
                s
            }
            _ => text.to_owned(),
        }
    };

    if ctx.strength > 70 {
        out = apply_rules(&out, &ASSERTIVE);
    } else if ctx.strength < 30 {
        out = apply_rules(&out, &SOFT);
    }
    out
}
