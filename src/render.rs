//! Plain-text screens for the wizard.
//!
//! Every function returns the screen as a `String` so the CLI can print it and
//! tests can inspect it.

use crate::{
    core::{join_list, FormField, Screen, Wizard, WizardStep},
    types::{Choice, DailyPlan, ScheduleItem, TripRequest, TripResponse},
};

pub const NO_COST_LABEL: &str = "비용 없음";
const NONE_LABEL: &str = "없음";
const RULE: &str = "────────────────────────────────────────";

/// Render whatever the wizard is currently showing, with the key hints for it.
pub fn render_screen(wizard: &Wizard, feedback_enabled: bool) -> String {
    match wizard.screen() {
        Screen::Loading => render_loading(),
        Screen::Error(message) => {
            let controls = if feedback_enabled {
                "[r] 처음부터 다시하기   [f] 피드백 남기기   [q] 종료"
            } else {
                "[r] 처음부터 다시하기   [q] 종료"
            };
            format!("{}\n\n{}", render_error(message), controls)
        }
        Screen::Result(response) => {
            let controls = if feedback_enabled {
                "[r] 새로운 계획 만들기   [f] 피드백 남기기   [q] 종료"
            } else {
                "[r] 새로운 계획 만들기   [q] 종료"
            };
            format!("{}\n\n{}", render_result(response), controls)
        }
        Screen::Step(WizardStep::Welcome) => render_welcome(),
        Screen::Step(WizardStep::Summary) => render_summary_step(wizard.form()),
        Screen::Step(step) => render_input_step(step, wizard.form()),
    }
}

pub fn render_welcome() -> String {
    [
        "Plan-AI",
        "AI와 함께 당신만의 완벽한 여행을 계획하세요.",
        "",
        "[Enter] 여행 계획 시작하기   [q] 종료",
    ]
    .join("\n")
}

/// One input step: heading, then each field with its options and current value.
pub fn render_input_step(step: WizardStep, form: &TripRequest) -> String {
    let mut lines = vec![step.title(), RULE.to_string()];

    for field in step.fields() {
        lines.push(field.label().to_string());
        if let Some(options) = field.options() {
            for (idx, option) in options.iter().enumerate() {
                lines.push(format!("  {}) {}", idx + 1, option));
            }
        }
        lines.push(format!("  현재 값: {}", form.display(*field)));
    }

    lines.push(String::new());
    lines.push("[Enter] 현재 값 유지   [b] 이전   [q] 종료".to_string());
    lines.join("\n")
}

pub fn render_summary_step(form: &TripRequest) -> String {
    [
        WizardStep::Summary.title(),
        RULE.to_string(),
        "아래는 입력하신 내용을 요약한 것입니다. 내용을 확인하신 후 'AI 계획 생성하기'를 선택해 주세요."
            .to_string(),
        String::new(),
        render_summary(form),
        String::new(),
        "[Enter] AI 계획 생성하기   [b] 이전 (수정)   [q] 종료".to_string(),
    ]
    .join("\n")
}

/// Read-only summary of the request in three groups.
pub fn render_summary(form: &TripRequest) -> String {
    let restrictions = if form.style.food_restrictions.is_empty() {
        NONE_LABEL.to_string()
    } else {
        join_list(&form.style.food_restrictions)
    };

    let groups: [(&str, Vec<(&str, String)>); 3] = [
        (
            "기본 정보",
            vec![
                ("여행지", form.destination.clone()),
                (
                    "기간 / 인원",
                    format!("{}일 / {}명", form.duration_days, form.party_size),
                ),
                ("숙소 위치", form.accommodation.address_name.clone()),
                ("총 경비 (제외)", format!("{} KRW", format_krw(form.budget_krw))),
            ],
        ),
        (
            "교통 및 동선",
            vec![
                (
                    "주요 수단",
                    form.transportation.main_mode.label().to_string(),
                ),
                (
                    "선호 보조 수단",
                    join_list(&form.transportation.preferences),
                ),
                ("걷기 선호도", form.style.walking.label().to_string()),
            ],
        ),
        (
            "취향 및 제약 조건",
            vec![
                ("여행 페이스", form.style.pace.label().to_string()),
                ("선호 분위기", form.style.atmosphere.label().to_string()),
                ("주요 관심사", join_list(&form.style.interests)),
                ("식사 제한", restrictions),
            ],
        ),
    ];

    let mut lines = Vec::new();
    for (title, rows) in groups {
        lines.push(format!("■ {title}"));
        for (header, value) in rows {
            lines.push(format!("  {header}: {value}"));
        }
    }
    lines.join("\n")
}

pub fn render_loading() -> String {
    "AI가 여행 계획을 생성 중입니다...\n잠시만 기다려 주세요 (약 10~20초 소요)".to_string()
}

pub fn render_error(message: &str) -> String {
    format!("오류 발생\n{message}")
}

pub fn render_result(response: &TripResponse) -> String {
    let mut lines = vec![
        response.trip_title.clone(),
        RULE.to_string(),
        response.overall_summary.clone(),
    ];

    for day in &response.plan {
        lines.push(String::new());
        lines.push(render_day_card(day));
    }

    lines.join("\n")
}

/// One day card: heading plus one row per scheduled item.
pub fn render_day_card(day: &DailyPlan) -> String {
    let mut lines = vec![format!("▌ Day {}. {}", day.day, day.theme)];
    for item in &day.schedule {
        lines.push(render_schedule_row(item));
    }
    lines.join("\n")
}

pub fn render_schedule_row(item: &ScheduleItem) -> String {
    let mut lines = vec![format!(
        "  {:<6} {} {}",
        item.time,
        item.kind.glyph(),
        item.title
    )];
    if !item.description.is_empty() {
        lines.push(format!("         {}", item.description));
    }
    if let Some(location) = &item.location {
        lines.push(format!("         📌 {} ({})", location.name, location.address));
    }
    lines.push(format!("         {}", cost_label(item.cost_krw)));
    lines.join("\n")
}

/// Cost line of a schedule row; zero or negative costs show the no-cost label.
pub fn cost_label(cost_krw: i64) -> String {
    if cost_krw > 0 {
        format!("예상 비용: {} KRW", format_krw(cost_krw.unsigned_abs()))
    } else {
        NO_COST_LABEL.to_string()
    }
}

/// Format an amount with thousands separators, e.g. `1,250,000`.
pub fn format_krw(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Prompt shown before reading a value for `field`
pub fn field_prompt(field: FormField) -> String {
    format!("{} > ", field.label())
}
