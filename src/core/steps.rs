use serde::{Deserialize, Serialize};

use super::form::FormField;

/// Number of input steps between the welcome screen and the summary.
pub const INPUT_STEPS: u8 = 9;

/// One screen of the linear wizard, keyed by its step index (0..=10)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Welcome,
    Destination,
    Duration,
    PartySize,
    Accommodation,
    Budget,
    Transportation,
    PaceAndWalking,
    Atmosphere,
    InterestsAndRestrictions,
    Summary,
}

impl WizardStep {
    pub const ALL: [WizardStep; 11] = [
        WizardStep::Welcome,
        WizardStep::Destination,
        WizardStep::Duration,
        WizardStep::PartySize,
        WizardStep::Accommodation,
        WizardStep::Budget,
        WizardStep::Transportation,
        WizardStep::PaceAndWalking,
        WizardStep::Atmosphere,
        WizardStep::InterestsAndRestrictions,
        WizardStep::Summary,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The following step; the summary is the last one
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(WizardStep::Summary)
    }

    /// The preceding step; the welcome screen is the first one
    pub fn prev(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(WizardStep::Welcome)
    }

    /// Form fields edited on this step, in prompt order
    pub fn fields(self) -> &'static [FormField] {
        match self {
            WizardStep::Welcome | WizardStep::Summary => &[],
            WizardStep::Destination => &[FormField::Destination],
            WizardStep::Duration => &[FormField::DurationDays],
            WizardStep::PartySize => &[FormField::PartySize],
            WizardStep::Accommodation => &[FormField::AddressName],
            WizardStep::Budget => &[FormField::BudgetKrw],
            WizardStep::Transportation => &[FormField::MainMode],
            WizardStep::PaceAndWalking => &[FormField::Pace, FormField::Walking],
            WizardStep::Atmosphere => &[FormField::Atmosphere],
            WizardStep::InterestsAndRestrictions => {
                &[FormField::Interests, FormField::FoodRestrictions]
            }
        }
    }

    fn question(self) -> &'static str {
        match self {
            WizardStep::Welcome => "Plan-AI",
            WizardStep::Destination => "어디로 떠나시나요?",
            WizardStep::Duration => "여행 기간이 어떻게 되나요?",
            WizardStep::PartySize => "몇 명이서 여행하나요?",
            WizardStep::Accommodation => "숙소는 어디쯤인가요?",
            WizardStep::Budget => "총 여행 경비는 얼마인가요?",
            WizardStep::Transportation => "주요 교통수단은 무엇인가요?",
            WizardStep::PaceAndWalking => "여행 페이스와 걷기 선호도",
            WizardStep::Atmosphere => "선호하는 여행 분위기",
            WizardStep::InterestsAndRestrictions => "관심사 및 식사 제한",
            WizardStep::Summary => "AI 계획을 생성할까요?",
        }
    }

    /// Screen heading, prefixed with the progress counter on input steps
    pub fn title(self) -> String {
        match self {
            WizardStep::Welcome => self.question().to_string(),
            WizardStep::Summary => format!("({INPUT_STEPS}/{INPUT_STEPS}) {}", self.question()),
            step => format!("({}/{INPUT_STEPS}) {}", step.index(), step.question()),
        }
    }

    pub fn is_input(self) -> bool {
        !self.fields().is_empty()
    }
}
