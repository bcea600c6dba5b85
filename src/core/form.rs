use serde::{Deserialize, Serialize};

use crate::{
    error::{PlanAiError, Result},
    types::{Atmosphere, Choice, MainMode, Pace, TripRequest, Walking},
};

/// An editable field of the trip request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Destination,
    DurationDays,
    PartySize,
    AddressName,
    BudgetKrw,
    MainMode,
    Pace,
    Walking,
    Atmosphere,
    Interests,
    FoodRestrictions,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::Destination,
        FormField::DurationDays,
        FormField::PartySize,
        FormField::AddressName,
        FormField::BudgetKrw,
        FormField::MainMode,
        FormField::Pace,
        FormField::Walking,
        FormField::Atmosphere,
        FormField::Interests,
        FormField::FoodRestrictions,
    ];

    /// Wire name of the field inside the request JSON
    pub fn name(self) -> &'static str {
        match self {
            FormField::Destination => "destination",
            FormField::DurationDays => "duration_days",
            FormField::PartySize => "party_size",
            FormField::AddressName => "address_name",
            FormField::BudgetKrw => "budget_krw",
            FormField::MainMode => "main_mode",
            FormField::Pace => "pace",
            FormField::Walking => "walking",
            FormField::Atmosphere => "atmosphere",
            FormField::Interests => "interests",
            FormField::FoodRestrictions => "food_restrictions",
        }
    }

    /// Prompt label shown above the input
    pub fn label(self) -> &'static str {
        match self {
            FormField::Destination => "도시 이름",
            FormField::DurationDays => "여행 일수",
            FormField::PartySize => "인원수",
            FormField::AddressName => "숙소 주소 (예: 해운대구 우동)",
            FormField::BudgetKrw => "(숙소/항공권 제외) 1인당 아니고 '총' 경비",
            FormField::MainMode => "교통수단 선택",
            FormField::Pace => "여행 페이스",
            FormField::Walking => "걷기 선호도",
            FormField::Atmosphere => "분위기 선택",
            FormField::Interests => "여행 관심사 (콤마로 구분, 예: 카페, 해변, 야경, 쇼핑)",
            FormField::FoodRestrictions => {
                "못 먹는 음식 (콤마로 구분, 예: 갑각류, 매운 음식, 돼지고기)"
            }
        }
    }

    /// Option labels for closed-choice fields, in numbering order
    pub fn options(self) -> Option<Vec<&'static str>> {
        match self {
            FormField::MainMode => Some(option_labels::<MainMode>()),
            FormField::Pace => Some(option_labels::<Pace>()),
            FormField::Walking => Some(option_labels::<Walking>()),
            FormField::Atmosphere => Some(option_labels::<Atmosphere>()),
            _ => None,
        }
    }
}

fn option_labels<C: Choice>() -> Vec<&'static str> {
    C::ALL.iter().map(|choice| choice.option_label()).collect()
}

/// Split comma-separated text into trimmed, non-empty items.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join list items back into the comma-separated form shown for editing.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Drop thousands separators, accepting commas only between groups of three digits.
fn strip_thousands(input: &str) -> Option<String> {
    let mut groups = input.split(',');
    let head = groups.next()?;
    let mut digits = head.to_string();
    for group in groups {
        if head.is_empty() || head.len() > 3 || group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

fn parse_count(field: FormField, input: &str, min: u64) -> Result<u64> {
    let value: u64 = strip_thousands(input.trim())
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| PlanAiError::InvalidInput {
            field: field.name(),
            message: format!("'{}' is not a whole number", input.trim()),
        })?;

    if value < min {
        return Err(PlanAiError::InvalidInput {
            field: field.name(),
            message: format!("must be at least {min}"),
        });
    }
    Ok(value)
}

fn parse_small_count(field: FormField, input: &str) -> Result<u32> {
    let value = parse_count(field, input, 1)?;
    u32::try_from(value).map_err(|_| PlanAiError::InvalidInput {
        field: field.name(),
        message: format!("{value} is too large"),
    })
}

fn parse_choice<C: Choice>(field: FormField, input: &str) -> Result<C> {
    C::parse_choice(input).ok_or_else(|| PlanAiError::InvalidInput {
        field: field.name(),
        message: format!(
            "expected one of {}",
            C::ALL
                .iter()
                .map(|choice| choice.wire_value())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    })
}

impl TripRequest {
    /// Parse `input` for `field` and store it, leaving every other field untouched.
    ///
    /// Invalid input is rejected and the request keeps its previous value.
    pub fn apply(&mut self, field: FormField, input: &str) -> Result<()> {
        match field {
            FormField::Destination => self.destination = input.trim().to_string(),
            FormField::DurationDays => self.duration_days = parse_small_count(field, input)?,
            FormField::PartySize => self.party_size = parse_small_count(field, input)?,
            FormField::AddressName => self.accommodation.address_name = input.trim().to_string(),
            FormField::BudgetKrw => self.budget_krw = parse_count(field, input, 0)?,
            FormField::MainMode => self.transportation.main_mode = parse_choice(field, input)?,
            FormField::Pace => self.style.pace = parse_choice(field, input)?,
            FormField::Walking => self.style.walking = parse_choice(field, input)?,
            FormField::Atmosphere => self.style.atmosphere = parse_choice(field, input)?,
            FormField::Interests => self.style.interests = parse_list(input),
            FormField::FoodRestrictions => self.style.food_restrictions = parse_list(input),
        }
        Ok(())
    }

    /// Current value of `field` as it is shown in the input prompt
    pub fn display(&self, field: FormField) -> String {
        match field {
            FormField::Destination => self.destination.clone(),
            FormField::DurationDays => self.duration_days.to_string(),
            FormField::PartySize => self.party_size.to_string(),
            FormField::AddressName => self.accommodation.address_name.clone(),
            FormField::BudgetKrw => self.budget_krw.to_string(),
            FormField::MainMode => self.transportation.main_mode.option_label().to_string(),
            FormField::Pace => self.style.pace.option_label().to_string(),
            FormField::Walking => self.style.walking.option_label().to_string(),
            FormField::Atmosphere => self.style.atmosphere.option_label().to_string(),
            FormField::Interests => join_list(&self.style.interests),
            FormField::FoodRestrictions => join_list(&self.style.food_restrictions),
        }
    }
}
