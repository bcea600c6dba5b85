use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    schemas::{decode_json, request_schema, validate_against_schema},
};

/// Travel preferences collected by the wizard and posted to the planner API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TripRequest {
    /// City or region to travel to (e.g., "부산")
    pub destination: String,
    /// Number of travel days, at least 1
    #[schemars(range(min = 1))]
    pub duration_days: u32,
    /// Number of travelers, at least 1
    #[schemars(range(min = 1))]
    pub party_size: u32,
    /// Where the party is staying
    pub accommodation: Accommodation,
    /// Total spend excluding lodging and flights, in KRW
    pub budget_krw: u64,
    /// Main transport mode plus free-form preference tags
    pub transportation: Transportation,
    /// Pace, atmosphere, walking tolerance, interests and food restrictions
    pub style: Style,
}

/// Approximate lodging location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Accommodation {
    /// Street or neighbourhood address (e.g., "해운대구 우동")
    pub address_name: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Transportation {
    pub main_mode: MainMode,
    /// Secondary transport tags such as "subway" or "taxi_if_late_night"
    pub preferences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Style {
    pub pace: Pace,
    pub atmosphere: Atmosphere,
    pub walking: Walking,
    /// Free-text interests (e.g., "카페", "야경")
    pub interests: Vec<String>,
    /// Foods the party cannot eat
    pub food_restrictions: Vec<String>,
}

fn default_latitude() -> f64 {
    35.16
}

fn default_longitude() -> f64 {
    129.1636
}

impl Default for TripRequest {
    fn default() -> Self {
        Self {
            destination: "부산".to_string(),
            duration_days: 3,
            party_size: 2,
            accommodation: Accommodation {
                address_name: "해운대구 우동".to_string(),
                latitude: default_latitude(),
                longitude: default_longitude(),
            },
            budget_krw: 500_000,
            transportation: Transportation {
                main_mode: MainMode::PublicTransport,
                preferences: vec!["subway".to_string(), "taxi_if_late_night".to_string()],
            },
            style: Style {
                pace: Pace::Relaxed,
                atmosphere: Atmosphere::Quiet,
                walking: Walking::Dislike,
                interests: vec![
                    "카페".to_string(),
                    "해변".to_string(),
                    "야경".to_string(),
                    "쇼핑".to_string(),
                ],
                food_restrictions: vec!["갑각류".to_string(), "매운 음식".to_string()],
            },
        }
    }
}

/// Decode a request saved as JSON. The payload is checked against the request
/// schema first so every failing field is reported, not just the first one.
pub fn decode_trip_request(raw: &str) -> Result<TripRequest> {
    let payload: serde_json::Value = serde_json::from_str(raw)?;
    validate_against_schema(&request_schema()?, &payload, "trip request")?;
    decode_json(raw, "trip request")
}

/// A closed set of choices with a wire value, a summary label and an option label.
pub trait Choice: Copy + Sized + 'static {
    /// All variants in the order they are offered on screen
    const ALL: &'static [Self];

    fn wire_value(self) -> &'static str;

    /// Label used on the summary screen
    fn label(self) -> &'static str;

    /// Label used when listing the options on an input step
    fn option_label(self) -> &'static str {
        self.label()
    }

    /// Resolve the wire value, the summary label, or a 1-based option number.
    fn parse_choice(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|idx| Self::ALL.get(idx))
                .copied();
        }
        Self::ALL.iter().copied().find(|choice| {
            choice.wire_value().eq_ignore_ascii_case(input) || choice.label() == input
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MainMode {
    OwnCar,
    RentalCar,
    PublicTransport,
}

impl Choice for MainMode {
    const ALL: &'static [Self] = &[Self::PublicTransport, Self::RentalCar, Self::OwnCar];

    fn wire_value(self) -> &'static str {
        match self {
            Self::OwnCar => "own_car",
            Self::RentalCar => "rental_car",
            Self::PublicTransport => "public_transport",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::OwnCar => "자차",
            Self::RentalCar => "렌트카",
            Self::PublicTransport => "대중교통",
        }
    }

    fn option_label(self) -> &'static str {
        match self {
            Self::PublicTransport => "대중교통 (지하철/버스)",
            other => other.label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Pace {
    Relaxed,
    Packed,
}

impl Choice for Pace {
    const ALL: &'static [Self] = &[Self::Relaxed, Self::Packed];

    fn wire_value(self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Packed => "packed",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Relaxed => "여유롭게",
            Self::Packed => "빡빡하게",
        }
    }

    fn option_label(self) -> &'static str {
        match self {
            Self::Relaxed => "여유롭게 (Relaxed)",
            Self::Packed => "빡빡하게 (Packed)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Atmosphere {
    Quiet,
    Crowded,
}

impl Choice for Atmosphere {
    const ALL: &'static [Self] = &[Self::Quiet, Self::Crowded];

    fn wire_value(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Crowded => "crowded",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Quiet => "조용하고 한적한 곳",
            Self::Crowded => "시끌벅적한 곳",
        }
    }

    fn option_label(self) -> &'static str {
        match self {
            Self::Quiet => "조용하고 한적한 곳",
            Self::Crowded => "사람이 많고 시끌벅적한 곳",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Walking {
    Dislike,
    Neutral,
    Like,
}

impl Choice for Walking {
    const ALL: &'static [Self] = &[Self::Dislike, Self::Neutral, Self::Like];

    fn wire_value(self) -> &'static str {
        match self {
            Self::Dislike => "dislike",
            Self::Neutral => "neutral",
            Self::Like => "like",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Dislike => "걷기 싫음",
            Self::Neutral => "적당히",
            Self::Like => "걷기 좋음",
        }
    }

    fn option_label(self) -> &'static str {
        match self {
            Self::Dislike => "걷기 싫음 (Dislike)",
            Self::Neutral => "적당히 (Neutral)",
            Self::Like => "걷기 좋음 (Like)",
        }
    }
}
