use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::Result, schemas::decode_json};

/// Itinerary returned by the planner API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TripResponse {
    /// Title of the trip
    pub trip_title: String,
    /// Short summary of the whole plan
    pub overall_summary: String,
    /// Day-by-day plans in order
    pub plan: Vec<DailyPlan>,
}

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyPlan {
    /// 1-based day counter
    pub day: u32,
    /// Theme of the day
    pub theme: String,
    /// Scheduled items in chronological order
    pub schedule: Vec<ScheduleItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScheduleItem {
    /// Start time, e.g. "14:00"
    pub time: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Estimated cost in KRW; missing or null means free
    #[serde(default, deserialize_with = "null_as_zero")]
    #[schemars(with = "Option<i64>")]
    pub cost_krw: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Category tag of a schedule item. Unknown tags decode as `Etc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Accommodation,
    Cafe,
    Food,
    Activity,
    Travel,
    Shopping,
    Sightseeing,
    #[serde(other)]
    Etc,
}

impl ItemKind {
    /// Glyph shown next to the schedule row
    pub fn glyph(self) -> &'static str {
        match self {
            ItemKind::Food => "🍴",
            ItemKind::Cafe => "☕",
            ItemKind::Accommodation => "🏨",
            ItemKind::Activity => "☀",
            ItemKind::Shopping => "🛒",
            ItemKind::Travel => "✈",
            ItemKind::Sightseeing => "📍",
            ItemKind::Etc => "🕒",
        }
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

impl TripResponse {
    /// Total number of schedule rows across all days
    pub fn item_count(&self) -> usize {
        self.plan.iter().map(|day| day.schedule.len()).sum()
    }
}

/// Decode a planner response body, reporting the JSON path of any mismatch.
pub fn decode_trip_response(raw: &str) -> Result<TripResponse> {
    decode_json(raw, "planner response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanAiError;
    use serde_json::json;

    fn sample_body() -> serde_json::Value {
        json!({
            "trip_title": "부산 2박 3일 힐링 여행",
            "overall_summary": "바다와 카페를 중심으로 한 여유로운 일정",
            "plan": [{
                "day": 1,
                "theme": "해운대 산책",
                "schedule": [{
                    "time": "14:00",
                    "type": "cafe",
                    "title": "오션뷰 카페",
                    "description": "바다를 보며 휴식",
                    "location": {
                        "name": "카페 해운대",
                        "address": "해운대구 우동 1",
                        "latitude": 35.16,
                        "longitude": 129.16
                    },
                    "cost_krw": 12000
                }, {
                    "time": "16:00",
                    "type": "sightseeing",
                    "title": "해변 산책",
                    "description": "해운대 해수욕장",
                    "location": {
                        "name": "해운대 해수욕장",
                        "address": "해운대구 우동",
                        "latitude": 35.158,
                        "longitude": 129.16
                    }
                }]
            }]
        })
    }

    #[test]
    fn test_decode_full_response() {
        let response = decode_trip_response(&sample_body().to_string()).unwrap();

        assert_eq!(response.trip_title, "부산 2박 3일 힐링 여행");
        assert_eq!(response.plan.len(), 1);
        assert_eq!(response.item_count(), 2);

        let items = &response.plan[0].schedule;
        assert_eq!(items[0].kind, ItemKind::Cafe);
        assert_eq!(items[0].cost_krw, 12000);
        assert_eq!(items[1].cost_krw, 0);
        assert_eq!(
            items[1].location.as_ref().map(|l| l.name.as_str()),
            Some("해운대 해수욕장")
        );
    }

    #[test]
    fn test_null_cost_and_unknown_kind() {
        let mut body = sample_body();
        body["plan"][0]["schedule"][0]["cost_krw"] = serde_json::Value::Null;
        body["plan"][0]["schedule"][0]["type"] = json!("nightlife");
        body["plan"][0]["schedule"][0]
            .as_object_mut()
            .unwrap()
            .remove("location");

        let response = decode_trip_response(&body.to_string()).unwrap();
        let item = &response.plan[0].schedule[0];
        assert_eq!(item.cost_krw, 0);
        assert_eq!(item.kind, ItemKind::Etc);
        assert!(item.location.is_none());
    }

    #[test]
    fn test_decode_reports_path() {
        let mut body = sample_body();
        body["plan"][0]["day"] = json!("first");

        let err = decode_trip_response(&body.to_string()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("plan[0].day"), "unexpected: {message}");
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode_trip_response("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, PlanAiError::Validation(_)));
    }
}
