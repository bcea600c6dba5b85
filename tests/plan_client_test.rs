use std::time::Duration;

use mockito::Matcher;
use plan_ai::{
    types::ItemKind, PlanAiError, PlanClient, Planner, TripRequest, GENERIC_FAILURE_MESSAGE,
};
use serde_json::json;

fn itinerary() -> serde_json::Value {
    json!({
        "trip_title": "부산 2박 3일",
        "overall_summary": "바다와 야경",
        "plan": [
            {
                "day": 1,
                "theme": "해운대",
                "schedule": [
                    {
                        "time": "10:00",
                        "type": "travel",
                        "title": "부산역 도착",
                        "description": "KTX 이동",
                        "location": {
                            "name": "부산역",
                            "address": "동구 중앙대로 206",
                            "latitude": 35.115,
                            "longitude": 129.041
                        },
                        "cost_krw": 0
                    },
                    {
                        "time": "12:30",
                        "type": "food",
                        "title": "돼지국밥",
                        "description": "점심",
                        "location": {
                            "name": "국밥집",
                            "address": "해운대구 우동",
                            "latitude": 35.16,
                            "longitude": 129.16
                        },
                        "cost_krw": 20000
                    }
                ]
            },
            {
                "day": 2,
                "theme": "광안리",
                "schedule": []
            }
        ]
    })
}

fn client_for(server: &mockito::ServerGuard) -> PlanClient {
    PlanClient::new(format!("{}/api/v1/plan", server.url())).with_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn test_posts_request_and_decodes_itinerary() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/plan")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "destination": "부산",
            "duration_days": 3,
            "accommodation": { "address_name": "해운대구 우동" },
            "transportation": { "main_mode": "public_transport" },
            "style": { "pace": "relaxed", "walking": "dislike" }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(itinerary().to_string())
        .create_async()
        .await;

    let response = client_for(&server)
        .plan(&TripRequest::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.trip_title, "부산 2박 3일");
    assert_eq!(response.plan.len(), 2);
    assert_eq!(response.item_count(), 2);
    assert_eq!(response.plan[0].schedule[0].kind, ItemKind::Travel);
    assert_eq!(response.plan[0].schedule[1].cost_krw, 20000);
}

#[tokio::test]
async fn test_server_detail_is_kept_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let detail = "AI 계획 생성에 실패했습니다. 잠시 후 다시 시도해 주세요. (오류: quota)";
    let mock = server
        .mock("POST", "/api/v1/plan")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(json!({ "detail": detail }).to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .submit(&TripRequest::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, PlanAiError::Api { status: 500, .. }));
    assert_eq!(err.detail(), Some(detail));
    assert_eq!(err.user_message(), detail);
}

#[tokio::test]
async fn test_error_without_detail_uses_generic_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/v1/plan")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .submit(&TripRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PlanAiError::Api {
            status: 502,
            detail: None
        }
    ));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_validation_error_list_is_not_a_detail() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/v1/plan")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "detail": [{ "loc": ["body", "party_size"], "msg": "field required" }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client_for(&server)
        .submit(&TripRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.detail(), None);
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_malformed_success_body_is_a_validation_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/v1/plan")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "trip_title": "부산", "plan": [] }).to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .submit(&TripRequest::default())
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(err.to_string().contains("overall_summary"));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_planner_uses_generic_message() {
    let client = PlanClient::new("http://127.0.0.1:1/api/v1/plan").with_timeout(Duration::from_secs(2));

    let err = client.submit(&TripRequest::default()).await.unwrap_err();

    assert!(matches!(
        err,
        PlanAiError::Http(_) | PlanAiError::Timeout(_)
    ));
    assert_eq!(err.detail(), None);
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}
