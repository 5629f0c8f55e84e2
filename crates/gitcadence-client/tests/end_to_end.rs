//! End-to-end flow: analyze call → view-model conversion
//!
//! Exercises the full UI data path against a mocked backend: request goes
//! out, the envelope is unwrapped, and the payload converts to the
//! presentation view model.

use gitcadence_client::{AnalysisClient, ClientConfig};
use gitcadence_core::AnalysisRequest;
use gitcadence_view::convert;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_analyze_then_convert() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "message": "Analysis completed",
            "data": {
                "repositoryName": "r",
                "totalCommits": 60,
                "timeRange": {"start": "2023-01-01", "end": "2024-01-01", "durationDays": 365},
                "hourDistribution": [
                    {"hour": 9, "count": 12, "percentage": 20.0},
                    {"hour": 21, "count": 6, "percentage": 10.0}
                ],
                "weekDistribution": [
                    {"day": 1, "dayName": "Monday", "count": 30, "percentage": 50.0},
                    {"day": 6, "dayName": "Saturday", "count": 5, "percentage": 8.3}
                ],
                "statistics": {
                    "index996": 0.42,
                    "workingType": "996",
                    "overtimeRatio": 0.3,
                    "workdayCommits": 55,
                    "weekendCommits": 5,
                    "workHourCommits": 40,
                    "afterHourCommits": 20
                },
                "topContributors": []
            },
            "timestamp": 1700000000
        })))
        .mount(&mock_server)
        .await;

    let client = AnalysisClient::new(ClientConfig::new(mock_server.uri())).unwrap();
    let result = client
        .analyze_repository(&AnalysisRequest::new("https://example.com/r.git"))
        .await
        .unwrap();

    let view = convert(&result);

    assert_eq!(view.working_type_str, "Work overtime occasionally");
    assert!(view.is_standard);
    assert_eq!(view.time_str, "2023-01-01 ~ 2024-01-01");
    assert_eq!(view.hour_distribution[0].label, "9:00");
    assert_eq!(view.week_distribution[1].label, "Sat");
}
