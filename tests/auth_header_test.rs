use httpmock::prelude::*;
use party_up::{CliConfig, CycleRunner, CycleSchedule, InvitePipeline};

#[tokio::test]
async fn test_auth_headers_sent_on_both_endpoints() {
    let server = MockServer::start();

    let fetch_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/looking-for-party")
            .header("content-type", "application/json")
            .header("x-client", "test-user-PartyUp")
            .header("x-api-user", "test-user")
            .header("x-api-key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "success": true,
                "data": [{"_id": "u1", "stats": {"lvl": 5}}]
            }));
    });

    let invite_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v3/groups/party/invite")
            .header("content-type", "application/json")
            .header("x-client", "test-user-PartyUp")
            .header("x-api-user", "test-user")
            .header("x-api-key", "test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"success": true, "data": []}));
    });

    let config = CliConfig {
        api_user: "test-user".to_string(),
        api_key: "test-key".to_string(),
        min_lvl: 0,
        fetch_interval: 0,
        language: String::new(),
        only_active: false,
        max_cycles: 1,
        single_run: false,
        base_url: server.base_url(),
        verbose: false,
    };

    let schedule = CycleSchedule::from_config(&config);
    let pipeline = InvitePipeline::new(config).unwrap();
    let runner = CycleRunner::new(pipeline, schedule);

    runner.run().await.unwrap();

    fetch_mock.assert();
    invite_mock.assert();
}
