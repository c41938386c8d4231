//! End-to-end tests against a mock HTTP server.

mod common;

use std::time::Duration;

use fullcontact_client::{
    AudienceRequest, CompanyRequest, FullContactError, PersonRequest, ResolveRequest,
    StatusRetryHandler, Tag, TagsRequest,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_person_enrich_success() {
    let server = MockServer::start().await;
    common::post_v3("person.enrich")
        .and(header("Content-Type", "application/json"))
        .and(header("User-Agent", fullcontact_client::config::USER_AGENT))
        .and(body_json(json!({"emails": ["bart@fullcontact.com"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fullName": "Bart Lorang",
            "ageRange": "30-39",
            "details": {"emails": [{"label": "work", "value": "bart@fullcontact.com"}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = PersonRequest::builder()
        .email("bart@fullcontact.com")
        .build()
        .unwrap();
    let response = common::client(&server).person_enrich(&request).await;

    assert!(response.is_successful());
    assert_eq!(response.status_code, 200);
    assert_eq!(response.status, "200 OK");
    let person = response.into_result().unwrap();
    assert_eq!(person.full_name.as_deref(), Some("Bart Lorang"));
    assert_eq!(person.details.unwrap().emails.len(), 1);
}

#[tokio::test]
async fn test_extra_headers_are_sent() {
    let server = MockServer::start().await;
    common::post_v3("company.enrich")
        .and(header("Reporting-Key", "clientname"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "FullContact Inc."})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::builder(&server)
        .header("Reporting-Key", "clientname")
        .build()
        .unwrap();
    let request = CompanyRequest::builder().domain("fullcontact.com").build().unwrap();

    let response = client.company_enrich(&request).await;

    assert_eq!(
        response.payload().and_then(|c| c.name.as_deref()),
        Some("FullContact Inc.")
    );
}

#[tokio::test]
async fn test_header_overrides_replace_defaults() {
    let server = MockServer::start().await;
    common::post_v3("person.enrich")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fullName": "Bart Lorang"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::builder(&server)
        .header("content-type", "application/json; charset=utf-8")
        .header("user-agent", "MyApp/1.0")
        .build()
        .unwrap();
    let request = PersonRequest::builder()
        .email("bart@fullcontact.com")
        .build()
        .unwrap();

    let response = client.person_enrich(&request).await;
    assert!(response.is_successful());

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let headers = &received[0].headers;
    let values = |name: &str| -> Vec<String> {
        headers
            .get_all(name)
            .iter()
            .map(|value| value.to_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(values("content-type"), vec!["application/json; charset=utf-8"]);
    assert_eq!(values("user-agent"), vec!["MyApp/1.0"]);
    assert_eq!(values("authorization").len(), 1);
}

#[tokio::test]
async fn test_rate_limited_retries_then_fails() {
    let server = MockServer::start().await;
    common::post_v3("identity.resolve")
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .expect(3)
        .mount(&server)
        .await;

    let client = common::client_with_retry(&server, StatusRetryHandler::rate_limited(2, 10));
    let request = ResolveRequest::builder().record_id("r1").build().unwrap();

    let response = client.identity_resolve(&request).await;

    assert_eq!(response.status_code, 429);
    assert_eq!(response.error(), Some(&FullContactError::api(429, "rate limited")));
}

#[tokio::test]
async fn test_retry_recovers() {
    let server = MockServer::start().await;
    common::post_v3("identity.map")
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    common::post_v3("identity.map")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recordIds": ["r1"]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_with_retry(&server, StatusRetryHandler::rate_limited(2, 10));
    let request = ResolveRequest::builder()
        .email("bart@fullcontact.com")
        .record_id("r1")
        .build()
        .unwrap();

    let response = client.identity_map(&request).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.payload().unwrap().record_ids, vec!["r1".to_string()]);
}

#[tokio::test]
async fn test_non_retryable_status_is_terminal() {
    let server = MockServer::start().await;
    common::post_v3("tags.create")
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"status":401,"message":"Invalid key"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_with_retry(&server, StatusRetryHandler::rate_limited(2, 10));
    let request = TagsRequest::builder()
        .record_id("k1")
        .tag(Tag::new("gender", "male"))
        .build()
        .unwrap();

    let response = client.tags_create(&request).await;

    assert_eq!(response.status, "401 Unauthorized");
    assert_eq!(response.error().and_then(FullContactError::status_code), Some(401));
}

#[tokio::test]
async fn test_resolve_with_tags_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/identity.resolve"))
        .and(query_param("tags", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recordIds": ["r1"],
            "tags": [{"key": "gender", "value": "male"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ResolveRequest::builder().record_id("r1").build().unwrap();
    let response = common::client(&server).identity_resolve_with_tags(&request).await;

    assert_eq!(response.payload().unwrap().tags, vec![Tag::new("gender", "male")]);
}

#[tokio::test]
async fn test_audience_round_trip() {
    let server = MockServer::start().await;
    common::post_v3("audience.create")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"requestId": "req-1"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/audience.download"))
        .and(query_param("requestId", "req-1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"\x1f\x8b\x08\x00gz".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let request = AudienceRequest::builder()
        .webhook_url("https://example.com/hook")
        .tag(Tag::new("gender", "male"))
        .build()
        .unwrap();

    let created = client.audience_create(&request).await.into_result().unwrap();
    let request_id = created.request_id.unwrap();
    let downloaded = client.audience_download(&request_id).await.into_result().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join(format!("{}_audienceFile.json.gz", request_id));
    downloaded.write_audience_bytes_to_file(&file).await.unwrap();
    assert_eq!(std::fs::read(&file).unwrap(), b"\x1f\x8b\x08\x00gz");
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let server = MockServer::start().await;
    common::post_v3("person.enrich")
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = common::builder(&server).timeout_millis(50).build().unwrap();
    let request = PersonRequest::builder().email("slow@example.com").build().unwrap();

    let response = client.person_enrich(&request).await;

    assert_eq!(response.status_code, 0);
    assert_eq!(
        response.error(),
        Some(&FullContactError::Timeout {
            timeout: Duration::from_millis(50)
        })
    );
}

#[tokio::test]
async fn test_concurrent_calls_complete_independently() {
    let server = MockServer::start().await;
    common::post_v3("identity.resolve")
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"personIds": ["p"]})))
        .expect(8)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let requests: Vec<ResolveRequest> = (0..8)
        .map(|i| ResolveRequest::builder().record_id(format!("r{}", i)).build().unwrap())
        .collect();

    // All handles are created before any is awaited.
    let handles: Vec<_> = requests.iter().map(|r| client.identity_resolve(r)).collect();
    let responses = futures::future::join_all(handles).await;

    assert!(responses.iter().all(|r| r.is_successful()));
}

#[tokio::test]
async fn test_dropped_handle_does_not_cancel() {
    let server = MockServer::start().await;
    common::post_v3("tags.delete")
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client(&server);
    let request = TagsRequest::builder()
        .record_id("k1")
        .tag(Tag::new("gender", "male"))
        .build()
        .unwrap();

    drop(client.tags_delete(&request));

    for _ in 0..50 {
        if !server.received_requests().await.unwrap_or_default().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
