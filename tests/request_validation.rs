//! Validation performed before any network activity.

mod common;

use fullcontact_client::{
    FullContactError, Location, PersonName, PersonRequest, Profile, ResolveRequest, Tag,
    TagsRequest,
};
use pretty_assertions::assert_eq;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn silent_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    server
}

fn message(error: Option<&FullContactError>) -> String {
    error.map(ToString::to_string).unwrap_or_default()
}

#[tokio::test]
async fn test_absent_requests_are_rejected() {
    let server = silent_server().await;
    let client = common::client(&server);

    let response = client.identity_resolve(None).await;
    assert_eq!(message(response.error()), "FullContactError: Resolve Request can't be nil");
    assert_eq!(response.status_code, 0);
    assert_eq!(response.status, "Validation Failed");

    let response = client.tags_create(None).await;
    assert_eq!(message(response.error()), "FullContactError: Tags Request can't be nil");

    let response = client.permission_find(None).await;
    assert_eq!(message(response.error()), "FullContactError: Permission Request can't be nil");
}

#[tokio::test]
async fn test_identity_map_rejects_person_id() {
    let server = silent_server().await;
    let request = ResolveRequest::builder()
        .email("bart@fullcontact.com")
        .person_id("p1")
        .build()
        .unwrap();

    let response = common::client(&server).identity_map(&request).await;

    assert_eq!(
        message(response.error()),
        "FullContactError: Invalid map request, person id must be empty"
    );
}

#[tokio::test]
async fn test_identity_map_requires_signal() {
    let server = silent_server().await;
    let client = common::client(&server);
    let request = ResolveRequest::builder().record_id("r1").build().unwrap();

    for response in [
        client.identity_map(&request).await,
        client.identity_map_resolve(&request).await,
    ] {
        assert_eq!(
            message(response.error()),
            "FullContactError: Invalid map request, Any of Email, Phone, SocialProfile, Name and Location must be present"
        );
    }
}

#[tokio::test]
async fn test_identity_resolve_rejects_both_ids() {
    let server = silent_server().await;
    let client = common::client(&server);
    let request = ResolveRequest::builder()
        .record_id("r1")
        .person_id("p1")
        .build()
        .unwrap();

    let response = client.identity_resolve(&request).await;
    assert_eq!(
        message(response.error()),
        "FullContactError: Both record id and person id are populated, please select one"
    );
    let response = client.identity_resolve_with_tags(&request).await;
    assert!(response.error().is_some_and(FullContactError::is_validation));
}

#[tokio::test]
async fn test_identity_delete_requires_record_id() {
    let server = silent_server().await;
    let request = ResolveRequest::builder()
        .email("bart@fullcontact.com")
        .build()
        .unwrap();

    let response = common::client(&server).identity_delete(&request).await;

    assert_eq!(message(response.error()), "FullContactError: recordId param must be specified");
}

#[test]
fn test_builder_errors_are_synchronous() {
    let err = ResolveRequest::builder()
        .name(PersonName::full("Marian C Reed"))
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "FullContactError: If you want to use 'location' or 'name' as an input, both must be present and they must have non-blank values"
    );

    let err = PersonRequest::builder()
        .location(Location::builder().address_line1("123/23").postal_code("23124").build())
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "FullContactError: If you want to use 'location'(or placekey) or 'name' as an input, both must be present and they must have non-blank values"
    );

    let err = TagsRequest::builder()
        .record_id("k1")
        .tag(Tag::new("segment", "o'brien"))
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "FullContactError: Both Key and Value must be populated for adding a Tag"
    );

    assert!(Profile::builder().username("bartlorang").build().is_err());
}

#[test]
fn test_placekey_without_name_is_queryable() {
    let request = PersonRequest::builder()
        .placekey("226@5z4-zvy-ffz")
        .build()
        .unwrap();
    assert_eq!(request.placekey(), Some("226@5z4-zvy-ffz"));
}
