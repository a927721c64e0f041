//! Integration tests for the PlanetTerp client against a mock server

use integration_planetterp::{HttpPlanetTerpClient, PlanetTerpClient, PlanetTerpConfig, PlanetTerpError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpPlanetTerpClient {
    let config = PlanetTerpConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    };
    HttpPlanetTerpClient::new(config).unwrap()
}

#[tokio::test]
async fn course_requests_reviews() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/course"))
        .and(query_param("name", "CMSC132"))
        .and(query_param("reviews", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "CMSC132",
            "reviews": [
                {"professor": "Clyde Kruskal", "review": "tough but fair"}
            ]
        })))
        .mount(&server)
        .await;

    let course = client_for(&server).course("CMSC132").await.unwrap();
    assert_eq!(course.name, "CMSC132");
    assert_eq!(course.reviews.len(), 1);
    assert_eq!(course.reviews[0].professor, "Clyde Kruskal");
}

#[tokio::test]
async fn grades_filters_are_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/grades"))
        .and(query_param("course", "CMSC132"))
        .and(query_param("professor", "Clyde Kruskal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"course": "CMSC132", "professor": "Clyde Kruskal", "semester": "202301", "A": 12, "B": 7}
        ])))
        .mount(&server)
        .await;

    let sections = client_for(&server)
        .grades(Some("CMSC132"), Some("Clyde Kruskal"))
        .await
        .unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].counts().get("A"), Some(&12));
}

#[tokio::test]
async fn professor_without_reviews() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/professor"))
        .and(query_param("name", "Clyde Kruskal"))
        .and(query_param("reviews", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Clyde Kruskal",
            "average_rating": 4.1
        })))
        .mount(&server)
        .await;

    let prof = client_for(&server)
        .professor("Clyde Kruskal", false)
        .await
        .unwrap();
    assert_eq!(prof.average_rating, Some(4.1));
    assert!(prof.reviews.is_none());
}

#[tokio::test]
async fn courses_listing_extracts_names() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "CMSC131", "department": "CMSC"},
            {"name": "CMSC132", "department": "CMSC"}
        ])))
        .mount(&server)
        .await;

    let names = client_for(&server).courses(100, 0).await.unwrap();
    assert_eq!(names, vec!["CMSC131".to_string(), "CMSC132".to_string()]);
}

#[tokio::test]
async fn listing_error_object_ends_pagination() {
    let server = MockServer::start().await;

    // Past the last page the API answers 200 with an error object
    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(query_param("offset", "200"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "no results"})),
        )
        .mount(&server)
        .await;

    let names = client_for(&server).courses(100, 200).await.unwrap();
    assert!(names.is_empty());
}

#[tokio::test]
async fn professors_listing_error_object_ends_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/professors"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "no results"})),
        )
        .mount(&server)
        .await;

    let names = client_for(&server).professors(100, 0).await.unwrap();
    assert!(names.is_empty());
}

#[tokio::test]
async fn rate_limit_maps_to_dedicated_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/grades"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .grades(Some("CMSC132"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, PlanetTerpError::RateLimitExceeded));
}

#[tokio::test]
async fn server_error_maps_to_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/professor"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .professor("Clyde Kruskal", true)
        .await
        .unwrap_err();
    assert!(matches!(err, PlanetTerpError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn missing_course_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/course"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).course("NOSUCH999").await.unwrap_err();
    assert!(matches!(err, PlanetTerpError::NotFound(_)));
}
