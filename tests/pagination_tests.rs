//! Page-sequence tests against a synthetic transport: cursor walks,
//! since-id walks, termination, and restartability.

use serde::{Deserialize, Serialize};
use serde_json::json;
use shopify_admin::clients::HttpMethod;
use shopify_admin::rest::{
    PaginationKind, ResourceOperation, ResourcePath, RestResource,
};
use shopify_admin::{AdminConfig, Credentials, HostUrl, RestClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE: &str = "/admin/api/2025-10";

fn test_client(server: &MockServer) -> RestClient {
    let credentials = Credentials::from_parts("test-shop", "shpat_test_token").unwrap();
    let config = AdminConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .build();
    RestClient::new(&credentials, Some(&config))
}

/// Cursor-paginated test resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Widget {
    id: Option<u64>,
}

impl RestResource for Widget {
    type Id = u64;
    type FindParams = ();
    type AllParams = ();
    type CountParams = ();

    const NAME: &'static str = "Widget";
    const KEY: &'static str = "widget";
    const PLURAL: &'static str = "widgets";
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &[],
        "widgets",
    )];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Since-id-paginated test resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct Gadget {
    id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct GadgetListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

impl RestResource for Gadget {
    type Id = u64;
    type FindParams = ();
    type AllParams = GadgetListParams;
    type CountParams = ();

    const NAME: &'static str = "Gadget";
    const KEY: &'static str = "gadget";
    const PLURAL: &'static str = "gadgets";
    const PAGINATION: PaginationKind = PaginationKind::SinceId;
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &[],
        "gadgets",
    )];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

async fn mount_cursor_stream(server: &MockServer) {
    // Second page, reached only with the token from the first
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/widgets.json")))
        .and(query_param("page_info", "tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "widgets": [ { "id": 3 }, { "id": 4 } ]
        })))
        .mount(server)
        .await;

    // First page carries the continuation link
    let link = format!(
        "<{}{BASE}/widgets.json?page_info=tok-2>; rel=\"next\"",
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/widgets.json")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", link.as_str())
                .set_body_json(json!({
                    "widgets": [ { "id": 1 }, { "id": 2 } ]
                })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_cursor_walk_terminates_exactly_once() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    mount_cursor_stream(&server).await;

    let mut pages = Widget::pages(&client, None).unwrap();

    let first = pages.next_page().await.unwrap().unwrap();
    assert_eq!(
        first.iter().map(|w| w.id.unwrap()).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert!(first.has_next_page());

    let second = pages.next_page().await.unwrap().unwrap();
    assert_eq!(
        second.iter().map(|w| w.id.unwrap()).collect::<Vec<_>>(),
        vec![3, 4]
    );
    assert!(!second.has_next_page());

    // The sequence ends exactly once the metadata stops indicating more,
    // and stays ended
    assert!(pages.next_page().await.is_none());
    assert!(pages.next_page().await.is_none());
}

#[tokio::test]
async fn test_listing_is_restartable_with_identical_boundaries() {
    let server = MockServer::start().await;
    let client = test_client(&server);
    mount_cursor_stream(&server).await;

    let mut boundaries = Vec::new();
    for _ in 0..2 {
        let mut pages = Widget::pages(&client, None).unwrap();
        let mut run = Vec::new();
        while let Some(page) = pages.next_page().await {
            let page = page.unwrap();
            run.push(page.iter().map(|w| w.id.unwrap()).collect::<Vec<_>>());
        }
        boundaries.push(run);
    }

    // Identical responses reproduce identical page boundaries
    assert_eq!(boundaries[0], boundaries[1]);
    assert_eq!(boundaries[0], vec![vec![1, 2], vec![3, 4]]);
}

#[tokio::test]
async fn test_since_id_walk_stops_on_short_page() {
    let server = MockServer::start().await;
    let client = test_client(&server);

    // Continuation from the last seen ID
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/gadgets.json")))
        .and(query_param("since_id", "11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gadgets": [ { "id": 12 } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // First page fills the limit, so the walk continues
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/gadgets.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gadgets": [ { "id": 10 }, { "id": 11 } ]
        })))
        .mount(&server)
        .await;

    let params = GadgetListParams { limit: Some(2) };
    let mut pages = Gadget::pages(&client, Some(params)).unwrap();

    let first = pages.next_page().await.unwrap().unwrap();
    assert_eq!(first.len(), 2);

    // One item against a limit of two: the last page
    let second = pages.next_page().await.unwrap().unwrap();
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, Some(12));

    assert!(pages.next_page().await.is_none());
}
