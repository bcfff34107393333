use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use todo_server::{app, Database, Item, ItemStore, ItemView, NAME_PLACEHOLDER};
use tower::ServiceExt;

fn test_app() -> (Router, ItemStore) {
    let store = ItemStore::new(Database::in_memory().unwrap());
    (app(store.clone()), store)
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_items_empty() {
    let (app, _) = test_app();
    let resp = app.oneshot(empty_request("GET", "/items")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<ItemView> = body_json(resp).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn list_items_defaults_null_fields() {
    let (app, store) = test_app();
    store
        .database()
        .with_conn(|conn| {
            conn.execute("INSERT INTO Items (name, isComplete) VALUES (NULL, NULL)", [])?;
            Ok(())
        })
        .unwrap();

    let resp = app.oneshot(empty_request("GET", "/items")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Vec<ItemView> = body_json(resp).await;
    assert_eq!(
        items,
        vec![ItemView {
            id: 1,
            name: NAME_PLACEHOLDER.to_string(),
            is_complete: false,
        }]
    );

    // Stored representation keeps its nulls.
    let stored = store.find_by_id(1).unwrap().unwrap();
    assert!(stored.name.is_none());
    assert!(stored.is_complete.is_none());
}

// --- create ---

#[tokio::test]
async fn create_item_returns_201_with_location() {
    let (app, _) = test_app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/items",
            r#"{"name":"Buy milk","isComplete":false}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers()[http::header::LOCATION], "/items/1");
    let item: Item = body_json(resp).await;
    assert_eq!(item.id, 1);
    assert_eq!(item.name.as_deref(), Some("Buy milk"));
    assert_eq!(item.is_complete, Some(false));
}

#[tokio::test]
async fn create_item_without_completion_stores_false() {
    let (app, store) = test_app();
    let resp = app
        .oneshot(json_request("POST", "/items", r#"{"name":"Read"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let item: Item = body_json(resp).await;
    assert_eq!(item.is_complete, Some(false));
    assert_eq!(store.list_all().unwrap(), vec![item]);
}

#[tokio::test]
async fn create_item_malformed_json_returns_500() {
    let (app, _) = test_app();
    let resp = app
        .oneshot(json_request("POST", "/items", r#"{"name": 1"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "failed to read request body");
    assert!(body["innerException"].is_string());
}

// --- update ---

#[tokio::test]
async fn update_item_not_found() {
    let (app, store) = test_app();
    let resp = app
        .oneshot(json_request("PUT", "/items/9999", r#"{"isComplete":true}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(store.list_all().unwrap().is_empty());
}

#[tokio::test]
async fn update_item_non_numeric_id_returns_500() {
    let (app, _) = test_app();
    let resp = app
        .oneshot(json_request("PUT", "/items/abc", r#"{"isComplete":true}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "failed to read item id from path");
}

// --- delete ---

#[tokio::test]
async fn delete_item_not_found() {
    let (app, _) = test_app();
    let resp = app.oneshot(empty_request("DELETE", "/items/9999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- cors ---

#[tokio::test]
async fn cors_allows_any_origin() {
    let (app, _) = test_app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/items")
                .header(http::header::ORIGIN, "http://example.com")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[http::header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let (app, _) = test_app();
    let mut app = app.into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/items",
            r#"{"name":"Walk dog","isComplete":false}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Item = body_json(resp).await;
    let id = created.id;

    // list, should contain exactly the one item
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/items"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<ItemView> = body_json(resp).await;
    assert_eq!(
        items,
        vec![ItemView {
            id,
            name: "Walk dog".to_string(),
            is_complete: false,
        }]
    );

    // update, completion only
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/items/{id}"),
            r#"{"isComplete":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Item = body_json(resp).await;
    assert_eq!(updated.name.as_deref(), Some("Walk dog"));
    assert_eq!(updated.is_complete, Some(true));

    // update, explicit null name is ignored
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/items/{id}"),
            r#"{"name":null,"isComplete":null}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Item = body_json(resp).await;
    assert_eq!(updated.name.as_deref(), Some("Walk dog"));
    assert_eq!(updated.is_complete, Some(true));

    // update, name only
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/items/{id}"),
            r#"{"name":"Walk cat"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Item = body_json(resp).await;
    assert_eq!(updated.name.as_deref(), Some("Walk cat"));
    assert_eq!(updated.is_complete, Some(true));

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/items/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // delete again, 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/items/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete, empty
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/items"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<ItemView> = body_json(resp).await;
    assert!(items.is_empty());
}
