//! End-to-end tests of the REST exposure using axum-test

mod common;

use admin_views::prelude::*;
use axum::http::StatusCode;
use axum_test::TestServer;
use common::*;
use serde_json::{Value, json};

fn create_test_server() -> (TestServer, InMemoryRecordStore<Product>) {
    let products_store = InMemoryRecordStore::with_records(products());

    let config = ViewsConfig::from_yaml_str(
        r#"
views:
  - name: products
    page_size: 2
  - name: fraud_alerts
    select_all_scope: source
"#,
    )
    .expect("valid config");

    let app = ServerBuilder::new()
        .with_config(config)
        .with_store(products_store.clone())
        .with_store(InMemoryRecordStore::with_records(discounts()))
        .with_store(InMemoryRecordStore::with_records(alerts()))
        .build()
        .expect("Failed to build app");

    let server = TestServer::try_new(app).expect("Failed to create test server");
    (server, products_store)
}

fn row_ids(body: &Value) -> Vec<String> {
    body["rows"]
        .as_array()
        .expect("rows array")
        .iter()
        .map(|row| row["id"].as_str().expect("row id").to_string())
        .collect()
}

// =============================================================================
// Health and discovery
// =============================================================================

mod discovery_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let (server, _) = create_test_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_views_lists_registered_views() {
        let (server, _) = create_test_server();

        let response = server.get("/views").await;
        response.assert_status_ok();

        let body: Vec<Value> = response.json();
        let names: Vec<&str> = body.iter().filter_map(|v| v["resource"].as_str()).collect();
        assert_eq!(names, vec!["discounts", "fraud_alerts", "products"]);

        let products = body.iter().find(|v| v["resource"] == "products").unwrap();
        assert_eq!(products["page_size"], 2);
        assert_eq!(products["default_sort"], "name:asc");
    }
}

// =============================================================================
// Listing
// =============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_uses_default_sort_and_page_size() {
        let (server, _) = create_test_server();

        let response = server.get("/products").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(row_ids(&body), vec!["p1", "p2"]);
        assert_eq!(body["pagination"]["total"], 4);
        assert_eq!(body["pagination"]["total_pages"], 2);
        assert_eq!(body["sort"], "name:asc");
    }

    #[tokio::test]
    async fn test_list_with_search_filter_and_sort() {
        let (server, _) = create_test_server();

        let response = server
            .get("/products")
            .add_query_param("filter", r#"{"category":"Electronics"}"#)
            .add_query_param("sort", "price:desc")
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(row_ids(&body), vec!["p1", "p3"]);
        assert_eq!(body["visible_records"], 2);
        assert_eq!(body["total_records"], 4);
    }

    #[tokio::test]
    async fn test_list_search_is_case_insensitive() {
        let (server, _) = create_test_server();

        let response = server.get("/products").add_query_param("search", "DELTA").await;
        let body: Value = response.json();
        assert_eq!(row_ids(&body), vec!["p4"]);
    }

    #[tokio::test]
    async fn test_discounts_sorted_by_raw_amount() {
        let (server, _) = create_test_server();

        let response = server
            .get("/discounts")
            .add_query_param("sort", "amount:desc")
            .await;
        let body: Value = response.json();
        assert_eq!(row_ids(&body), vec!["d2", "d1", "d3"]);
    }

    #[tokio::test]
    async fn test_alerts_default_to_severity_rank() {
        let (server, _) = create_test_server();

        let body: Value = server.get("/fraud_alerts").await.json();
        let ids = row_ids(&body);
        assert_eq!(ids.last().map(String::as_str), Some("a1"));
        assert_eq!(body["sort"], "severity:desc");
    }

    #[tokio::test]
    async fn test_list_second_page() {
        let (server, _) = create_test_server();

        let body: Value = server
            .get("/products")
            .add_query_param("page", "2")
            .await
            .json();
        assert_eq!(row_ids(&body), vec!["p4", "p3"]);
        assert_eq!(body["pagination"]["has_next"], false);
    }

    #[tokio::test]
    async fn test_no_match_reports_empty_status() {
        let (server, _) = create_test_server();

        let body: Value = server
            .get("/products")
            .add_query_param("search", "no such product")
            .await
            .json();
        assert_eq!(body["status"]["kind"], "empty");
    }

    #[tokio::test]
    async fn test_unknown_sort_key_is_bad_request() {
        let (server, _) = create_test_server();

        let response = server
            .get("/products")
            .add_query_param("sort", "popularity")
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "UNKNOWN_SORT_KEY");
        assert!(body["details"]["allowed"].as_array().is_some());
    }

    #[tokio::test]
    async fn test_malformed_filter_is_bad_request() {
        let (server, _) = create_test_server();

        let response = server
            .get("/products")
            .add_query_param("filter", "status=Active")
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "MALFORMED_FILTER");
    }
}

// =============================================================================
// Create and bulk actions
// =============================================================================

mod mutation_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_product() {
        let (server, store) = create_test_server();

        let response = server
            .post("/products")
            .json(&json!({
                "name": "Desk lamp",
                "category": "Home",
                "price": 39.0
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["name"], "Desk lamp");
        assert_eq!(body["status"], "Draft");
        assert!(body["id"].as_str().is_some());
        assert_eq!(store.len().unwrap(), 5);
    }

    #[tokio::test]
    async fn test_create_invalid_draft_is_unprocessable() {
        let (server, store) = create_test_server();

        let response = server
            .post("/products")
            .json(&json!({
                "name": "",
                "category": "Home",
                "price": -5.0
            }))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["details"]["fields"]["name"].is_array());
        assert_eq!(store.len().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_bulk_action_reports_per_record_outcome() {
        let (server, store) = create_test_server();

        let response = server
            .post("/products/actions")
            .json(&json!({ "action": "delete", "ids": ["p1", "ghost"] }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["succeeded"], json!(["p1"]));
        assert_eq!(body["failed"], json!(["ghost"]));
        assert_eq!(store.len().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_unknown_bulk_action_rejected() {
        let (server, _) = create_test_server();

        let response = server
            .post("/products/actions")
            .json(&json!({ "action": "teleport", "ids": ["p1"] }))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "UNKNOWN_ACTION");
    }

    #[tokio::test]
    async fn test_empty_bulk_action_rejected() {
        let (server, _) = create_test_server();

        let response = server
            .post("/products/actions")
            .json(&json!({ "action": "publish", "ids": [] }))
            .expect_failure()
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "EMPTY_SELECTION");
    }
}
