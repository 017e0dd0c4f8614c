//! Dashboard API tests
//!
//! Drives the full route table (`configure_app`) against the bundled
//! launch dataset: layout, single figures and control-change callbacks.

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::App;
use serde_json::{Value, json};

use launch_dashboard::api::services::AppStartTime;
use launch_dashboard::config::DashboardConfig;
use launch_dashboard::dashboard::Dashboard;
use launch_dashboard::dataset::Dataset;
use launch_dashboard::runtime::modes::server::configure_app;

// =============================================================================
// Test Setup
// =============================================================================

fn dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("spacex_launch_dash.csv")
}

fn build_dashboard() -> Arc<Dashboard> {
    let dataset = Dataset::load(dataset_path()).expect("Failed to load bundled dataset");
    Arc::new(Dashboard::new(
        Arc::new(dataset),
        &DashboardConfig::default(),
    ))
}

fn start_time() -> AppStartTime {
    AppStartTime {
        start_datetime: chrono::Utc::now(),
    }
}

macro_rules! init_app {
    () => {
        test::init_service(App::new().configure(configure_app(build_dashboard(), start_time())))
            .await
    };
}

/// Sum of pie values, or of scatter points across all traces
fn figure_count(figure: &Value) -> u64 {
    figure["data"]
        .as_array()
        .expect("data must be an array")
        .iter()
        .map(|trace| match trace["type"].as_str() {
            Some("pie") => trace["values"]
                .as_array()
                .map(|v| v.iter().filter_map(Value::as_u64).sum())
                .unwrap_or(0),
            Some("scatter") => trace["x"].as_array().map(|x| x.len() as u64).unwrap_or(0),
            other => panic!("unexpected trace type {:?}", other),
        })
        .sum()
}

// =============================================================================
// Layout
// =============================================================================

#[actix_rt::test]
async fn test_layout_returns_view_tree_and_initial_state() {
    let app = init_app!();

    let req = TestRequest::get().uri("/api/layout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);

    let data = &body["data"];
    assert_eq!(data["layout"]["component"], "div");
    assert_eq!(data["initial_state"]["site-dropdown"], "ALL");
    assert_eq!(data["initial_state"]["payload-slider"], json!([0.0, 9600.0]));
    assert_eq!(
        data["outputs"],
        json!(["success-pie-chart", "success-payload-scatter-chart"])
    );

    let figures = data["figures"]["outputs"].as_object().unwrap();
    assert_eq!(figures.len(), 2);
    assert_eq!(figures["success-pie-chart"]["data"][0]["values"], json!([32, 24]));
    assert_eq!(figure_count(&figures["success-payload-scatter-chart"]), 56);

    let children = data["layout"]["children"].as_array().unwrap();
    assert_eq!(children[0]["component"], "heading");
    assert_eq!(children[0]["text"], "SpaceX Launch Records Dashboard");
}

// =============================================================================
// Figures
// =============================================================================

#[actix_rt::test]
async fn test_pie_for_all_sites_counts_every_record() {
    let app = init_app!();

    let req = TestRequest::get()
        .uri("/api/figures/success-pie-chart?site=ALL")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let figure = &body["data"];
    assert_eq!(figure["data"][0]["labels"], json!([0, 1]));
    assert_eq!(figure["data"][0]["values"], json!([32, 24]));
    assert_eq!(figure["layout"]["title"]["text"], "Success vs. Failure Counts");
}

#[actix_rt::test]
async fn test_pie_for_single_site() {
    let app = init_app!();

    let req = TestRequest::get()
        .uri("/api/figures/success-pie-chart?site=KSC%20LC-39A")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["data"][0]["values"], json!([3, 10]));
}

#[actix_rt::test]
async fn test_scatter_all_sites_full_range_includes_whole_dataset() {
    let app = init_app!();

    let req = TestRequest::get()
        .uri("/api/figures/success-payload-scatter-chart?site=ALL&low=0&high=10000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let figure = &body["data"];
    assert_eq!(figure_count(figure), 56);
    assert_eq!(figure["layout"]["xaxis"]["title"]["text"], "Payload Mass (kg)");
    assert_eq!(figure["layout"]["yaxis"]["title"]["text"], "class");
}

#[actix_rt::test]
async fn test_scatter_site_and_payload_filter() {
    let app = init_app!();

    let req = TestRequest::get()
        .uri("/api/figures/success-payload-scatter-chart?site=KSC%20LC-39A&low=2000&high=6000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let figure = &body["data"];
    assert_eq!(figure_count(figure), 11);

    let names: Vec<&str> = figure["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["FT", "B4", "B5"]);

    for trace in figure["data"].as_array().unwrap() {
        for x in trace["x"].as_array().unwrap() {
            let x = x.as_f64().unwrap();
            assert!((2000.0..=6000.0).contains(&x), "payload {} out of range", x);
        }
    }
}

#[actix_rt::test]
async fn test_unknown_site_yields_empty_figures() {
    let app = init_app!();

    let req = TestRequest::get()
        .uri("/api/figures/success-payload-scatter-chart?site=Boca%20Chica")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["data"], json!([]));
}

#[actix_rt::test]
async fn test_unknown_output_is_not_found() {
    let app = init_app!();

    let req = TestRequest::get()
        .uri("/api/figures/launch-map")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2000);
}

#[actix_rt::test]
async fn test_inverted_range_is_bad_request() {
    let app = init_app!();

    let req = TestRequest::get()
        .uri("/api/figures/success-payload-scatter-chart?low=6000&high=2000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2001);
}

#[actix_rt::test]
async fn test_pie_ignores_payload_range() {
    let app = init_app!();

    // 饼图只读站点，载荷范围即使倒置也不影响
    let req = TestRequest::get()
        .uri("/api/figures/success-pie-chart?site=ALL&low=6000&high=2000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["data"][0]["values"], json!([32, 24]));
}

#[actix_rt::test]
async fn test_non_numeric_query_is_bad_request() {
    let app = init_app!();

    let req = TestRequest::get()
        .uri("/api/figures/success-payload-scatter-chart?low=heavy")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);
}

// =============================================================================
// Callbacks
// =============================================================================

#[actix_rt::test]
async fn test_site_change_updates_both_charts() {
    let app = init_app!();

    let req = TestRequest::post()
        .uri("/api/callback")
        .set_json(json!({
            "changed": "site-dropdown",
            "state": {
                "site-dropdown": "VAFB SLC-4E",
                "payload-slider": [0.0, 10000.0]
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let outputs = body["data"]["outputs"].as_object().unwrap();
    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs["success-pie-chart"]["data"][0]["values"], json!([6, 4]));
    assert_eq!(figure_count(&outputs["success-payload-scatter-chart"]), 10);
}

#[actix_rt::test]
async fn test_slider_change_updates_scatter_only() {
    let app = init_app!();

    let req = TestRequest::post()
        .uri("/api/callback")
        .set_json(json!({
            "changed": "payload-slider",
            "state": {
                "site-dropdown": "ALL",
                "payload-slider": [9000.0, 10000.0]
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let outputs = body["data"]["outputs"].as_object().unwrap();
    assert_eq!(outputs.len(), 1);
    // 9600 kg 的五次发射都在 VAFB
    assert_eq!(figure_count(&outputs["success-payload-scatter-chart"]), 5);
}

#[actix_rt::test]
async fn test_callback_with_inverted_range_is_rejected() {
    let app = init_app!();

    let req = TestRequest::post()
        .uri("/api/callback")
        .set_json(json!({
            "changed": "payload-slider",
            "state": {
                "site-dropdown": "ALL",
                "payload-slider": [8000.0, 1000.0]
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2002);
}

#[actix_rt::test]
async fn test_callback_with_unknown_control_is_rejected() {
    let app = init_app!();

    let req = TestRequest::post()
        .uri("/api/callback")
        .set_json(json!({
            "changed": "launch-year",
            "state": {
                "site-dropdown": "ALL",
                "payload-slider": [0.0, 10000.0]
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Frontend
// =============================================================================

#[actix_rt::test]
async fn test_index_page_is_served() {
    let app = init_app!();

    let req = TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("<title>SpaceX Launch Records Dashboard</title>"));
    assert!(!html.contains("%DASHBOARD_TITLE%"));
}

#[actix_rt::test]
async fn test_static_asset_is_served() {
    let app = init_app!();

    let req = TestRequest::get().uri("/static/dashboard.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/javascript"
    );

    let req = TestRequest::get().uri("/static/missing.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
