//! Contract tests for the report endpoints
//!
//! Drives the full application over the storefront fixture and checks the
//! response envelope, field names, ordering and totals.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, App};
use fantasy_products::config::ReportsConfig;
use serde_json::Value;

use helpers::{assert_envelope, assert_fields, empty_services, storefront_services};

async fn get_json(services: &fantasy_products::AppServices, uri: &str) -> (u16, Value) {
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

fn customer_row(record: &Value) -> (String, f64) {
    (
        record["last_name"].as_str().unwrap().to_string(),
        record["total"].as_f64().unwrap(),
    )
}

#[actix_web::test]
async fn test_top_spenders_returns_five_highest_active_customers() {
    let services = storefront_services(ReportsConfig::default()).await;

    let (status, body) = get_json(&services, "/reports/customers/top-spenders").await;

    assert_eq!(status, 200);
    let data = assert_envelope(&body, "customers found");
    let rows: Vec<(String, f64)> = data.iter().map(customer_row).collect();
    assert_eq!(
        rows,
        vec![
            ("Jordan".to_string(), 1200.0),
            ("Connor".to_string(), 650.0),
            ("Einstein".to_string(), 300.0),
            ("Newton".to_string(), 150.0),
            ("Curie".to_string(), 75.0),
        ]
    );
    assert_eq!(data[0]["first_name"], "Michael");
}

#[actix_web::test]
async fn test_top_spenders_record_shape() {
    let services = storefront_services(ReportsConfig::default()).await;

    let (_, body) = get_json(&services, "/reports/customers/top-spenders").await;

    let data = assert_envelope(&body, "customers found");
    for record in data {
        assert_fields(record, &["first_name", "last_name", "total"]);
        assert!(record["total"].is_number(), "total must be a JSON number");
    }
}

#[actix_web::test]
async fn test_top_spenders_limit_is_configurable() {
    let limits = ReportsConfig {
        top_customers_limit: 2,
        ..ReportsConfig::default()
    };
    let services = storefront_services(limits).await;

    let (_, body) = get_json(&services, "/reports/customers/top-spenders").await;

    let data = assert_envelope(&body, "customers found");
    assert_eq!(data.len(), 2);
    assert_eq!(data[1]["last_name"], "Connor");
}

#[actix_web::test]
async fn test_invoices_by_condition_groups_all_customers() {
    let services = storefront_services(ReportsConfig::default()).await;

    let (status, body) = get_json(&services, "/reports/customers/invoices-by-condition").await;

    assert_eq!(status, 200);
    let data = assert_envelope(&body, "customers found");
    assert_eq!(data.len(), 2);
    for record in data {
        assert_fields(record, &["condition", "total"]);
    }

    let active = data.iter().find(|r| r["condition"] == 1).unwrap();
    let inactive = data.iter().find(|r| r["condition"] == 0).unwrap();
    assert_eq!(active["total"].as_f64(), Some(2415.0));
    assert_eq!(inactive["total"].as_f64(), Some(23.0));
}

#[actix_web::test]
async fn test_top_products_ranks_by_quantity_sold() {
    let services = storefront_services(ReportsConfig::default()).await;

    let (status, body) = get_json(&services, "/reports/products/top-sold").await;

    assert_eq!(status, 200);
    let data = assert_envelope(&body, "products found");
    let rows: Vec<(&str, i64)> = data
        .iter()
        .map(|r| (r["description"].as_str().unwrap(), r["total"].as_i64().unwrap()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Wireless Mouse", 30),
            ("Mechanical Keyboard", 15),
            ("Headset", 12),
            ("Monitor", 8),
            ("Laptop", 5),
        ]
    );
    assert_fields(&data[0], &["description", "total"]);
}

#[actix_web::test]
async fn test_reports_on_empty_store_return_empty_arrays() {
    let services = empty_services();

    for (uri, message) in [
        ("/reports/customers/top-spenders", "customers found"),
        ("/reports/customers/invoices-by-condition", "customers found"),
        ("/reports/products/top-sold", "products found"),
    ] {
        let (status, body) = get_json(&services, uri).await;
        assert_eq!(status, 200, "{}", uri);
        assert!(assert_envelope(&body, message).is_empty(), "{}", uri);
    }
}
