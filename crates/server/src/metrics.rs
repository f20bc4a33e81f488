use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, register_int_gauge, IntCounterVec, IntGauge};

use crate::errors::JsonApiError;

// Prometheus metrics (default registry)
pub static DISH_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "dish_api_requests_total",
        "Dish API requests by operation and response status",
        &["operation", "status"]
    )
    .expect("register dish_api_requests_total")
});

pub static SEEDED_DISHES: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!(
        "dish_api_seeded_dishes",
        "Dishes inserted by the last startup seeding"
    )
    .expect("register dish_api_seeded_dishes")
});

/// Count one handled request for `operation`.
pub fn observe<T>(operation: &'static str, ok: StatusCode, res: &Result<T, JsonApiError>) {
    let status = match res {
        Ok(_) => ok,
        Err(e) => e.status,
    };
    DISH_REQUESTS_TOTAL.with_label_values(&[operation, status.as_str()]).inc();
}

pub async fn metrics_handler() -> (StatusCode, String) {
    common::metrics::encode_metrics()
}
