//! Storefront metrics and the Prometheus scrape endpoint.

use std::sync::OnceLock;

use prometheus::{
    Encoder as _, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder, core::Collector,
};
use salvo::{
    Request, Response, handler,
    http::{StatusCode, header::CONTENT_TYPE},
};
use tracing::error;

/// Resources every request is attributed to; anything else is `other`.
const RESOURCES: [&str; 10] = [
    "categories",
    "products",
    "promocodes",
    "orders",
    "about",
    "seed",
    "fix-categories",
    "data",
    "admin",
    "healthcheck",
];

#[derive(Debug)]
struct StorefrontMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    orders_created_total: IntCounterVec,
    promocode_checks_total: IntCounterVec,
    admin_rejections_total: IntCounterVec,
}

static METRICS: OnceLock<Option<StorefrontMetrics>> = OnceLock::new();

/// Result of a promo code check, as counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PromocodeOutcome {
    Valid,
    Unknown,
    Inactive,
    Exhausted,
}

impl PromocodeOutcome {
    fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Unknown => "unknown",
            Self::Inactive => "inactive",
            Self::Exhausted => "exhausted",
        }
    }
}

/// Why the admin gate turned a request away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdminRejection {
    MissingCredentials,
    WrongCredentials,
}

impl AdminRejection {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingCredentials => "missing",
            Self::WrongCredentials => "wrong",
        }
    }
}

#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    tracked: bool,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let Some(metrics) = metrics() else {
            return Self { tracked: false };
        };

        metrics.requests_in_flight.inc();

        Self { tracked: true }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if self.tracked
            && let Some(metrics) = metrics()
        {
            metrics.requests_in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let resource = resource_of(route);

    metrics
        .requests_total
        .with_label_values(&[method, resource, route, status_class(status_code)])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, resource])
        .observe(duration_seconds);
}

/// Count a placed order, split by whether it carried a promo code.
pub(crate) fn record_order_created(with_promocode: bool) {
    if let Some(metrics) = metrics() {
        let promocode = if with_promocode { "applied" } else { "none" };

        metrics
            .orders_created_total
            .with_label_values(&[promocode])
            .inc();
    }
}

pub(crate) fn record_promocode_check(outcome: PromocodeOutcome) {
    if let Some(metrics) = metrics() {
        metrics
            .promocode_checks_total
            .with_label_values(&[outcome.as_str()])
            .inc();
    }
}

pub(crate) fn record_admin_rejection(reason: AdminRejection) {
    if let Some(metrics) = metrics() {
        metrics
            .admin_rejections_total
            .with_label_values(&[reason.as_str()])
            .inc();
    }
}

#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    let encoder = TextEncoder::new();

    let body = match encoder.encode_to_string(&metrics.registry.gather()) {
        Ok(body) => body,
        Err(source) => {
            error!("failed to encode metrics: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

            return;
        }
    };

    if let Err(source) = res.add_header(CONTENT_TYPE, encoder.format_type(), true) {
        error!("failed to set metrics content type: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    }

    res.render(body);
}

fn metrics() -> Option<&'static StorefrontMetrics> {
    METRICS
        .get_or_init(|| match build_metrics() {
            Ok(metrics) => Some(metrics),
            Err(source) => {
                error!("failed to build storefront metrics: {source}");
                None
            }
        })
        .as_ref()
}

fn build_metrics() -> prometheus::Result<StorefrontMetrics> {
    let registry = Registry::new();

    let requests_total = register(
        &registry,
        IntCounterVec::new(
            Opts::new(
                "medovik_http_requests_total",
                "HTTP requests by method, storefront resource, route and status class.",
            ),
            &["method", "resource", "route", "status_class"],
        )?,
    )?;

    let request_duration_seconds = register(
        &registry,
        HistogramVec::new(
            HistogramOpts::new(
                "medovik_http_request_duration_seconds",
                "HTTP request duration in seconds by method and storefront resource.",
            )
            .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
            &["method", "resource"],
        )?,
    )?;

    let requests_in_flight = register(
        &registry,
        IntGauge::new(
            "medovik_http_requests_in_flight",
            "HTTP requests currently being served.",
        )?,
    )?;

    let orders_created_total = register(
        &registry,
        IntCounterVec::new(
            Opts::new(
                "medovik_orders_created_total",
                "Orders placed, by whether a promo code was applied.",
            ),
            &["promocode"],
        )?,
    )?;

    let promocode_checks_total = register(
        &registry,
        IntCounterVec::new(
            Opts::new(
                "medovik_promocode_checks_total",
                "Promo code validations by outcome.",
            ),
            &["outcome"],
        )?,
    )?;

    let admin_rejections_total = register(
        &registry,
        IntCounterVec::new(
            Opts::new(
                "medovik_admin_rejections_total",
                "Requests turned away by the admin gate, by reason.",
            ),
            &["reason"],
        )?,
    )?;

    Ok(StorefrontMetrics {
        registry,
        requests_total,
        request_duration_seconds,
        requests_in_flight,
        orders_created_total,
        promocode_checks_total,
        admin_rejections_total,
    })
}

fn register<M>(registry: &Registry, metric: M) -> prometheus::Result<M>
where
    M: Collector + Clone + 'static,
{
    registry.register(Box::new(metric.clone()))?;

    Ok(metric)
}

/// The storefront resource a templated route belongs to.
fn resource_of(route: &str) -> &'static str {
    let mut segments = route.trim_start_matches('/').split('/');

    let segment = match segments.next() {
        Some("api") => segments.next().unwrap_or_default(),
        Some(other) => other,
        None => "",
    };

    RESOURCES
        .iter()
        .find(|resource| **resource == segment)
        .copied()
        .unwrap_or("other")
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[test]
    fn resource_is_the_segment_under_api() {
        assert_eq!(resource_of("/api/products/{id}"), "products");
        assert_eq!(resource_of("/api/categories/reorder"), "categories");
        assert_eq!(resource_of("/api/data/orders"), "data");
        assert_eq!(resource_of("/api/admin/login"), "admin");
        assert_eq!(resource_of("/healthcheck"), "healthcheck");
    }

    #[test]
    fn unknown_paths_fall_into_other() {
        assert_eq!(resource_of("/api"), "other");
        assert_eq!(resource_of("/docs"), "other");
        assert_eq!(resource_of("/api/wp-login.php"), "other");
    }

    #[test]
    fn status_class_buckets_by_hundreds() {
        assert_eq!(status_class(201), "2xx");
        assert_eq!(status_class(401), "4xx");
        assert_eq!(status_class(503), "5xx");
        assert_eq!(status_class(42), "other");
    }

    #[tokio::test]
    async fn metrics_endpoint_exposes_storefront_counters() -> TestResult {
        observe_request("POST", "/api/orders", 201, 0.042);
        record_order_created(true);
        record_promocode_check(PromocodeOutcome::Exhausted);
        record_admin_rejection(AdminRejection::WrongCredentials);

        let service =
            Service::new(Router::new().push(Router::with_path("metrics").get(metrics_handler)));

        let response = TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await?;

        assert!(
            response.contains("resource=\"orders\""),
            "expected orders resource label in response"
        );
        assert!(
            response.contains("medovik_orders_created_total{promocode=\"applied\"}"),
            "expected order counter in response"
        );
        assert!(
            response.contains("medovik_promocode_checks_total{outcome=\"exhausted\"}"),
            "expected promo outcome counter in response"
        );
        assert!(
            response.contains("medovik_admin_rejections_total{reason=\"wrong\"}"),
            "expected admin rejection counter in response"
        );
        assert!(
            response.contains("medovik_http_requests_in_flight"),
            "expected in-flight gauge in response"
        );

        Ok(())
    }
}
