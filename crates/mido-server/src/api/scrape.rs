//! `POST /api/v1/scrape-products`: the mock scraping job endpoint.
//!
//! Unlike the rest of the API this endpoint answers with a flat
//! `{ "error": "..." }` body and its own permissive CORS headers, which
//! browser clients of the storefront rely on.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{
        header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use mido_core::ScrapeRequest;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use super::{AppState, ErrorBody};

pub(super) const SCRAPE_PATH: &str = "/api/v1/scrape-products";

#[derive(Debug)]
pub(super) enum ScrapeError {
    MethodNotAllowed,
    MissingParams,
    Internal,
}

impl ScrapeError {
    fn status(&self) -> StatusCode {
        match self {
            ScrapeError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ScrapeError::MissingParams => StatusCode::BAD_REQUEST,
            ScrapeError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ScrapeError::MethodNotAllowed => "Method not allowed",
            ScrapeError::MissingParams => "Missing params",
            ScrapeError::Internal => "Internal error",
        }
    }
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorBody {
                error: self.message(),
            }),
        )
            .into_response()
    }
}

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route(
            SCRAPE_PATH,
            post(scrape_products)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static("POST, OPTIONS"),
                )),
        )
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> ScrapeError {
    ScrapeError::MethodNotAllowed
}

async fn scrape_products(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ScrapeError> {
    let body = body.map_err(|e| {
        tracing::error!(error = %e, "failed to read scrape request body");
        ScrapeError::Internal
    })?;

    let request: ScrapeRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(error = %e, "scrape request body is not valid JSON");
        ScrapeError::Internal
    })?;

    let Some((source, category)) = request.params() else {
        tracing::debug!("scrape request rejected: missing source or category");
        return Err(ScrapeError::MissingParams);
    };

    let result = state.catalog.run(&source, &category, &mut rand::rng());

    let payload = serde_json::to_vec(&result).map_err(|e| {
        tracing::error!(error = %e, job_id = %result.job_id, "failed to serialize job result");
        ScrapeError::Internal
    })?;

    tracing::info!(
        job_id = %result.job_id,
        %source,
        %category,
        total_products = result.total_products,
        "mock scrape completed"
    );

    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        payload,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request};

    use super::super::test_support::{body_bytes, body_json, send, test_config};
    use super::*;
    use crate::middleware::REQUEST_ID_HEADER;

    fn scrape_request(method: Method, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(SCRAPE_PATH)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .expect("request")
    }

    async fn post_json(body: &str) -> Response {
        send(test_config(), scrape_request(Method::POST, body)).await
    }

    fn assert_cors(response: &Response) {
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_METHODS),
            Some(&HeaderValue::from_static("POST, OPTIONS"))
        );
    }

    #[tokio::test]
    async fn post_returns_job_envelope() {
        let response = post_json(r#"{"source":"alibaba","category":"electronics"}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert!(response.headers().get(REQUEST_ID_HEADER).is_some());
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["totalProducts"], 20);
        assert_eq!(json["message"], "Mock scraping completed - database integration pending");
        assert!(json["jobId"].as_str().is_some_and(|id| id.starts_with("mock_")));

        let products = json["products"].as_array().expect("products array");
        assert_eq!(products.len(), 5);
        for (idx, product) in products.iter().enumerate() {
            let i = idx + 1;
            assert_eq!(product["id"], i);
            assert_eq!(product["externalId"], format!("alibaba_electronics_{i}"));
            assert_eq!(product["title"], format!("electronics Product {i}"));
            assert_eq!(product["source"], "alibaba");
            assert_eq!(product["category"], "electronics");

            let price = product["price"].as_str().expect("price string");
            let value: f64 = price.parse().expect("numeric price");
            assert!((10.0..110.0).contains(&value), "price {price} out of range");
            assert_eq!(price.split('.').nth(1).map(str::len), Some(2));
        }
    }

    #[tokio::test]
    async fn post_ignores_extra_fields() {
        let response =
            post_json(r#"{"source":"aliexpress","category":"fashion","pageCount":3}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["products"][0]["externalId"], "aliexpress_fashion_1");
    }

    #[tokio::test]
    async fn post_uses_configured_variant() {
        let mut config = test_config();
        config.scrape_variant = mido_core::JobVariant::Standalone;
        let response = send(
            config,
            scrape_request(Method::POST, r#"{"source":"alibaba","category":"toys"}"#),
        )
        .await;

        let json = body_json(response).await;
        assert!(json["jobId"]
            .as_str()
            .is_some_and(|id| id.starts_with("standalone_")));
        assert_eq!(
            json["message"],
            "Standalone function working - no bundling issues"
        );
    }

    #[tokio::test]
    async fn missing_or_empty_params_are_rejected() {
        for body in [
            r#"{"category":"electronics"}"#,
            r#"{"source":"alibaba"}"#,
            r#"{"source":"","category":"electronics"}"#,
            r#"{"source":"alibaba","category":""}"#,
            r#"{"source":null,"category":"electronics"}"#,
            r#"{"source":false,"category":"electronics"}"#,
            r#"{"source":"alibaba","category":0}"#,
            r#"{"source":"alibaba","category":null}"#,
            "{}",
        ] {
            let response = post_json(body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert_cors(&response);
            let json = body_json(response).await;
            assert_eq!(json, serde_json::json!({ "error": "Missing params" }));
        }
    }

    #[tokio::test]
    async fn malformed_body_is_internal_error() {
        for body in ["not json", "", "null", "42"] {
            let response = post_json(body).await;
            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "body: {body:?}"
            );
            assert_cors(&response);
            let json = body_json(response).await;
            assert_eq!(json, serde_json::json!({ "error": "Internal error" }));
        }
    }

    #[tokio::test]
    async fn truthy_non_string_params_are_stringified() {
        let response = post_json(r#"{"source":"alibaba","category":7}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["products"][0]["externalId"], "alibaba_7_1");
        assert_eq!(json["products"][0]["title"], "7 Product 1");
        assert_eq!(json["products"][0]["category"], "7");
    }

    #[tokio::test]
    async fn get_is_method_not_allowed() {
        let response = send(test_config(), scrape_request(Method::GET, "")).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_cors(&response);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "error": "Method not allowed" }));
    }

    #[tokio::test]
    async fn put_and_delete_are_method_not_allowed() {
        for method in [Method::PUT, Method::DELETE, Method::PATCH] {
            let response = send(test_config(), scrape_request(method.clone(), "{}")).await;
            assert_eq!(
                response.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "method: {method}"
            );
        }
    }

    #[tokio::test]
    async fn options_returns_empty_ok() {
        let response = send(test_config(), scrape_request(Method::OPTIONS, "")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn repeated_requests_share_shape() {
        let body = r#"{"source":"alibaba","category":"electronics"}"#;
        let first = body_json(post_json(body).await).await;
        let second = body_json(post_json(body).await).await;

        let shape = |json: &serde_json::Value| {
            json["products"]
                .as_array()
                .expect("products")
                .iter()
                .map(|p| (p["externalId"].clone(), p["title"].clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(shape(&first), shape(&second));
        assert_eq!(first["totalProducts"], second["totalProducts"]);
    }
}
