//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::CatalogService;
use crate::interfaces::http::common::{ApiResponse, ErrorBody};
use crate::interfaces::http::modules::{brands, health, pricing, products, AppState};
use crate::interfaces::http::request_id::request_id_middleware;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Pricing
        pricing::handlers::lowest_by_category,
        pricing::handlers::lowest_brand,
        pricing::handlers::category_extremes,
        // Brands
        brands::handlers::list_brands,
        brands::handlers::get_brand,
        brands::handlers::create_brand,
        brands::handlers::delete_brand,
        // Products
        products::handlers::create_product,
        products::handlers::update_product,
        products::handlers::delete_product,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            ErrorBody,
            // Brands
            brands::BrandDto,
            brands::BrandRequest,
            // Products
            products::ProductDto,
            products::ProductRequest,
            // Health
            health::handlers::HealthResponse,
            health::handlers::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Pricing", description = "Aggregate pricing reports over the catalog"),
        (name = "Brands", description = "Brand CRUD operations"),
        (name = "Products", description = "Product CRUD operations"),
    ),
    info(
        title = "Catalog Pricing API",
        version = "1.0.0",
        description = "REST API over an in-memory brand/product catalog with aggregate pricing reports",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(service: Arc<CatalogService>) -> Router {
    let state = AppState {
        service,
        started_at: Arc::new(Instant::now()),
    };

    let api_routes = Router::new()
        // --- Pricing reports ---
        .route(
            "/pricing/lowest-by-category",
            get(pricing::handlers::lowest_by_category),
        )
        .route("/pricing/lowest-brand", get(pricing::handlers::lowest_brand))
        .route("/pricing/category", get(pricing::handlers::category_extremes))
        // --- Brand CRUD ---
        .route(
            "/brands",
            get(brands::handlers::list_brands).post(brands::handlers::create_brand),
        )
        .route(
            "/brands/{brand_name}",
            get(brands::handlers::get_brand).delete(brands::handlers::delete_brand),
        )
        // --- Product CRUD ---
        .route("/products", post(products::handlers::create_product))
        .route(
            "/brands/{brand_name}/products",
            put(products::handlers::update_product),
        )
        .route(
            "/brands/{brand_name}/products/{category}",
            delete(products::handlers::delete_product),
        );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::handlers::health_check))
        .nest("/api/v1", api_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;

    use crate::infrastructure::storage::{InMemoryCatalogRepository, LockSettings};

    fn app(seed: bool) -> Router {
        let repo = InMemoryCatalogRepository::new(LockSettings::default());
        if seed {
            repo.seed_reference_data().unwrap();
        }
        create_api_router(Arc::new(CatalogService::new(Arc::new(repo))))
    }

    async fn send(app: &mut Router, req: Request<Body>) -> (StatusCode, Value) {
        use tower::Service;
        let mut svc = app.as_service();
        let resp = svc.call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_req(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn seeded_top_extremes_match_reference_answer() {
        let mut app = app(true);
        let (status, json) = send(&mut app, get_req("/api/v1/pricing/category?category=top")).await;

        assert_eq!(status, StatusCode::OK);
        let data = &json["data"];
        assert_eq!(data["category"], "TOP");
        assert_eq!(data["lowest_price"][0]["brand_name"], "C");
        assert_eq!(data["lowest_price"][0]["price"], 10000);
        assert_eq!(data["highest_price"][0]["brand_name"], "I");
        assert_eq!(data["highest_price"][0]["price"], 11400);
    }

    #[tokio::test]
    async fn seeded_lowest_by_category_has_positive_total_and_full_coverage() {
        let mut app = app(true);
        let (status, json) = send(&mut app, get_req("/api/v1/pricing/lowest-by-category")).await;

        assert_eq!(status, StatusCode::OK);
        let data = &json["data"];
        assert_eq!(data["items"].as_array().unwrap().len(), 8);
        assert!(data["total_price"].as_u64().unwrap() > 0);
    }

    #[tokio::test]
    async fn seeded_lowest_brand_is_d() {
        let mut app = app(true);
        let (status, json) = send(&mut app, get_req("/api/v1/pricing/lowest-brand")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["brand_name"], "D");
        assert_eq!(json["data"]["total_price"], 36100);
    }

    #[tokio::test]
    async fn unknown_category_is_bad_request_with_stable_code() {
        let mut app = app(true);
        let (status, json) = send(&mut app, get_req("/api/v1/pricing/category?category=couture")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["name"], "INVALID_CATEGORY");
        assert_eq!(json["code"], "P003");
        assert_eq!(json["status"], 400);
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn create_brand_with_empty_name_fails_before_the_store() {
        let mut app = app(false);
        let body = serde_json::json!({"brand_name": "", "products": []});
        let (status, _) = send(&mut app, json_req("POST", "/api/v1/brands", body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        // Nothing was stored.
        let (_, json) = send(&mut app, get_req("/api/v1/brands")).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn brand_crud_round_trip() {
        let mut app = app(false);

        let body = serde_json::json!({
            "brand_name": "muji",
            "products": [{"brand_name": "muji", "category": "top", "price": 9900}]
        });
        let (status, json) = send(&mut app, json_req("POST", "/api/v1/brands", body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["brand_name"], "muji");

        let (status, json) = send(&mut app, get_req("/api/v1/brands/muji")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["products"][0]["category"], "TOP");

        let (status, _) = send(
            &mut app,
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/brands/muji")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, json) = send(&mut app, get_req("/api/v1/brands/muji")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "P001");
    }

    #[tokio::test]
    async fn delete_absent_brand_is_bad_request() {
        let mut app = app(false);
        let (status, json) = send(
            &mut app,
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/brands/ghost")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["name"], "NO_BRAND_DELETED");
        assert_eq!(json["code"], "P005");
    }

    #[tokio::test]
    async fn product_create_update_delete_flow() {
        let mut app = app(false);

        let body = serde_json::json!({"brand_name": "acme", "category": "hat", "price": 1500});
        let (status, json) = send(&mut app, json_req("POST", "/api/v1/products", body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["category"], "HAT");

        let body = serde_json::json!({"brand_name": "acme", "category": "hat", "price": 1200});
        let (status, json) = send(&mut app, json_req("PUT", "/api/v1/brands/acme/products", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["price"], 1200);

        // Updating a category the brand does not stock is not found.
        let body = serde_json::json!({"brand_name": "acme", "category": "bag", "price": 900});
        let (status, json) = send(&mut app, json_req("PUT", "/api/v1/brands/acme/products", body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "P002");

        let (status, _) = send(
            &mut app,
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/brands/acme/products/hat")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn product_price_zero_is_rejected_by_validation() {
        let mut app = app(false);
        let body = serde_json::json!({"brand_name": "acme", "category": "hat", "price": 0});
        let (status, _) = send(&mut app, json_req("POST", "/api/v1/products", body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn health_reports_catalog_state() {
        let mut app = app(true);
        let (status, json) = send(&mut app, get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["catalog"]["brand_count"], 9);
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        use tower::Service;
        let mut app = app(false);
        let mut svc = app.as_service();
        let resp = svc.call(get_req("/health")).await.unwrap();
        assert!(resp.headers().contains_key("x-request-id"));
    }
}
