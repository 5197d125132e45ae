//! Product REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{ProductDto, ProductRequest};
use crate::domain::CatalogError;
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::AppState;

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created (brand auto-created if absent)", body = ApiResponse<ProductDto>),
        (status = 400, description = "Invalid category"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductDto>>), CatalogError> {
    let product = state.service.create_product(req.to_domain()?)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(product.into())),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/brands/{brand_name}/products",
    tag = "Products",
    params(("brand_name" = String, Path, description = "Brand to update")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductDto>),
        (status = 404, description = "Brand or product not found"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(brand_name): Path<String>,
    ValidatedJson(req): ValidatedJson<ProductRequest>,
) -> Result<Json<ApiResponse<ProductDto>>, CatalogError> {
    let product = state.service.update_product(&brand_name, req.to_domain()?)?;
    Ok(Json(ApiResponse::success(product.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/brands/{brand_name}/products/{category}",
    tag = "Products",
    params(
        ("brand_name" = String, Path, description = "Brand name"),
        ("category" = String, Path, description = "Category name, case-insensitive")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Invalid category"),
        (status = 404, description = "Brand or product not found")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path((brand_name, category)): Path<(String, String)>,
) -> Result<StatusCode, CatalogError> {
    state.service.delete_product(&brand_name, &category)?;
    Ok(StatusCode::NO_CONTENT)
}
