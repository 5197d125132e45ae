//! Pricing report handlers
//!
//! The report types from the pricing engine double as the wire shapes;
//! there is nothing to map.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::pricing::{CategoryPriceExtremes, CheapestFullBrand, CheapestPerCategory};
use crate::domain::CatalogError;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::modules::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct CategoryQuery {
    /// Category name, case-insensitive.
    pub category: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/pricing/lowest-by-category",
    tag = "Pricing",
    responses(
        (status = 200, description = "Cheapest product per category with total", body = ApiResponse<CheapestPerCategory>),
        (status = 404, description = "Catalog has no products at all")
    )
)]
pub async fn lowest_by_category(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CheapestPerCategory>>, CatalogError> {
    let report = state.service.lowest_priced_by_category()?;
    Ok(Json(ApiResponse::success(report)))
}

#[utoipa::path(
    get,
    path = "/api/v1/pricing/lowest-brand",
    tag = "Pricing",
    responses(
        (status = 200, description = "Cheapest single brand covering all categories", body = ApiResponse<CheapestFullBrand>),
        (status = 404, description = "No brand stocks all categories")
    )
)]
pub async fn lowest_brand(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CheapestFullBrand>>, CatalogError> {
    let report = state.service.lowest_total_brand()?;
    Ok(Json(ApiResponse::success(report)))
}

#[utoipa::path(
    get,
    path = "/api/v1/pricing/category",
    tag = "Pricing",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Min/max prices in the category, all ties reported", body = ApiResponse<CategoryPriceExtremes>),
        (status = 400, description = "Unrecognized category"),
        (status = 404, description = "No products in the category")
    )
)]
pub async fn category_extremes(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<ApiResponse<CategoryPriceExtremes>>, CatalogError> {
    let report = state.service.category_price_extremes(&query.category)?;
    Ok(Json(ApiResponse::success(report)))
}
