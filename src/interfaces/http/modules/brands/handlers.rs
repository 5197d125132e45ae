//! Brand REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{BrandDto, BrandRequest};
use crate::domain::CatalogError;
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/brands",
    tag = "Brands",
    responses(
        (status = 200, description = "All brands in the catalog", body = ApiResponse<Vec<BrandDto>>)
    )
)]
pub async fn list_brands(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BrandDto>>>, CatalogError> {
    let brands = state.service.list_brands()?;
    let dtos: Vec<BrandDto> = brands.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/brands/{brand_name}",
    tag = "Brands",
    params(("brand_name" = String, Path, description = "Brand name")),
    responses(
        (status = 200, description = "Brand details", body = ApiResponse<BrandDto>),
        (status = 404, description = "Brand not found")
    )
)]
pub async fn get_brand(
    State(state): State<AppState>,
    Path(brand_name): Path<String>,
) -> Result<Json<ApiResponse<BrandDto>>, CatalogError> {
    match state.service.get_brand(&brand_name)? {
        Some(brand) => Ok(Json(ApiResponse::success(brand.into()))),
        None => Err(CatalogError::BrandNotFound),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/brands",
    tag = "Brands",
    request_body = BrandRequest,
    responses(
        (status = 201, description = "Brand created or replaced", body = ApiResponse<BrandDto>),
        (status = 400, description = "Invalid category in product list"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_brand(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<BrandRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BrandDto>>), CatalogError> {
    let brand = state.service.create_brand(req.to_domain()?)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(brand.into()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/brands/{brand_name}",
    tag = "Brands",
    params(("brand_name" = String, Path, description = "Brand name")),
    responses(
        (status = 204, description = "Brand deleted"),
        (status = 400, description = "No such brand to delete")
    )
)]
pub async fn delete_brand(
    State(state): State<AppState>,
    Path(brand_name): Path<String>,
) -> Result<StatusCode, CatalogError> {
    state.service.delete_brand(&brand_name)?;
    Ok(StatusCode::NO_CONTENT)
}
