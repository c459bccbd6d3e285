//! Product controller for HTTP endpoints
//!
//! Validates request shape, then hands off to `ProductService`. Every
//! documented service failure is answered with 400.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::middleware::configure_extractors;
use crate::modules::products::models::{
    CreateProductRequest, PaginationQuery, UpdateProductRequest, ValidateProductsRequest,
};
use crate::modules::products::services::ProductService;

/// Create a product
/// POST /products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let product = service.create(request).await?;

    Ok(HttpResponse::Created().json(product))
}

/// List available products
/// GET /products?page=1&limit=10
pub async fn list_products(
    service: web::Data<Arc<ProductService>>,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    pagination.validate()?;

    let page = service.find_all(pagination).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Get an available product by ID
/// GET /products/{id}
pub async fn get_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product = service.find_one(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Partially update a product
/// PATCH /products/{id}
pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    request: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let product = service.update(path.into_inner(), request).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Soft delete a product
/// DELETE /products/{id}
pub async fn delete_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product = service.remove(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Check that a batch of product ids exists
/// POST /products/validate
pub async fn validate_products(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<ValidateProductsRequest>,
) -> Result<HttpResponse, AppError> {
    let products = service.validate_products(request.into_inner().ids).await?;

    Ok(HttpResponse::Ok().json(products))
}

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .configure(configure_extractors)
            .route("", web::post().to(create_product))
            .route("", web::get().to(list_products))
            .route("/validate", web::post().to(validate_products))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::patch().to(update_product))
            .route("/{id}", web::delete().to(delete_product)),
    );
}
